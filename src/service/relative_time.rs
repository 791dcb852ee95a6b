use chrono::{DateTime, NaiveDateTime, Utc};

const UNKNOWN: &str = "未知";

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|n| n.and_utc())
}

/// Human relative time ("剛剛", "5 分鐘前", "昨天", ...) for a stored timestamp.
pub fn format_relative(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(dt) = raw.and_then(parse_timestamp) else {
        return UNKNOWN.to_string();
    };
    let secs = (now - dt).num_seconds().max(0);
    let days = secs / 86_400;
    let rem = secs % 86_400;
    match days {
        0 if rem < 60 => "剛剛".to_string(),
        0 if rem < 3_600 => format!("{} 分鐘前", rem / 60),
        0 => format!("{} 小時前", rem / 3_600),
        1 => "昨天".to_string(),
        n => format!("{} 天前", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn buckets() {
        assert_eq!(format_relative(Some(&ago(Duration::seconds(30))), now()), "剛剛");
        assert_eq!(format_relative(Some(&ago(Duration::minutes(5))), now()), "5 分鐘前");
        assert_eq!(format_relative(Some(&ago(Duration::hours(3))), now()), "3 小時前");
        assert_eq!(format_relative(Some(&ago(Duration::hours(30))), now()), "昨天");
        assert_eq!(format_relative(Some(&ago(Duration::days(4))), now()), "4 天前");
    }

    #[test]
    fn accepts_zulu_and_naive_timestamps() {
        assert_eq!(format_relative(Some("2024-05-10T11:58:00Z"), now()), "2 分鐘前");
        assert_eq!(format_relative(Some("2024-05-10T11:00:00.123456"), now()), "1 小時前");
    }

    #[test]
    fn missing_or_garbage_is_unknown() {
        assert_eq!(format_relative(None, now()), "未知");
        assert_eq!(format_relative(Some("yesterday-ish"), now()), "未知");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(format_relative(Some(&(now() + Duration::minutes(2)).to_rfc3339()), now()), "剛剛");
    }
}
