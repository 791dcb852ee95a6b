use crate::models::Pet;
use regex::Regex;
use std::sync::OnceLock;

fn number_pattern() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("number pattern is valid"))
}

/// First number in a distance label such as "2.5 公里外"; unknown distances sort last.
fn distance_km(label: Option<&str>) -> f64 {
    label
        .and_then(|s| number_pattern().find(s))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::INFINITY)
}

/// Nearest first; ties keep their original order.
pub fn sort_by_distance(pets: &mut [Pet]) {
    pets.sort_by(|a, b| distance_km(a.distance.as_deref()).total_cmp(&distance_km(b.distance.as_deref())));
}
