use super::{id_string, null_default};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Interview,
    Completed,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "審核中",
            ApplicationStatus::Interview => "已安排面談",
            ApplicationStatus::Completed => "已完成",
            ApplicationStatus::Rejected => "未通過",
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "interview" => Ok(ApplicationStatus::Interview),
            "completed" => Ok(ApplicationStatus::Completed),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!("unknown application status: {}", s)),
        }
    }
}

/// Display label for a stored status; unknown values read as 未知.
pub fn status_label(status: &str) -> &'static str {
    status.parse::<ApplicationStatus>().map(ApplicationStatus::label).unwrap_or("未知")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdoptionApplication {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(deserialize_with = "id_string")]
    pub pet_id: String,
    pub status: String,
    /// Filled from `status` after decoding.
    #[serde(default)]
    pub status_label: String,
    #[serde(default, deserialize_with = "null_default")]
    pub housing_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub outdoor_space: String,
    #[serde(default, deserialize_with = "null_default")]
    pub is_renting: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub has_pets: bool,
    #[serde(default)]
    pub experience: Option<String>,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub interview_date: Option<NaiveDate>,
    #[serde(default)]
    pub interview_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdoptionApplication {
    pub fn with_label(mut self) -> Self {
        self.status_label = status_label(&self.status).to_string();
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdoptionApplicationCreate {
    pub pet_id: String,
    pub housing_type: String,
    pub outdoor_space: String,
    #[serde(default)]
    pub is_renting: bool,
    #[serde(default)]
    pub has_pets: bool,
    #[serde(default)]
    pub experience: Option<String>,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub agreed: bool,
}

/// Row shape for inserts into `adoption_applications`.
#[derive(Serialize)]
pub struct NewApplication<'a> {
    pub user_id: &'a str,
    pub pet_id: &'a str,
    pub status: ApplicationStatus,
    pub housing_type: &'a str,
    pub outdoor_space: &'a str,
    pub is_renting: bool,
    pub has_pets: bool,
    pub experience: Option<&'a str>,
    pub full_name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
}

impl<'a> NewApplication<'a> {
    pub fn pending(user_id: &'a str, data: &'a AdoptionApplicationCreate) -> Self {
        NewApplication {
            user_id,
            pet_id: &data.pet_id,
            status: ApplicationStatus::Pending,
            housing_type: &data.housing_type,
            outdoor_space: &data.outdoor_space,
            is_renting: data.is_renting,
            has_pets: data.has_pets,
            experience: data.experience.as_deref(),
            full_name: &data.full_name,
            phone: &data.phone,
            email: &data.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_known_statuses() {
        assert_eq!(status_label("pending"), "審核中");
        assert_eq!(status_label("interview"), "已安排面談");
        assert_eq!(status_label("completed"), "已完成");
        assert_eq!(status_label("rejected"), "未通過");
        assert_eq!(status_label("archived"), "未知");
    }
}
