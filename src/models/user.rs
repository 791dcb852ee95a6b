use super::id_string;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub member_since: Option<NaiveDate>,
}

impl User {
    /// Profile served when the user row is missing or cannot be read.
    pub fn fallback(id: &str) -> Self {
        User {
            id: id.to_string(),
            name: "Alex".into(),
            email: "alex@example.com".into(),
            avatar_url: Some("https://picsum.photos/seed/alex/300/300".into()),
            member_since: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub applications_count: u64,
    pub favorites_count: u64,
    pub visits_count: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FavoriteCreate {
    pub pet_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteIds {
    pub pet_ids: Vec<String>,
}

/// Row shape for inserts into `favorites`.
#[derive(Serialize)]
pub struct NewFavorite<'a> {
    pub user_id: &'a str,
    pub pet_id: &'a str,
}
