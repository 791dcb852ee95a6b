use super::id_string;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub author: String,
    pub pet_name: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}
