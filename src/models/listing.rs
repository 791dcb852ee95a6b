use super::id_string;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Inactive,
    Adopted,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Inactive => "inactive",
            ListingStatus::Adopted => "adopted",
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ListingStatus::Active),
            "inactive" => Ok(ListingStatus::Inactive),
            "adopted" => Ok(ListingStatus::Adopted),
            _ => Err(format!("unknown listing status: {}", s)),
        }
    }
}

fn default_status() -> String {
    ListingStatus::Active.as_str().to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PetListing {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    pub name: String,
    pub pet_type: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetListingCreate {
    pub name: String,
    pub pet_type: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Row shape for inserts into `pet_listings`.
#[derive(Serialize)]
pub struct NewListing<'a> {
    pub user_id: &'a str,
    #[serde(flatten)]
    pub data: &'a PetListingCreate,
    pub status: ListingStatus,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListingStatusQuery {
    pub status: String,
}
