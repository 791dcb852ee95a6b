use super::{id_string, null_default};
use serde::{Deserialize, Serialize};

/// Query value meaning "no filter" for every pet filter.
pub const ANY: &str = "全部";
/// Sort option: nearest first by the number in `distance`.
pub const SORT_BY_DISTANCE: &str = "距離由近到遠";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub age_group: String,
    pub gender: String,
    pub size: String,
    pub pet_type: String,
    pub location: String,
    #[serde(default)]
    pub distance: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub adoption_fee: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub is_vaccinated: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub is_neutered: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PetFilter {
    pub location: Option<String>,
    pub age_group: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub pet_type: Option<String>,
    pub sort: Option<String>,
}

impl PetFilter {
    /// Column filters to apply, skipping unset values and the "any" choice.
    pub fn equalities(&self) -> Vec<(&'static str, &str)> {
        [
            ("location", &self.location),
            ("age_group", &self.age_group),
            ("size", &self.size),
            ("gender", &self.gender),
            ("pet_type", &self.pet_type),
        ]
        .into_iter()
        .filter_map(|(col, v)| match v.as_deref() {
            Some(v) if !v.is_empty() && v != ANY => Some((col, v)),
            _ => None,
        })
        .collect()
    }
}
