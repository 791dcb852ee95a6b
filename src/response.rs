//! Response bodies for mutations: `{ "message", "success" }`, optionally with the created id.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActionBody {
    pub message: &'static str,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub message: &'static str,
    pub success: bool,
    #[serde(flatten)]
    pub id: CreatedId,
}

/// Created id under the key the frontend expects for that resource.
#[derive(Debug, Serialize)]
pub enum CreatedId {
    #[serde(rename = "application_id")]
    Application(Option<String>),
    #[serde(rename = "listing_id")]
    Listing(Option<String>),
}

pub fn success_action(message: &'static str) -> Json<ActionBody> {
    Json(ActionBody { message, success: true })
}

pub fn success_created(message: &'static str, id: CreatedId) -> Json<CreatedBody> {
    Json(CreatedBody {
        message,
        success: true,
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_id_uses_resource_key() {
        let body = success_created("刊登成功", CreatedId::Listing(Some("3".into())));
        assert_eq!(
            serde_json::to_value(&body.0).unwrap(),
            json!({"message": "刊登成功", "success": true, "listing_id": "3"})
        );
        let body = success_created("申請已成功提交", CreatedId::Application(None));
        assert_eq!(
            serde_json::to_value(&body.0).unwrap(),
            json!({"message": "申請已成功提交", "success": true, "application_id": null})
        );
    }
}
