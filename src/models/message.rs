use super::id_string;
use serde::{Deserialize, Serialize};

pub const SENDER_USER: &str = "user";
pub const SENDER_OTHER: &str = "other";

/// Stored message row.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub thread_id: String,
    pub sender: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MessageRow {
    /// Preview line for a thread list.
    pub fn preview(&self) -> &str {
        match (self.text.as_deref(), self.image_url.as_deref()) {
            (Some(t), _) if !t.is_empty() => t,
            (_, Some(i)) if !i.is_empty() => "傳送了一張相片",
            _ => NO_MESSAGES,
        }
    }
}

pub const NO_MESSAGES: &str = "尚無訊息";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub thread_id: String,
    pub sender: String,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub timestamp: String,
}

impl Message {
    pub fn from_row(row: MessageRow, timestamp: String) -> Self {
        Message {
            id: row.id,
            thread_id: row.thread_id,
            sender: row.sender,
            text: row.text,
            image_url: row.image_url,
            timestamp,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageCreate {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MessageCreate {
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map(str::is_empty).unwrap_or(true);
        blank(&self.text) && blank(&self.image_url)
    }
}

/// Row shape for inserts into `messages`.
#[derive(Serialize)]
pub struct NewMessage<'a> {
    pub thread_id: &'a str,
    pub sender: &'static str,
    pub text: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub is_read: bool,
}

/// Stored thread row.
#[derive(Clone, Debug, Deserialize)]
pub struct ThreadRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub shelter_name: String,
    #[serde(default)]
    pub shelter_avatar: Option<String>,
    #[serde(default)]
    pub pet_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub const DEFAULT_SHELTER_AVATAR: &str = "https://picsum.photos/seed/shelter/100/100";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageThread {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub pet_name: String,
    pub last_message: String,
    pub time: String,
    pub unread_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msg(v: serde_json::Value) -> MessageRow {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn preview_prefers_text_then_image() {
        let base = json!({"id": "m1", "thread_id": "t", "sender": "other"});
        let mut with_text = base.clone();
        with_text["text"] = json!("hello");
        with_text["image_url"] = json!("https://img");
        assert_eq!(msg(with_text).preview(), "hello");

        let mut image_only = base.clone();
        image_only["image_url"] = json!("https://img");
        assert_eq!(msg(image_only).preview(), "傳送了一張相片");

        assert_eq!(msg(base).preview(), NO_MESSAGES);
    }

    #[test]
    fn empty_message_detection() {
        assert!(MessageCreate::default().is_empty());
        assert!(MessageCreate { text: Some(String::new()), image_url: None }.is_empty());
        assert!(!MessageCreate { text: None, image_url: Some("https://img".into()) }.is_empty());
    }
}
