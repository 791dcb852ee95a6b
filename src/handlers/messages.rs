//! Message threads with shelters: thread list with previews, thread messages, sending.

use crate::error::{AppError, QueryError};
use crate::models::{
    from_row, from_rows, Message, MessageCreate, MessageRow, MessageThread, NewMessage, ThreadRow,
    DEFAULT_SHELTER_AVATAR, NO_MESSAGES, SENDER_OTHER, SENDER_USER,
};
use crate::query::{to_row, CountMode};
use crate::service::format_relative;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::json;

pub async fn list_threads(State(state): State<AppState>) -> Result<Json<Vec<MessageThread>>, AppError> {
    let now = Utc::now();
    let rows = state
        .db
        .table("message_threads")
        .select("*")
        .eq("user_id", state.user_id())
        .order("created_at", true)
        .execute()
        .await?
        .into_rows();
    let threads: Vec<ThreadRow> = from_rows(rows, "message thread")?;

    let mut out = Vec::with_capacity(threads.len());
    for thread in threads {
        let last = state
            .db
            .table("messages")
            .select("*")
            .eq("thread_id", thread.id.as_str())
            .order("created_at", true)
            .limit(1)
            .execute()
            .await?
            .into_rows()
            .into_iter()
            .next()
            .map(|r| from_row::<MessageRow>(r, "message"))
            .transpose()?;

        let (last_message, time) = match &last {
            Some(msg) => (msg.preview().to_string(), format_relative(msg.created_at.as_deref(), now)),
            None => (NO_MESSAGES.to_string(), format_relative(thread.created_at.as_deref(), now)),
        };

        let unread = state
            .db
            .table("messages")
            .select_with_count("id", CountMode::Exact)
            .eq("thread_id", thread.id.as_str())
            .eq("sender", SENDER_OTHER)
            .eq("is_read", false)
            .execute()
            .await?;

        out.push(MessageThread {
            id: thread.id,
            name: thread.shelter_name,
            avatar: thread.shelter_avatar.unwrap_or_else(|| DEFAULT_SHELTER_AVATAR.into()),
            pet_name: thread.pet_name.unwrap_or_default(),
            last_message,
            time,
            unread_count: unread.count.unwrap_or(0),
        });
    }
    Ok(Json(out))
}

async fn ensure_thread_owned(state: &AppState, thread_id: &str) -> Result<(), AppError> {
    let res = state
        .db
        .table("message_threads")
        .select("id")
        .eq("id", thread_id)
        .eq("user_id", state.user_id())
        .execute()
        .await?;
    if res.is_empty() {
        return Err(AppError::NotFound("找不到該對話".into()));
    }
    Ok(())
}

/// Messages oldest first; messages from the other party are marked read afterwards.
pub async fn get_thread_messages(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    ensure_thread_owned(&state, &thread_id).await?;
    let now = Utc::now();
    let rows = state
        .db
        .table("messages")
        .select("*")
        .eq("thread_id", thread_id.as_str())
        .order("created_at", false)
        .execute()
        .await?
        .into_rows();
    let messages: Vec<MessageRow> = from_rows(rows, "message")?;
    let messages = messages
        .into_iter()
        .map(|m| {
            let ts = format_relative(m.created_at.as_deref(), now);
            Message::from_row(m, ts)
        })
        .collect();

    state
        .db
        .table("messages")
        .update(to_row(&json!({ "is_read": true }))?)
        .eq("thread_id", thread_id.as_str())
        .eq("sender", SENDER_OTHER)
        .execute()
        .await?;

    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    Json(data): Json<MessageCreate>,
) -> Result<Json<Message>, AppError> {
    if data.is_empty() {
        return Err(AppError::BadRequest("訊息內容不能為空".into()));
    }
    ensure_thread_owned(&state, &thread_id).await?;
    let row = to_row(&NewMessage {
        thread_id: &thread_id,
        sender: SENDER_USER,
        text: data.text.as_deref(),
        image_url: data.image_url.as_deref(),
        is_read: true,
    })?;
    let inserted = state
        .db
        .table("messages")
        .insert(row)
        .execute()
        .await?
        .into_rows()
        .into_iter()
        .next()
        .ok_or_else(|| QueryError::Decode("message insert returned no row".into()))?;
    let msg: MessageRow = from_row(inserted, "message")?;
    Ok(Json(Message::from_row(msg, "剛剛".into())))
}
