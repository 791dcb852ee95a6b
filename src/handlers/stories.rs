use crate::error::AppError;
use crate::models::{from_rows, Story};
use crate::state::AppState;
use axum::{extract::State, Json};

/// Adoption stories, newest first.
pub async fn list_stories(State(state): State<AppState>) -> Result<Json<Vec<Story>>, AppError> {
    let rows = state
        .db
        .table("stories")
        .select("*")
        .order("created_at", true)
        .execute()
        .await?
        .into_rows();
    Ok(Json(from_rows(rows, "story")?))
}
