//! Favorites of the acting user: list as pets, list ids, add (idempotent), remove.

use super::value_text;
use crate::error::AppError;
use crate::models::{from_rows, FavoriteCreate, FavoriteIds, NewFavorite, Pet};
use crate::query::to_row;
use crate::response::{success_action, ActionBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

async fn favorite_pet_ids(state: &AppState) -> Result<Vec<Value>, AppError> {
    let res = state
        .db
        .table("favorites")
        .select("pet_id")
        .eq("user_id", state.user_id())
        .execute()
        .await?;
    Ok(res.rows().iter().filter_map(|r| r.get("pet_id").cloned()).collect())
}

pub async fn list_favorites(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, AppError> {
    let pet_ids = favorite_pet_ids(&state).await?;
    if pet_ids.is_empty() {
        return Ok(Json(Vec::new()));
    }
    let rows = state
        .db
        .table("pets")
        .select("*")
        .in_list("id", pet_ids)
        .execute()
        .await?
        .into_rows();
    Ok(Json(from_rows(rows, "pet")?))
}

pub async fn list_favorite_ids(State(state): State<AppState>) -> Result<Json<FavoriteIds>, AppError> {
    let pet_ids = favorite_pet_ids(&state).await?.iter().map(value_text).collect();
    Ok(Json(FavoriteIds { pet_ids }))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Json(data): Json<FavoriteCreate>,
) -> Result<Json<ActionBody>, AppError> {
    let user_id = state.user_id();
    let existing = state
        .db
        .table("favorites")
        .select("id")
        .eq("user_id", user_id)
        .eq("pet_id", data.pet_id.as_str())
        .execute()
        .await?;
    if !existing.is_empty() {
        return Ok(success_action("已經收藏過了"));
    }
    let row = to_row(&NewFavorite {
        user_id,
        pet_id: &data.pet_id,
    })?;
    state.db.table("favorites").insert(row).execute().await?;
    Ok(success_action("收藏成功"))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(pet_id): Path<String>,
) -> Result<Json<ActionBody>, AppError> {
    state
        .db
        .table("favorites")
        .delete()
        .eq("user_id", state.user_id())
        .eq("pet_id", pet_id)
        .execute()
        .await?;
    Ok(success_action("已取消收藏"))
}
