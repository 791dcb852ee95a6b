//! Pets the acting user has put up for adoption.

use super::value_text;
use crate::error::AppError;
use crate::models::{from_rows, ListingStatus, ListingStatusQuery, NewListing, PetListing, PetListingCreate};
use crate::query::to_row;
use crate::response::{success_action, success_created, ActionBody, CreatedBody, CreatedId};
use crate::service::{FieldRule, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;

pub async fn list_listings(State(state): State<AppState>) -> Result<Json<Vec<PetListing>>, AppError> {
    let rows = state
        .db
        .table("pet_listings")
        .select("*")
        .eq("user_id", state.user_id())
        .order("created_at", true)
        .execute()
        .await?
        .into_rows();
    Ok(Json(from_rows(rows, "pet listing")?))
}

pub async fn create_listing(
    State(state): State<AppState>,
    Json(data): Json<PetListingCreate>,
) -> Result<Json<CreatedBody>, AppError> {
    RequestValidator::validate(&[
        ("name", data.name.as_str(), FieldRule::length(1, 100)),
        ("breed", data.breed.as_str(), FieldRule::length(1, 100)),
    ])?;
    let row = to_row(&NewListing {
        user_id: state.user_id(),
        data: &data,
        status: ListingStatus::Active,
    })?;
    let inserted = state.db.table("pet_listings").insert(row).execute().await?;
    let id = inserted.rows().first().and_then(|r| r.get("id")).map(value_text);
    Ok(success_created("刊登成功", CreatedId::Listing(id)))
}

pub async fn delete_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
) -> Result<Json<ActionBody>, AppError> {
    state
        .db
        .table("pet_listings")
        .delete()
        .eq("id", listing_id)
        .eq("user_id", state.user_id())
        .execute()
        .await?;
    Ok(success_action("刊登已刪除"))
}

pub async fn update_listing_status(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
    Query(params): Query<ListingStatusQuery>,
) -> Result<Json<ActionBody>, AppError> {
    let status: ListingStatus = params
        .status
        .parse()
        .map_err(|_| AppError::BadRequest("無效的狀態值".into()))?;
    let patch = to_row(&json!({ "status": status }))?;
    state
        .db
        .table("pet_listings")
        .update(patch)
        .eq("id", listing_id)
        .eq("user_id", state.user_id())
        .execute()
        .await?;
    Ok(success_action("狀態已更新"))
}
