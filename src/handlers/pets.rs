//! Pet list (filtered, optionally sorted by distance) and pet detail.

use crate::error::AppError;
use crate::models::{from_row, from_rows, Pet, PetFilter, SORT_BY_DISTANCE};
use crate::service::sort_by_distance;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

pub async fn list_pets(
    State(state): State<AppState>,
    Query(filter): Query<PetFilter>,
) -> Result<Json<Vec<Pet>>, AppError> {
    let mut query = state.db.table("pets").select("*");
    for (column, value) in filter.equalities() {
        query = query.eq(column, value);
    }
    let rows = query.execute().await?.into_rows();
    let mut pets: Vec<Pet> = from_rows(rows, "pet")?;
    if filter.sort.as_deref() == Some(SORT_BY_DISTANCE) {
        sort_by_distance(&mut pets);
    }
    Ok(Json(pets))
}

pub async fn get_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<String>,
) -> Result<Json<Pet>, AppError> {
    let row = state
        .db
        .table("pets")
        .select("*")
        .eq("id", pet_id)
        .single()
        .execute()
        .await?
        .into_single()
        .ok_or_else(|| AppError::NotFound("找不到該寵物".into()))?;
    Ok(Json(from_row(row, "pet")?))
}
