//! Adoption applications of the acting user.

use super::value_text;
use crate::error::AppError;
use crate::models::{from_row, from_rows, AdoptionApplication, AdoptionApplicationCreate, NewApplication};
use crate::query::to_row;
use crate::response::{success_created, CreatedBody, CreatedId};
use crate::service::{FieldRule, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdoptionApplication>>, AppError> {
    let rows = state
        .db
        .table("adoption_applications")
        .select("*")
        .eq("user_id", state.user_id())
        .order("created_at", true)
        .execute()
        .await?
        .into_rows();
    let apps: Vec<AdoptionApplication> = from_rows(rows, "adoption application")?;
    Ok(Json(apps.into_iter().map(AdoptionApplication::with_label).collect()))
}

fn validate_create(data: &AdoptionApplicationCreate) -> Result<(), AppError> {
    RequestValidator::validate(&[
        ("pet_id", data.pet_id.as_str(), FieldRule::length(1, 100)),
        ("full_name", data.full_name.as_str(), FieldRule::length(1, 100)),
        ("phone", data.phone.as_str(), FieldRule::length(1, 50)),
        ("email", data.email.as_str(), FieldRule::email()),
    ])
}

pub async fn create_application(
    State(state): State<AppState>,
    Json(data): Json<AdoptionApplicationCreate>,
) -> Result<Json<CreatedBody>, AppError> {
    validate_create(&data)?;
    if !data.agreed {
        return Err(AppError::BadRequest("必須同意服務條款".into()));
    }
    let user_id = state.user_id();
    let existing = state
        .db
        .table("adoption_applications")
        .select("id")
        .eq("user_id", user_id)
        .eq("pet_id", data.pet_id.as_str())
        .execute()
        .await?;
    if !existing.is_empty() {
        return Err(AppError::BadRequest("您已經對這隻寵物提交過申請了".into()));
    }
    let row = to_row(&NewApplication::pending(user_id, &data))?;
    let inserted = state
        .db
        .table("adoption_applications")
        .insert(row)
        .execute()
        .await?;
    let id = inserted.rows().first().and_then(|r| r.get("id")).map(value_text);
    tracing::info!(pet_id = %data.pet_id, application_id = ?id, "adoption application submitted");
    Ok(success_created("申請已成功提交", CreatedId::Application(id)))
}

pub async fn get_application(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<AdoptionApplication>, AppError> {
    let row = state
        .db
        .table("adoption_applications")
        .select("*")
        .eq("id", application_id)
        .eq("user_id", state.user_id())
        .single()
        .execute()
        .await?
        .into_single()
        .ok_or_else(|| AppError::NotFound("找不到該申請".into()))?;
    let app: AdoptionApplication = from_row(row, "adoption application")?;
    Ok(Json(app.with_label()))
}
