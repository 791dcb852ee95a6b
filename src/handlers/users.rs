//! Current user profile and counters. Both endpoints degrade to defaults instead of failing.

use crate::models::{from_row, User, UserStats};
use crate::query::CountMode;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Visits are not tracked yet; the profile page shows a fixed number.
const VISITS_COUNT: u64 = 4;

pub async fn get_current_user(State(state): State<AppState>) -> Json<User> {
    let user_id = state.user_id();
    let result = state
        .db
        .table("users")
        .select("*")
        .eq("id", user_id)
        .single()
        .execute()
        .await;
    let user = match result {
        Ok(res) => match res.into_single() {
            Some(row) => from_row(row, "user").unwrap_or_else(|e| {
                tracing::warn!(error = %e, "user row unreadable, serving default profile");
                User::fallback(user_id)
            }),
            None => User::fallback(user_id),
        },
        Err(e) => {
            tracing::warn!(error = %e, "user lookup failed, serving default profile");
            User::fallback(user_id)
        }
    };
    Json(user)
}

async fn count_for_user(state: &AppState, table: &str) -> Result<u64, crate::error::QueryError> {
    let res = state
        .db
        .table(table)
        .select_with_count("id", CountMode::Exact)
        .eq("user_id", state.user_id())
        .execute()
        .await?;
    Ok(res.count.unwrap_or(0))
}

pub async fn get_user_stats(State(state): State<AppState>) -> Json<UserStats> {
    let applications = count_for_user(&state, "adoption_applications").await;
    let favorites = count_for_user(&state, "favorites").await;
    let stats = match (applications, favorites) {
        (Ok(applications_count), Ok(favorites_count)) => UserStats {
            applications_count,
            favorites_count,
            visits_count: VISITS_COUNT,
        },
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(error = %e, "user stats unavailable");
            UserStats::default()
        }
    };
    Json(stats)
}
