//! REST API routes, mounted under `/api`.

use crate::handlers::{applications, favorites, listings, messages, pets, stories, users};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/pets", get(pets::list_pets))
        .route("/pets/:pet_id", get(pets::get_pet))
        .route("/users/me", get(users::get_current_user))
        .route("/users/me/stats", get(users::get_user_stats))
        .route("/favorites", get(favorites::list_favorites).post(favorites::add_favorite))
        .route("/favorites/ids", get(favorites::list_favorite_ids))
        .route("/favorites/:pet_id", delete(favorites::remove_favorite))
        .route(
            "/applications",
            get(applications::list_applications).post(applications::create_application),
        )
        .route("/applications/:application_id", get(applications::get_application))
        .route("/messages/threads", get(messages::list_threads))
        .route(
            "/messages/threads/:thread_id",
            get(messages::get_thread_messages).post(messages::send_message),
        )
        .route("/listings", get(listings::list_listings).post(listings::create_listing))
        .route("/listings/:listing_id", delete(listings::delete_listing))
        .route("/listings/:listing_id/status", patch(listings::update_listing_status))
        .route("/stories", get(stories::list_stories))
        .with_state(state)
}
