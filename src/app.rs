use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tap", post(handlers::tap_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/counter", get(handlers::get_counter))
        .route("/api/today", get(handlers::get_today))
        .route("/api/history", get(handlers::get_history))
        .route("/api/tap", post(handlers::tap))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
