use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/month", get(handlers::get_month))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/day", post(handlers::set_day))
        .with_state(state)
}
