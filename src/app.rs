use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits/:id/increment", post(handlers::increment_habit_form))
        .route("/habits/:id/toggle", post(handlers::toggle_habit_form))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route(
            "/api/habits/:id",
            patch(handlers::update_habit).delete(handlers::delete_habit),
        )
        .route("/api/habits/:id/increment", post(handlers::increment_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/api/goals", get(handlers::list_goals).post(handlers::create_goal))
        .route(
            "/api/goals/:id",
            patch(handlers::update_goal).delete(handlers::delete_goal),
        )
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
