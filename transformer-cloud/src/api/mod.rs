//! API routes for transformer-cloud

pub mod extract;
pub mod health;
pub mod maintenance;
pub mod retrain;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let maintenance = Router::new()
        .route(
            "/api/maintenance",
            get(maintenance::list).post(maintenance::create),
        )
        .route(
            "/api/maintenance/{mid}",
            get(maintenance::get)
                .put(maintenance::update)
                .patch(maintenance::update_fields)
                .delete(maintenance::delete),
        )
        .route(
            "/api/maintenance/inspection/{inspection_number}",
            get(maintenance::list_by_inspection),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/retrain", post(retrain::trigger))
        .merge(maintenance)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
