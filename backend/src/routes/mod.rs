//! Route definitions for the Smart Farm Server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Plot management
        .nest("/plots", plot_routes())
}

/// Plot management routes
fn plot_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_plots).post(handlers::create_plot))
        .route("/statistics", get(handlers::get_farm_statistics))
        .route(
            "/:plot_id",
            get(handlers::get_plot).delete(handlers::delete_plot),
        )
        .route("/:plot_id/water", post(handlers::water_plot))
        .route("/:plot_id/fertilize", post(handlers::fertilize_plot))
        .route("/:plot_id/plant", post(handlers::plant_crop))
        .route("/:plot_id/harvest", post(handlers::harvest_plot))
}
