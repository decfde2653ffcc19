//! Plot management HTTP handlers
//!
//! Thin collaborators around the plot service: look up, invoke, relay the
//! result. "Today" for date-stamping actions is taken at this boundary so
//! the lifecycle policy stays deterministic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use shared::{Plot, PlotId};

use crate::services::plot::{PlantCropInput, PlotService};
use crate::AppState;

/// Confirmation payload for plot-scoped actions
#[derive(Serialize)]
pub struct PlotActionResponse {
    pub message: String,
    pub plot: Plot,
}

/// Confirmation payload for adding a plot
#[derive(Serialize)]
pub struct AddPlotResponse {
    pub message: String,
    pub plot: Plot,
    pub total_plots: usize,
}

/// Confirmation payload for deleting a plot
#[derive(Serialize)]
pub struct DeletePlotResponse {
    pub message: String,
    pub deleted_plot: Plot,
    pub remaining_plots: usize,
}

/// List all plots on the farm
pub async fn list_plots(State(state): State<AppState>) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    let plots = service.list_plots().await;
    (StatusCode::OK, Json(serde_json::json!({ "plots": plots }))).into_response()
}

/// Get a specific plot
pub async fn get_plot(
    State(state): State<AppState>,
    Path(plot_id): Path<PlotId>,
) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    match service.get_plot(plot_id).await {
        Ok(plot) => (StatusCode::OK, Json(plot)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Water a specific plot
pub async fn water_plot(
    State(state): State<AppState>,
    Path(plot_id): Path<PlotId>,
) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    match service.water_plot(plot_id, Utc::now().date_naive()).await {
        Ok(plot) => (
            StatusCode::OK,
            Json(PlotActionResponse {
                message: format!("Plot {} watered successfully!", plot_id),
                plot,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Fertilize a specific plot
pub async fn fertilize_plot(
    State(state): State<AppState>,
    Path(plot_id): Path<PlotId>,
) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    match service.fertilize_plot(plot_id).await {
        Ok(plot) => (
            StatusCode::OK,
            Json(PlotActionResponse {
                message: format!("Plot {} fertilized successfully! Growth boosted.", plot_id),
                plot,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Plant a crop in an empty plot
pub async fn plant_crop(
    State(state): State<AppState>,
    Path(plot_id): Path<PlotId>,
    Json(input): Json<PlantCropInput>,
) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    match service
        .plant_crop(plot_id, input, Utc::now().date_naive())
        .await
    {
        Ok(plot) => {
            let crop = plot.crop_type.clone().unwrap_or_default();
            (
                StatusCode::OK,
                Json(PlotActionResponse {
                    message: format!("{} planted successfully in Plot {}!", crop, plot_id),
                    plot,
                }),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Harvest a specific plot
pub async fn harvest_plot(
    State(state): State<AppState>,
    Path(plot_id): Path<PlotId>,
) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    match service.harvest_plot(plot_id).await {
        Ok(plot) => (
            StatusCode::OK,
            Json(PlotActionResponse {
                message: format!(
                    "Plot {} harvested successfully! Ready for replanting.",
                    plot_id
                ),
                plot,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Add a new plot to the farm
pub async fn create_plot(State(state): State<AppState>) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    let (plot, total_plots) = service.add_plot().await;
    (
        StatusCode::CREATED,
        Json(AddPlotResponse {
            message: format!("New plot {} added to your farm!", plot.id),
            plot,
            total_plots,
        }),
    )
        .into_response()
}

/// Delete a plot from the farm
pub async fn delete_plot(
    State(state): State<AppState>,
    Path(plot_id): Path<PlotId>,
) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    match service.delete_plot(plot_id).await {
        Ok((deleted_plot, remaining_plots)) => (
            StatusCode::OK,
            Json(DeletePlotResponse {
                message: format!("Plot {} deleted successfully!", plot_id),
                deleted_plot,
                remaining_plots,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get farm-wide statistics for the dashboard
pub async fn get_farm_statistics(State(state): State<AppState>) -> impl IntoResponse {
    let service = PlotService::new(state.store.clone());

    let stats = service.farm_statistics().await;
    (StatusCode::OK, Json(stats)).into_response()
}
