//! Plot management service for farm lifecycle operations
//!
//! Looks records up in the store, invokes the lifecycle policy and maps
//! rejections into application errors. The policy itself never sees the
//! collection.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{lifecycle, Plot, PlotId, PlotStatus};

use crate::error::{AppError, AppResult};
use crate::store::FarmStore;

/// Plot service for managing farm plots
#[derive(Clone)]
pub struct PlotService {
    store: Arc<FarmStore>,
}

/// Input for planting a crop
#[derive(Debug, Deserialize)]
pub struct PlantCropInput {
    pub crop_type: String,
}

/// Farm-wide dashboard statistics
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FarmStatistics {
    pub total_plots: usize,
    pub active_plots: usize,
    pub ready_to_harvest: usize,
    /// Mean growth across all plots, rounded to the nearest percent
    pub average_growth: u8,
}

impl PlotService {
    /// Create a new PlotService instance
    pub fn new(store: Arc<FarmStore>) -> Self {
        Self { store }
    }

    /// Get all plots on the farm
    pub async fn list_plots(&self) -> Vec<Plot> {
        self.store.list().await
    }

    /// Get a plot by id
    pub async fn get_plot(&self, plot_id: PlotId) -> AppResult<Plot> {
        self.store
            .get(plot_id)
            .await
            .ok_or_else(|| AppError::NotFound("Plot".to_string()))
    }

    /// Water a plot, stamping it with the supplied date
    pub async fn water_plot(&self, plot_id: PlotId, today: NaiveDate) -> AppResult<Plot> {
        let result = self
            .store
            .update(plot_id, |plot| Ok(lifecycle::water(plot, today)))
            .await
            .ok_or_else(|| AppError::NotFound("Plot".to_string()))?;
        Ok(result?)
    }

    /// Fertilize a plot for a larger growth boost
    pub async fn fertilize_plot(&self, plot_id: PlotId) -> AppResult<Plot> {
        let result = self
            .store
            .update(plot_id, lifecycle::fertilize)
            .await
            .ok_or_else(|| AppError::NotFound("Plot".to_string()))?;
        Ok(result?)
    }

    /// Plant a crop into an empty plot
    pub async fn plant_crop(
        &self,
        plot_id: PlotId,
        input: PlantCropInput,
        today: NaiveDate,
    ) -> AppResult<Plot> {
        let result = self
            .store
            .update(plot_id, |plot| {
                lifecycle::plant(plot, &input.crop_type, today)
            })
            .await
            .ok_or_else(|| AppError::NotFound("Plot".to_string()))?;
        Ok(result?)
    }

    /// Harvest a fully grown plot, resetting it for replanting
    pub async fn harvest_plot(&self, plot_id: PlotId) -> AppResult<Plot> {
        let result = self
            .store
            .update(plot_id, lifecycle::harvest)
            .await
            .ok_or_else(|| AppError::NotFound("Plot".to_string()))?;
        Ok(result?)
    }

    /// Add a new empty plot to the farm; always succeeds
    pub async fn add_plot(&self) -> (Plot, usize) {
        self.store.add_plot().await
    }

    /// Delete a plot, subject to the one-plot collection floor
    pub async fn delete_plot(&self, plot_id: PlotId) -> AppResult<(Plot, usize)> {
        Ok(self.store.remove_plot(plot_id).await?)
    }

    /// Compute dashboard statistics over the current plots
    pub async fn farm_statistics(&self) -> FarmStatistics {
        summarize(&self.store.list().await)
    }
}

fn summarize(plots: &[Plot]) -> FarmStatistics {
    let total_plots = plots.len();
    let active_plots = plots.iter().filter(|p| !p.is_empty()).count();
    let ready_to_harvest = plots
        .iter()
        .filter(|p| p.status == PlotStatus::ReadyToHarvest)
        .count();
    let average_growth = if total_plots == 0 {
        0
    } else {
        let sum: u32 = plots.iter().map(|p| u32::from(p.growth_progress)).sum();
        (f64::from(sum) / total_plots as f64).round() as u8
    };

    FarmStatistics {
        total_plots,
        active_plots,
        ready_to_harvest,
        average_growth,
    }
}
