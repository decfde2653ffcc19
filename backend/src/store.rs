//! In-memory farm store
//!
//! Owns the plot collection behind a single lock, so one mutation settles
//! before the next begins. Plots live only for the process lifetime and
//! reset on restart.

use chrono::NaiveDate;
use shared::{LifecycleError, Plot, PlotId, PlotStatus};
use thiserror::Error;
use tokio::sync::RwLock;

/// Failure modes for collection-level mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Plot not found")]
    PlotNotFound,

    #[error("Cannot delete - farm must have at least 1 plot")]
    MinimumPlots,
}

/// The plot collection
pub struct FarmStore {
    plots: RwLock<Vec<Plot>>,
}

impl FarmStore {
    pub fn new(plots: Vec<Plot>) -> Self {
        Self {
            plots: RwLock::new(plots),
        }
    }

    /// Seed the farm with the starter plots shown on a fresh dashboard
    pub fn with_starter_plots() -> Self {
        Self::new(vec![
            Plot {
                id: 1,
                crop_type: Some("tomatoes".to_string()),
                status: PlotStatus::Growing,
                growth_progress: 55,
                last_watered: NaiveDate::from_ymd_opt(2025, 8, 20),
                needs_attention: false,
            },
            Plot {
                id: 2,
                crop_type: Some("corn".to_string()),
                status: PlotStatus::ReadyToHarvest,
                growth_progress: 100,
                last_watered: NaiveDate::from_ymd_opt(2025, 8, 29),
                needs_attention: true,
            },
            Plot {
                id: 3,
                crop_type: Some("carrots".to_string()),
                status: PlotStatus::Planted,
                growth_progress: 30,
                last_watered: NaiveDate::from_ymd_opt(2025, 9, 1),
                needs_attention: true,
            },
        ])
    }

    /// All plots, in collection order
    pub async fn list(&self) -> Vec<Plot> {
        self.plots.read().await.clone()
    }

    pub async fn get(&self, id: PlotId) -> Option<Plot> {
        self.plots.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.plots.read().await.len()
    }

    /// Apply a lifecycle transition to one plot. The record is replaced
    /// only when the transition succeeds; a rejection leaves it untouched.
    /// Returns `None` when the id does not exist.
    pub async fn update<F>(&self, id: PlotId, apply: F) -> Option<Result<Plot, LifecycleError>>
    where
        F: FnOnce(&Plot) -> Result<Plot, LifecycleError>,
    {
        let mut plots = self.plots.write().await;
        let slot = plots.iter_mut().find(|p| p.id == id)?;
        match apply(slot) {
            Ok(next) => {
                *slot = next.clone();
                Some(Ok(next))
            }
            Err(err) => Some(Err(err)),
        }
    }

    /// Append a new empty plot with id one past the current maximum.
    /// Ids freed by deletion are not handed out again unless the freed id
    /// happened to be the maximum. Returns the plot and the new count.
    pub async fn add_plot(&self) -> (Plot, usize) {
        let mut plots = self.plots.write().await;
        let next_id = plots.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let plot = Plot::empty(next_id);
        plots.push(plot.clone());
        (plot, plots.len())
    }

    /// Remove a plot, keeping the order of the remaining records. The farm
    /// always keeps at least one plot. Returns the removed plot and the
    /// remaining count.
    pub async fn remove_plot(&self, id: PlotId) -> Result<(Plot, usize), StoreError> {
        let mut plots = self.plots.write().await;
        let index = plots
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::PlotNotFound)?;
        if plots.len() <= 1 {
            return Err(StoreError::MinimumPlots);
        }
        let removed = plots.remove(index);
        Ok((removed, plots.len()))
    }
}
