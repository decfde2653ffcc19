//! Farm plot models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a plot within the farm, assigned by the collection
pub type PlotId = u32;

/// Lifecycle stage of a plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlotStatus {
    Empty,
    Planted,
    Growing,
    ReadyToHarvest,
}

impl std::fmt::Display for PlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotStatus::Empty => write!(f, "Empty"),
            PlotStatus::Planted => write!(f, "Planted"),
            PlotStatus::Growing => write!(f, "Growing"),
            PlotStatus::ReadyToHarvest => write!(f, "Ready to Harvest"),
        }
    }
}

/// One unit of farmable land tracked by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plot {
    pub id: PlotId,
    /// Crop label, trimmed and lower-cased; `None` while the plot is empty
    pub crop_type: Option<String>,
    pub status: PlotStatus,
    /// Percent progress toward harvest readiness; 100 is the harvest threshold
    pub growth_progress: u8,
    /// `None` until the plot has been watered since its last reset
    pub last_watered: Option<NaiveDate>,
    /// User-facing flag meaning "this plot deserves a look"
    pub needs_attention: bool,
}

impl Plot {
    /// A freshly added plot, waiting to be planted
    pub fn empty(id: PlotId) -> Self {
        Self {
            id,
            crop_type: None,
            status: PlotStatus::Empty,
            growth_progress: 0,
            last_watered: None,
            needs_attention: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status == PlotStatus::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plot_bundle() {
        let plot = Plot::empty(7);
        assert_eq!(plot.id, 7);
        assert!(plot.is_empty());
        assert_eq!(plot.crop_type, None);
        assert_eq!(plot.growth_progress, 0);
        assert_eq!(plot.last_watered, None);
        assert!(plot.needs_attention);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PlotStatus::ReadyToHarvest.to_string(), "Ready to Harvest");
        assert_eq!(PlotStatus::Empty.to_string(), "Empty");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&PlotStatus::ReadyToHarvest).unwrap();
        assert_eq!(json, "\"ready_to_harvest\"");
    }
}
