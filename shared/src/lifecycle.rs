//! Plot lifecycle policy
//!
//! Pure state transitions for a single plot. Each operation takes the
//! current record plus its inputs and returns either the next record or a
//! rejection; the input record is never mutated. "Today" is supplied by
//! the caller, keeping every transition deterministic.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Plot, PlotStatus};
use crate::validation::normalize_crop_type;

/// Growth boost applied by watering
pub const WATERING_BOOST: u8 = 10;

/// Growth boost applied by fertilizing, twice the watering boost
pub const FERTILIZING_BOOST: u8 = 20;

/// Growth a crop starts with right after planting
pub const INITIAL_GROWTH: u8 = 10;

/// Growth percentage at which a crop can be harvested
pub const HARVEST_THRESHOLD: u8 = 100;

/// Rejected lifecycle transitions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Cannot fertilize empty plot")]
    FertilizeEmptyPlot,

    #[error("Plot is not empty - harvest first")]
    PlotNotEmpty,

    #[error("Crop type is required")]
    CropTypeRequired,

    #[error("Crop not ready to harvest yet")]
    NotReadyToHarvest,
}

/// Water a plot: stamp the watering date, clear the attention flag and
/// nudge growth along. Watering never changes the status, even when the
/// boost lands on the harvest threshold; only fertilizing promotes.
pub fn water(plot: &Plot, today: NaiveDate) -> Plot {
    let mut next = plot.clone();
    next.last_watered = Some(today);
    next.needs_attention = false;
    if next.growth_progress < HARVEST_THRESHOLD {
        next.growth_progress = boosted(next.growth_progress, WATERING_BOOST);
    }
    next
}

/// Fertilize a planted crop for a larger growth boost. A plot sitting at
/// the harvest threshold afterwards is promoted to `ReadyToHarvest` and
/// flagged for attention.
pub fn fertilize(plot: &Plot) -> Result<Plot, LifecycleError> {
    if plot.is_empty() {
        return Err(LifecycleError::FertilizeEmptyPlot);
    }

    let mut next = plot.clone();
    if next.growth_progress < HARVEST_THRESHOLD {
        next.growth_progress = boosted(next.growth_progress, FERTILIZING_BOOST);
    }
    if next.growth_progress >= HARVEST_THRESHOLD {
        next.status = PlotStatus::ReadyToHarvest;
        next.needs_attention = true;
    }
    Ok(next)
}

/// Plant a crop into an empty plot. The label is trimmed and lower-cased
/// before it is stored.
pub fn plant(plot: &Plot, crop_type: &str, today: NaiveDate) -> Result<Plot, LifecycleError> {
    if !plot.is_empty() {
        return Err(LifecycleError::PlotNotEmpty);
    }
    let crop = normalize_crop_type(crop_type).ok_or(LifecycleError::CropTypeRequired)?;

    let mut next = plot.clone();
    next.crop_type = Some(crop);
    next.status = PlotStatus::Planted;
    next.growth_progress = INITIAL_GROWTH;
    next.last_watered = Some(today);
    next.needs_attention = false;
    Ok(next)
}

/// Harvest a fully grown crop, returning the plot to its empty state and
/// flagging it for replanting.
pub fn harvest(plot: &Plot) -> Result<Plot, LifecycleError> {
    if plot.growth_progress < HARVEST_THRESHOLD {
        return Err(LifecycleError::NotReadyToHarvest);
    }

    let mut next = plot.clone();
    next.status = PlotStatus::Empty;
    next.crop_type = None;
    next.growth_progress = 0;
    next.last_watered = None;
    next.needs_attention = true;
    Ok(next)
}

fn boosted(current: u8, boost: u8) -> u8 {
    current.saturating_add(boost).min(HARVEST_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn growing_plot(growth: u8) -> Plot {
        Plot {
            id: 1,
            crop_type: Some("tomatoes".to_string()),
            status: PlotStatus::Growing,
            growth_progress: growth,
            last_watered: NaiveDate::from_ymd_opt(2025, 8, 20),
            needs_attention: true,
        }
    }

    // ========================================================================
    // Watering
    // ========================================================================

    #[test]
    fn test_water_boosts_growth_and_stamps_date() {
        let plot = growing_plot(55);
        let next = water(&plot, today());
        assert_eq!(next.growth_progress, 65);
        assert_eq!(next.last_watered, Some(today()));
        assert!(!next.needs_attention);
        assert_eq!(next.status, PlotStatus::Growing);
    }

    #[test]
    fn test_water_caps_at_threshold_without_promotion() {
        let plot = growing_plot(95);
        let next = water(&plot, today());
        assert_eq!(next.growth_progress, 100);
        // Watering alone never flips the status to ReadyToHarvest
        assert_eq!(next.status, PlotStatus::Growing);
    }

    #[test]
    fn test_water_at_threshold_keeps_status() {
        let mut plot = growing_plot(100);
        plot.status = PlotStatus::ReadyToHarvest;
        let next = water(&plot, today());
        assert_eq!(next.growth_progress, 100);
        assert_eq!(next.status, PlotStatus::ReadyToHarvest);
        assert!(!next.needs_attention);
    }

    #[test]
    fn test_water_empty_plot_has_no_failure_path() {
        let plot = Plot::empty(4);
        let next = water(&plot, today());
        assert_eq!(next.status, PlotStatus::Empty);
        assert_eq!(next.crop_type, None);
        assert_eq!(next.growth_progress, 10);
        assert_eq!(next.last_watered, Some(today()));
    }

    // ========================================================================
    // Fertilizing
    // ========================================================================

    #[test]
    fn test_fertilize_boosts_below_threshold() {
        // Carrots at 30 move to 50 and keep their status
        let mut plot = growing_plot(30);
        plot.crop_type = Some("carrots".to_string());
        plot.status = PlotStatus::Planted;
        let next = fertilize(&plot).unwrap();
        assert_eq!(next.growth_progress, 50);
        assert_eq!(next.status, PlotStatus::Planted);
    }

    #[test]
    fn test_fertilize_reaching_threshold_promotes() {
        let plot = growing_plot(85);
        let next = fertilize(&plot).unwrap();
        assert_eq!(next.growth_progress, 100);
        assert_eq!(next.status, PlotStatus::ReadyToHarvest);
        assert!(next.needs_attention);
    }

    #[test]
    fn test_fertilize_at_threshold_reflags_attention() {
        let mut plot = growing_plot(100);
        plot.status = PlotStatus::ReadyToHarvest;
        plot.needs_attention = false;
        let next = fertilize(&plot).unwrap();
        assert_eq!(next.growth_progress, 100);
        assert_eq!(next.status, PlotStatus::ReadyToHarvest);
        assert!(next.needs_attention);
    }

    #[test]
    fn test_fertilize_promotes_plot_watered_to_threshold() {
        // A plot watered up to 100 is still Growing; fertilizing settles it
        let plot = growing_plot(100);
        let next = fertilize(&plot).unwrap();
        assert_eq!(next.status, PlotStatus::ReadyToHarvest);
        assert!(next.needs_attention);
    }

    #[test]
    fn test_fertilize_empty_plot_rejected() {
        let plot = Plot::empty(2);
        assert_eq!(fertilize(&plot), Err(LifecycleError::FertilizeEmptyPlot));
    }

    // ========================================================================
    // Planting
    // ========================================================================

    #[test]
    fn test_plant_into_empty_plot() {
        let plot = Plot::empty(5);
        let next = plant(&plot, "Corn", today()).unwrap();
        assert_eq!(next.crop_type, Some("corn".to_string()));
        assert_eq!(next.status, PlotStatus::Planted);
        assert_eq!(next.growth_progress, INITIAL_GROWTH);
        assert_eq!(next.last_watered, Some(today()));
        assert!(!next.needs_attention);
    }

    #[test]
    fn test_plant_normalizes_label() {
        let plot = Plot::empty(5);
        let next = plant(&plot, "  Sweet Corn  ", today()).unwrap();
        assert_eq!(next.crop_type, Some("sweet corn".to_string()));
    }

    #[test]
    fn test_plant_blank_crop_rejected() {
        let plot = Plot::empty(5);
        assert_eq!(plant(&plot, " ", today()), Err(LifecycleError::CropTypeRequired));
        assert_eq!(plant(&plot, "", today()), Err(LifecycleError::CropTypeRequired));
    }

    #[test]
    fn test_plant_occupied_plot_rejected() {
        let plot = growing_plot(55);
        assert_eq!(
            plant(&plot, "corn", today()),
            Err(LifecycleError::PlotNotEmpty)
        );
    }

    #[test]
    fn test_plant_occupied_plot_checked_before_crop_label() {
        let plot = growing_plot(55);
        assert_eq!(plant(&plot, " ", today()), Err(LifecycleError::PlotNotEmpty));
    }

    // ========================================================================
    // Harvesting
    // ========================================================================

    #[test]
    fn test_harvest_resets_plot() {
        // Plot 2 scenario: corn ready to harvest at 100
        let plot = Plot {
            id: 2,
            crop_type: Some("corn".to_string()),
            status: PlotStatus::ReadyToHarvest,
            growth_progress: 100,
            last_watered: NaiveDate::from_ymd_opt(2025, 8, 29),
            needs_attention: true,
        };
        let next = harvest(&plot).unwrap();
        assert_eq!(next.id, 2);
        assert_eq!(next.status, PlotStatus::Empty);
        assert_eq!(next.crop_type, None);
        assert_eq!(next.growth_progress, 0);
        assert_eq!(next.last_watered, None);
        assert!(next.needs_attention);
    }

    #[test]
    fn test_harvest_below_threshold_rejected() {
        let plot = growing_plot(99);
        assert_eq!(harvest(&plot), Err(LifecycleError::NotReadyToHarvest));
    }

    #[test]
    fn test_harvest_watered_to_threshold_succeeds() {
        // Readiness is a growth check, not a status check
        let plot = growing_plot(100);
        assert!(harvest(&plot).is_ok());
    }

    #[test]
    fn test_rejections_leave_input_untouched() {
        let plot = growing_plot(40);
        let before = plot.clone();
        assert!(harvest(&plot).is_err());
        assert!(plant(&plot, "corn", today()).is_err());
        assert_eq!(plot, before);
    }
}
