//! Validation utilities for the Smart Farm Server

use crate::models::{Plot, PlotStatus};

/// Normalize a crop label: trim surrounding whitespace and lower-case it.
/// Returns `None` when nothing remains after trimming.
pub fn normalize_crop_type(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Check the cross-field consistency of a plot record:
/// - the id is positive and growth stays within [0, 100]
/// - an empty plot carries no crop, and vice versa
/// - a plot marked ready to harvest is fully grown
pub fn validate_plot(plot: &Plot) -> Result<(), &'static str> {
    if plot.id == 0 {
        return Err("Plot id must be positive");
    }
    if plot.growth_progress > 100 {
        return Err("Growth progress must be between 0 and 100");
    }
    if plot.is_empty() != plot.crop_type.is_none() {
        return Err("Empty status and crop type must agree");
    }
    if plot.status == PlotStatus::ReadyToHarvest && plot.growth_progress != 100 {
        return Err("Plot ready to harvest must be fully grown");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_crop_type_trims_and_lowercases() {
        assert_eq!(normalize_crop_type("  Corn "), Some("corn".to_string()));
        assert_eq!(normalize_crop_type("TOMATOES"), Some("tomatoes".to_string()));
    }

    #[test]
    fn test_normalize_crop_type_blank() {
        assert_eq!(normalize_crop_type(""), None);
        assert_eq!(normalize_crop_type("   "), None);
        assert_eq!(normalize_crop_type("\t\n"), None);
    }

    #[test]
    fn test_validate_plot_empty_bundle() {
        assert!(validate_plot(&Plot::empty(1)).is_ok());
    }

    #[test]
    fn test_validate_plot_zero_id() {
        let plot = Plot::empty(0);
        assert!(validate_plot(&plot).is_err());
    }

    #[test]
    fn test_validate_plot_crop_on_empty_plot() {
        let mut plot = Plot::empty(1);
        plot.crop_type = Some("corn".to_string());
        assert!(validate_plot(&plot).is_err());
    }

    #[test]
    fn test_validate_plot_ready_requires_full_growth() {
        let mut plot = Plot::empty(1);
        plot.crop_type = Some("corn".to_string());
        plot.status = PlotStatus::ReadyToHarvest;
        plot.growth_progress = 90;
        assert!(validate_plot(&plot).is_err());

        plot.growth_progress = 100;
        assert!(validate_plot(&plot).is_ok());
    }

    #[test]
    fn test_validate_plot_growth_out_of_range() {
        let mut plot = Plot::empty(1);
        plot.crop_type = Some("corn".to_string());
        plot.status = PlotStatus::Growing;
        plot.growth_progress = 101;
        assert!(validate_plot(&plot).is_err());
    }
}
