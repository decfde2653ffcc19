//! Business logic services for the Smart Farm Server

pub mod plot;

pub use plot::PlotService;
