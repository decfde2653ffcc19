//! HTTP handlers for the Smart Farm Server

pub mod health;
pub mod plot;

pub use health::*;
pub use plot::*;
