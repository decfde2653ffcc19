//! Domain models for the Smart Farm Server

mod plot;

pub use plot::*;
