//! piechart-rs: interactive pie-chart widget core.
//!
//! This crate provides the geometry, hit-testing, and hover-interaction
//! machinery behind a desktop pie-chart widget, with a backend-agnostic
//! render frame and an optional Cairo/Pango backend for GTK4 hosts.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PieChartEngine, PieChartEngineConfig};
pub use error::{ChartError, ChartResult};
