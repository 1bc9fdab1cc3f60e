//! viewport-rs: rendering-agnostic zoom/pan viewport controller.
//!
//! This crate owns the interactive windowing state for a chart-like host:
//! given a dataset length, container geometry, and a stream of abstract
//! zoom/drag input events, it computes which contiguous index slice of the
//! dataset is visible and at what magnification. Rendering, data fetching,
//! and raw input translation stay on the host side.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{ViewportEngine, ViewportEngineConfig};
pub use error::{ViewportError, ViewportResult};
