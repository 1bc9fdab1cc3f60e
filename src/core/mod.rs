pub mod domain;
pub mod types;
pub mod viewport;
pub mod windowing;

pub use domain::IndexDomain;
pub use types::Container;
pub use viewport::{ViewportState, ZoomTuning};
pub use windowing::window_slice;
