use serde::{Deserialize, Serialize};

/// Pixel geometry of the chart area the host renders into.
///
/// Only the horizontal extent participates in windowing math; a zero
/// width is a valid steady state (e.g. before first layout) in which
/// pixel-dependent operations degrade to no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub width: u32,
}

impl Container {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0
    }
}
