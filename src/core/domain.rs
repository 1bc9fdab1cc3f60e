use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};

/// Inclusive `[start, end]` index window over an ordered dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDomain {
    start: usize,
    end: usize,
}

impl IndexDomain {
    pub fn new(start: usize, end: usize) -> ViewportResult<Self> {
        if start > end {
            return Err(ViewportError::InvalidDomain { start, end });
        }
        Ok(Self { start, end })
    }

    /// Full-range window for a dataset; `None` when the dataset is empty.
    #[must_use]
    pub fn full(dataset_len: usize) -> Option<Self> {
        if dataset_len == 0 {
            return None;
        }
        Some(Self {
            start: 0,
            end: dataset_len - 1,
        })
    }

    /// Invariant-preserving constructor for internal windowing math.
    pub(crate) fn from_ordered(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(self) -> usize {
        self.end
    }

    /// Number of indices inside the window; at least 1.
    #[must_use]
    pub fn width(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn as_tuple(self) -> (usize, usize) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}
