use serde::{Deserialize, Serialize};

use crate::core::IndexDomain;
use crate::error::{ViewportError, ViewportResult};

/// Tuning controls for zoom stepping and magnification bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTuning {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Multiplier applied per wheel tick toward the pointer.
    pub wheel_zoom_in_factor: f64,
    /// Multiplier applied per wheel tick away from the pointer.
    pub wheel_zoom_out_factor: f64,
    /// Multiplier applied per discrete button step.
    pub step_zoom_factor: f64,
}

impl Default for ZoomTuning {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 5.0,
            wheel_zoom_in_factor: 1.1,
            wheel_zoom_out_factor: 0.9,
            step_zoom_factor: 1.2,
        }
    }
}

impl ZoomTuning {
    pub(crate) fn validate(self) -> ViewportResult<Self> {
        if !self.min_scale.is_finite() || !self.max_scale.is_finite() || self.min_scale < 1.0 {
            return Err(ViewportError::InvalidData(
                "zoom scale bounds must be finite and >= 1".to_owned(),
            ));
        }

        if self.max_scale < self.min_scale {
            return Err(ViewportError::InvalidData(
                "zoom max scale must be >= min scale".to_owned(),
            ));
        }

        if !self.wheel_zoom_in_factor.is_finite() || self.wheel_zoom_in_factor <= 1.0 {
            return Err(ViewportError::InvalidData(
                "wheel zoom-in factor must be finite and > 1".to_owned(),
            ));
        }

        if !self.wheel_zoom_out_factor.is_finite()
            || self.wheel_zoom_out_factor <= 0.0
            || self.wheel_zoom_out_factor >= 1.0
        {
            return Err(ViewportError::InvalidData(
                "wheel zoom-out factor must be finite and inside (0, 1)".to_owned(),
            ));
        }

        if !self.step_zoom_factor.is_finite() || self.step_zoom_factor <= 1.0 {
            return Err(ViewportError::InvalidData(
                "step zoom factor must be finite and > 1".to_owned(),
            ));
        }

        Ok(self)
    }

    #[must_use]
    pub fn clamp_scale(self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Immutable viewport value: magnification plus the visible index window.
///
/// Every transition consumes the previous value and returns a replacement,
/// so hosts can treat `(state, event) -> state` as a pure function and unit
/// test windowing without any input or rendering harness. `domain` is
/// `None` exactly when the attached dataset is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    scale: f64,
    domain: Option<IndexDomain>,
}

impl ViewportState {
    /// Unzoomed state covering the whole dataset.
    #[must_use]
    pub fn initial(dataset_len: usize, tuning: ZoomTuning) -> Self {
        Self {
            scale: tuning.min_scale,
            domain: IndexDomain::full(dataset_len),
        }
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn domain(self) -> Option<IndexDomain> {
        self.domain
    }

    /// Re-windows around a focal point expressed as a fraction of the
    /// current window (`0.0` = left edge, `1.0` = right edge).
    ///
    /// The focal point stays anchored under the pointer rather than at the
    /// window midpoint. When the recomputed window touches a dataset
    /// boundary it is re-expanded away from that boundary so zooming near
    /// an edge never shrinks the window below its point budget.
    #[must_use]
    pub fn zoomed_around_fraction(
        self,
        new_scale: f64,
        pointer_fraction: f64,
        dataset_len: usize,
    ) -> Self {
        let Some(domain) = self.domain else {
            return self;
        };
        if dataset_len == 0 || !new_scale.is_finite() || !pointer_fraction.is_finite() {
            return self;
        }

        let last_index = dataset_len as i64 - 1;
        let visible_points = visible_point_budget(dataset_len, new_scale);
        let pointer_fraction = pointer_fraction.clamp(0.0, 1.0);
        let center = (domain.start() as f64
            + (domain.end() - domain.start()) as f64 * pointer_fraction)
            .clamp(0.0, last_index as f64);
        let half = visible_points as f64 / 2.0;

        let mut start = ((center - half).floor() as i64).max(0);
        let mut end = ((center + half).ceil() as i64).min(last_index);

        if start == 0 {
            end = (start + visible_points).min(last_index);
        }
        if end == last_index {
            start = (end - visible_points).max(0);
        }

        Self {
            scale: new_scale,
            domain: Some(IndexDomain::from_ordered(start as usize, end as usize)),
        }
    }

    /// Re-windows symmetrically around the current window midpoint.
    #[must_use]
    pub fn zoomed_around_midpoint(self, new_scale: f64, dataset_len: usize) -> Self {
        let Some(domain) = self.domain else {
            return self;
        };
        if dataset_len == 0 || !new_scale.is_finite() {
            return self;
        }

        let visible_points = visible_point_budget(dataset_len, new_scale);
        let center = (((domain.start() + domain.end()) / 2) as i64).min(dataset_len as i64 - 1);
        let half = visible_points / 2;

        let start = (center - half).max(0);
        let end = (center + half).min(dataset_len as i64 - 1);

        Self {
            scale: new_scale,
            domain: Some(IndexDomain::from_ordered(start as usize, end as usize)),
        }
    }

    /// Shifts a drag-anchor window by a signed index delta without changing
    /// its width. A window pushed past either dataset edge is slid back so
    /// it rests against that edge; only zoom transitions change width.
    #[must_use]
    pub fn panned_rigid(self, anchor: IndexDomain, points_delta: i64, dataset_len: usize) -> Self {
        if dataset_len == 0 {
            return self;
        }

        // deltas past the dataset length already pin the window to an edge
        let points_delta = points_delta.clamp(-(dataset_len as i64), dataset_len as i64);
        let span = ((anchor.end() - anchor.start()) as i64).min(dataset_len as i64 - 1);
        let mut new_start = anchor.start() as i64 - points_delta;
        let mut new_end = new_start + span;

        if new_start < 0 {
            new_start = 0;
            new_end = span;
        }
        if new_end >= dataset_len as i64 {
            new_end = dataset_len as i64 - 1;
            new_start = new_end - span;
        }

        Self {
            scale: self.scale,
            domain: Some(IndexDomain::from_ordered(
                new_start as usize,
                new_end as usize,
            )),
        }
    }
}

/// Point budget of a window at a given magnification: `ceil(len / scale)`.
pub(crate) fn visible_point_budget(dataset_len: usize, scale: f64) -> i64 {
    (dataset_len as f64 / scale).ceil() as i64
}
