use tracing::trace;

use crate::core::ViewportState;

use super::zoom_target_resolver::{
    resolve_step_zoom_in_scale, resolve_step_zoom_out_scale, resolve_wheel_scale,
};
use super::{ViewportEngine, WheelDirection};

impl ViewportEngine {
    /// Wheel-driven zoom anchored at the pointer position.
    ///
    /// `pointer_fraction` is the pointer's horizontal position within the
    /// chart area, `0.0` at the left edge and `1.0` at the right. Ignored
    /// while a drag is active, when the pointer is outside the chart
    /// (`pointer_fraction` outside `[0, 1]`), when the container has zero
    /// width, or when the dataset is empty.
    pub fn scroll_zoom(&mut self, pointer_fraction: f64, direction: WheelDirection) {
        if self.interaction.is_dragging() {
            trace!("scroll zoom ignored while dragging");
            return;
        }
        if self.dataset_len == 0 || !self.container.is_valid() {
            return;
        }
        if !pointer_fraction.is_finite() || !(0.0..=1.0).contains(&pointer_fraction) {
            return;
        }

        let new_scale = resolve_wheel_scale(self.state.scale(), direction, self.tuning);
        self.state = self
            .state
            .zoomed_around_fraction(new_scale, pointer_fraction, self.dataset_len);
        trace!(scale = self.state.scale(), "scroll zoom applied");
    }

    /// Discrete button zoom step, centered on the current window midpoint
    /// rather than the pointer. Ignored while dragging.
    pub fn zoom_in(&mut self) {
        if self.interaction.is_dragging() || self.dataset_len == 0 {
            return;
        }

        let new_scale = resolve_step_zoom_in_scale(self.state.scale(), self.tuning);
        self.state = self.state.zoomed_around_midpoint(new_scale, self.dataset_len);
        trace!(scale = self.state.scale(), "step zoom in applied");
    }

    /// Discrete button zoom-out step, centered on the current window
    /// midpoint. Stepping back down to the minimum scale snaps the window
    /// to the full dataset, discarding any rounding drift accumulated by
    /// earlier zooming and panning. Ignored while dragging.
    pub fn zoom_out(&mut self) {
        if self.interaction.is_dragging() || self.dataset_len == 0 {
            return;
        }

        let new_scale = resolve_step_zoom_out_scale(self.state.scale(), self.tuning);
        if new_scale <= self.tuning.min_scale {
            self.state = ViewportState::initial(self.dataset_len, self.tuning);
        } else {
            self.state = self.state.zoomed_around_midpoint(new_scale, self.dataset_len);
        }
        trace!(scale = self.state.scale(), "step zoom out applied");
    }

    /// Returns to the unzoomed full-dataset window. Ignored while
    /// dragging; attach a dataset to replace state unconditionally.
    pub fn reset(&mut self) {
        if self.interaction.is_dragging() {
            return;
        }
        self.state = ViewportState::initial(self.dataset_len, self.tuning);
        trace!("viewport reset");
    }
}
