use tracing::{debug, trace};

use super::ViewportEngine;
use super::pan_delta_resolver::resolve_drag_points_delta;

impl ViewportEngine {
    /// Begins a drag session, snapshotting the pointer position and the
    /// current domain as the pan anchor. Silently ignored when a session
    /// is already active or the dataset is empty.
    pub fn drag_start(&mut self, pointer_x: f64) {
        if !pointer_x.is_finite() {
            return;
        }
        let Some(domain) = self.state.domain() else {
            return;
        };

        if self.interaction.on_drag_start(pointer_x, domain) {
            debug!(pointer_x, "drag start");
        } else {
            trace!("drag start ignored, session already active");
        }
    }

    /// Pans the window rigidly against the drag anchor.
    ///
    /// Displacement is measured from the anchor pointer position, not the
    /// previous move, and is inverted relative to pointer travel: dragging
    /// right reveals earlier indices. No-op when idle or when the
    /// container has zero width.
    pub fn drag_move(&mut self, pointer_x: f64) {
        let Some(session) = self.interaction.drag_session() else {
            return;
        };

        let Some(points_delta) = resolve_drag_points_delta(
            pointer_x,
            session.anchor_pointer_x,
            self.container,
            self.dataset_len,
            self.state.scale(),
        ) else {
            return;
        };

        self.state = self
            .state
            .panned_rigid(session.anchor_domain, points_delta, self.dataset_len);
        trace!(points_delta, "drag move applied");
    }

    /// Ends the active drag session. The domain keeps whatever the last
    /// `drag_move` applied.
    pub fn drag_end(&mut self) {
        if self.interaction.on_drag_end() {
            debug!("drag end");
        }
    }

    /// Behaviorally identical to [`drag_end`](Self::drag_end); hosts call
    /// this when the pointer leaves the tracked surface or input capture
    /// is lost, so no orphaned session survives.
    pub fn drag_cancel(&mut self) {
        if self.interaction.on_drag_end() {
            debug!("drag cancelled");
        }
    }
}
