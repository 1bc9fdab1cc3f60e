use serde::{Deserialize, Serialize};

use super::ViewportEngine;

/// Scroll-wheel zoom direction, abstracted from the raw wheel delta sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Maps a raw vertical wheel delta to a zoom direction: positive
    /// (scroll down) zooms out, negative (scroll up) zooms in.
    #[must_use]
    pub fn from_delta_sign(delta: f64) -> Self {
        if delta > 0.0 { Self::Out } else { Self::In }
    }
}

/// Abstract input events a host adapter forwards to the engine.
///
/// The adapter owns the translation from raw hardware events: hit-testing
/// the pointer against the chart area, normalizing wheel deltas, and
/// reporting capture loss as `DragCancel`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    ScrollZoom {
        pointer_fraction: f64,
        direction: WheelDirection,
    },
    DragStart {
        pointer_x: f64,
    },
    DragMove {
        pointer_x: f64,
    },
    DragEnd,
    DragCancel,
    ZoomIn,
    ZoomOut,
    Reset,
}

impl ViewportEngine {
    /// Applies one abstract input event.
    ///
    /// Events are applied in delivery order, one at a time; the engine
    /// never reorders or batches, so rapid wheel input produces visibly
    /// incremental zoom steps.
    pub fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ScrollZoom {
                pointer_fraction,
                direction,
            } => self.scroll_zoom(pointer_fraction, direction),
            InputEvent::DragStart { pointer_x } => self.drag_start(pointer_x),
            InputEvent::DragMove { pointer_x } => self.drag_move(pointer_x),
            InputEvent::DragEnd => self.drag_end(),
            InputEvent::DragCancel => self.drag_cancel(),
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
            InputEvent::Reset => self.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WheelDirection;

    #[test]
    fn wheel_delta_sign_maps_to_direction() {
        assert_eq!(WheelDirection::from_delta_sign(53.0), WheelDirection::Out);
        assert_eq!(WheelDirection::from_delta_sign(-53.0), WheelDirection::In);
        assert_eq!(WheelDirection::from_delta_sign(0.0), WheelDirection::In);
    }
}
