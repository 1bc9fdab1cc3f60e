use crate::core::ZoomTuning;

use super::WheelDirection;

pub(super) fn resolve_wheel_scale(
    current_scale: f64,
    direction: WheelDirection,
    tuning: ZoomTuning,
) -> f64 {
    let factor = match direction {
        WheelDirection::In => tuning.wheel_zoom_in_factor,
        WheelDirection::Out => tuning.wheel_zoom_out_factor,
    };
    tuning.clamp_scale(current_scale * factor)
}

pub(super) fn resolve_step_zoom_in_scale(current_scale: f64, tuning: ZoomTuning) -> f64 {
    tuning.clamp_scale(current_scale * tuning.step_zoom_factor)
}

pub(super) fn resolve_step_zoom_out_scale(current_scale: f64, tuning: ZoomTuning) -> f64 {
    tuning.clamp_scale(current_scale / tuning.step_zoom_factor)
}
