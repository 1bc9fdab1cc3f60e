use viewport_rs::api::{ViewportEngine, ViewportEngineConfig, WheelDirection};
use viewport_rs::core::Container;

fn build_engine(dataset_len: usize, container_width: u32) -> ViewportEngine {
    let config = ViewportEngineConfig::new(Container::new(container_width), dataset_len);
    ViewportEngine::new(config).expect("engine init")
}

#[test]
fn first_tick_windows_around_pointer_midpoint() {
    let mut engine = build_engine(100, 1000);

    engine.scroll_zoom(0.5, WheelDirection::In);

    assert!((engine.current_scale() - 1.1).abs() <= 1e-12);
    // budget ceil(100/1.1) = 91, center 49.5, floor/ceil expansion
    assert_eq!(engine.visible_range(), Some((4, 95)));
}

#[test]
fn successive_ticks_are_individually_incremental() {
    let mut engine = build_engine(100, 1000);

    engine.scroll_zoom(0.5, WheelDirection::In);
    assert_eq!(engine.visible_range(), Some((4, 95)));

    engine.scroll_zoom(0.5, WheelDirection::In);
    assert!((engine.current_scale() - 1.21).abs() <= 1e-9);
    assert_eq!(engine.visible_range(), Some((8, 91)));
}

#[test]
fn zooming_at_left_edge_keeps_window_on_boundary() {
    let mut engine = build_engine(100, 1000);

    engine.scroll_zoom(0.0, WheelDirection::In);

    // start clamps to 0 and the window re-expands to the full point budget
    assert_eq!(engine.visible_range(), Some((0, 91)));
}

#[test]
fn zooming_at_right_edge_keeps_window_on_boundary() {
    let mut engine = build_engine(100, 1000);

    engine.scroll_zoom(1.0, WheelDirection::In);

    assert_eq!(engine.visible_range(), Some((8, 99)));
}

#[test]
fn zoom_out_at_min_scale_keeps_full_window() {
    let mut engine = build_engine(100, 1000);

    engine.scroll_zoom(0.5, WheelDirection::Out);

    assert!((engine.current_scale() - 1.0).abs() <= 1e-12);
    assert_eq!(engine.visible_range(), Some((0, 99)));
}

#[test]
fn scale_saturates_at_upper_bound_under_rapid_input() {
    let mut engine = build_engine(100, 1000);

    for _ in 0..50 {
        engine.scroll_zoom(0.5, WheelDirection::In);
    }

    assert!((engine.current_scale() - 5.0).abs() <= 1e-12);
    let (start, end) = engine.visible_range().expect("windowed range");
    // budget ceil(100/5) = 20, plus the inclusive-bound expansion point
    assert!(end - start + 1 <= 21);
}

#[test]
fn zoom_in_then_out_returns_to_bounds() {
    let mut engine = build_engine(100, 1000);

    for _ in 0..10 {
        engine.scroll_zoom(0.3, WheelDirection::In);
    }
    for _ in 0..50 {
        engine.scroll_zoom(0.7, WheelDirection::Out);
    }

    assert!((engine.current_scale() - 1.0).abs() <= 1e-12);
    let (start, end) = engine.visible_range().expect("windowed range");
    assert_eq!((start, end), (0, 99));
}

#[test]
fn pointer_outside_chart_is_ignored_bit_for_bit() {
    let mut engine = build_engine(100, 1000);
    engine.scroll_zoom(0.5, WheelDirection::In);
    let before = engine.snapshot();

    engine.scroll_zoom(-0.1, WheelDirection::In);
    engine.scroll_zoom(1.1, WheelDirection::In);
    engine.scroll_zoom(f64::NAN, WheelDirection::In);

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn zero_width_container_is_ignored_bit_for_bit() {
    let mut engine = build_engine(100, 0);
    let before = engine.snapshot();

    engine.scroll_zoom(0.5, WheelDirection::In);

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn empty_dataset_is_ignored() {
    let mut engine = build_engine(0, 1000);
    let before = engine.snapshot();

    engine.scroll_zoom(0.5, WheelDirection::In);

    assert_eq!(engine.snapshot(), before);
}
