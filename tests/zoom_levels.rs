use line_chart_wasm::domain::chart::ChartEngine;
use line_chart_wasm::domain::config::ChartConfig;
use line_chart_wasm::domain::errors::ChartError;

fn engine() -> ChartEngine {
    let feed = Box::new(|_t: f64| 61101.0);
    ChartEngine::new(900.0, 600.0, 0.0, ChartConfig::default(), feed).unwrap()
}

#[test]
fn wheel_sign_steps_one_level() {
    let mut engine = engine();
    assert_eq!(engine.level_index(), 4);
    assert_eq!(engine.display_duration(), 90.0);

    assert!(engine.handle_wheel(120.0, 0.0, 0.0));
    assert_eq!(engine.level_index(), 3);
    assert_eq!(engine.display_duration(), 80.0);

    assert!(engine.handle_wheel(-3.0, 0.0, 0.0));
    assert_eq!(engine.level_index(), 4);
}

#[test]
fn magnitude_is_ignored() {
    let mut a = engine();
    let mut b = engine();
    a.handle_wheel(1.0, 0.0, 0.0);
    b.handle_wheel(5000.0, 0.0, 0.0);
    assert_eq!(a.level_index(), b.level_index());
}

#[test]
fn finest_level_is_a_floor() {
    let mut engine = engine();
    for _ in 0..4 {
        assert!(engine.handle_wheel(120.0, 0.0, 0.0));
    }
    assert_eq!(engine.level_index(), 0);
    assert_eq!(engine.display_duration(), 50.0);
    // Further zoom-in requests are swallowed.
    assert!(!engine.handle_wheel(120.0, 0.0, 0.0));
    assert_eq!(engine.level_index(), 0);
}

#[test]
fn level_change_resets_the_origin_domain() {
    let mut engine = engine();
    engine.set_autoscroll(true);
    engine.on_frame(1_000_000.0);
    assert_ne!(engine.scales().x_origin().domain()[0], 0.0);

    engine.handle_wheel(120.0, 0.0, 0.0);
    assert_eq!(engine.scales().x_origin().domain(), [0.0, 80.0]);
}

#[test]
fn zero_delta_is_a_noop() {
    let mut engine = engine();
    assert!(!engine.handle_wheel(0.0, 0.0, 0.0));
    assert_eq!(engine.level_index(), 4);
}

#[test]
fn explicit_level_jump_validates_the_index() {
    let mut engine = engine();
    engine.set_level(10).unwrap();
    assert_eq!(engine.display_duration(), 150.0);
    assert!(matches!(
        engine.set_level(200),
        Err(ChartError::LevelOutOfRange { index: 200, levels: 200 })
    ));
    assert_eq!(engine.level_index(), 10);
}
