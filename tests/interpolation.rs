use line_chart_wasm::domain::chart::AnimationClock;
use line_chart_wasm::domain::market_data::Sample;

fn samples() -> Vec<Sample> {
    vec![Sample::new(-0.5, 61100.0), Sample::new(0.0, 61101.0), Sample::new(0.5, 61102.0)]
}

#[test]
fn last_element_follows_the_lerp_law() {
    let mut clock = AnimationClock::new(500.0);
    clock.admit(1000.0);
    clock.update_fraction(1250.0);
    assert_eq!(clock.fraction(), 0.5);

    let data = clock.interpolate(&samples()).unwrap();
    assert_eq!(data.len(), 3);
    // Unchanged prefix, tweened tail.
    assert_eq!(data[0], Sample::new(-0.5, 61100.0));
    assert_eq!(data[1], Sample::new(0.0, 61101.0));
    assert_eq!(data[2], Sample::new(0.0, 61101.0).lerp(&Sample::new(0.5, 61102.0), 0.5));
}

#[test]
fn fraction_never_decreases_within_a_period() {
    let mut clock = AnimationClock::new(500.0);
    clock.admit(1000.0);
    let mut previous = 0.0;
    let mut t = 1000.0;
    while t <= 1500.0 {
        clock.update_fraction(t);
        assert!(clock.fraction() >= previous, "fraction regressed at t={t}");
        previous = clock.fraction();
        t += 16.0;
    }
}

#[test]
fn fraction_is_rounded_to_two_decimals() {
    let mut clock = AnimationClock::new(500.0);
    clock.admit(1000.0);
    clock.update_fraction(1123.0);
    assert_eq!(clock.fraction(), 0.25);
}

#[test]
fn admission_restarts_the_tween() {
    let mut clock = AnimationClock::new(500.0);
    clock.admit(1000.0);
    clock.update_fraction(1499.0);
    assert!(clock.fraction() > 0.9);
    clock.admit(1500.0);
    assert_eq!(clock.fraction(), 0.0);
    assert_eq!(clock.last_sample_time_ms(), 1500.0);
}

#[test]
fn fraction_saturates_past_the_period() {
    let mut clock = AnimationClock::new(500.0);
    clock.admit(1000.0);
    clock.update_fraction(2100.0);
    assert_eq!(clock.fraction(), 1.0);
}
