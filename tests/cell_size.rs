use line_chart_wasm::domain::chart::{cell_duration, grid_cell_px};
use line_chart_wasm::domain::config::GridOptions;

#[test]
fn first_non_divisor_wins() {
    let grid = GridOptions::default();
    // 800 % 70 != 0 already.
    assert_eq!(grid_cell_px(800, &grid), 70);
    // 840 divides evenly by 70, so the scan moves on.
    assert_eq!(grid_cell_px(840, &grid), 71);
}

#[test]
fn all_divisors_fall_back_to_the_minimum() {
    let grid = GridOptions { cell_min_width: 2, cell_max_width: 4, ..GridOptions::default() };
    // 12 is divisible by 2, 3 and 4.
    assert_eq!(grid_cell_px(12, &grid), 2);
}

#[test]
fn cell_size_stays_inside_the_configured_band() {
    let grid = GridOptions::default();
    for width in [640, 800, 840, 1024, 1200, 1920] {
        let size = grid_cell_px(width, &grid);
        assert!((grid.cell_min_width..=grid.cell_max_width).contains(&size), "width {width}");
    }
}

#[test]
fn cell_duration_is_ceiled_and_floored_at_two() {
    let grid = GridOptions::default();
    // 840px / 71px = ~11.8 columns over 90s: ceil(7.6) = 8.
    assert_eq!(cell_duration(90.0, 840, &grid), 8.0);
    // Tiny visible durations still occupy at least 2s per column.
    assert_eq!(cell_duration(1.0, 840, &grid), 2.0);
}
