use line_chart_wasm::domain::trading::{LabelBound, rect_overlap};
use quickcheck_macros::quickcheck;

#[test]
fn touching_edges_do_not_overlap() {
    let a = LabelBound::new(0.0, 0.0, 10.0, 10.0);
    let b = LabelBound::new(10.0, 0.0, 10.0, 10.0);
    assert!(!rect_overlap(&a, &b));
}

#[test]
fn containment_counts_as_overlap() {
    let outer = LabelBound::new(0.0, 0.0, 100.0, 100.0);
    let inner = LabelBound::new(40.0, 40.0, 10.0, 10.0);
    assert!(rect_overlap(&outer, &inner));
    assert!(rect_overlap(&inner, &outer));
}

#[test]
fn separation_on_one_axis_is_enough() {
    let a = LabelBound::new(0.0, 0.0, 10.0, 10.0);
    let right = LabelBound::new(20.0, 0.0, 10.0, 10.0);
    let below = LabelBound::new(0.0, 20.0, 10.0, 10.0);
    assert!(!rect_overlap(&a, &right));
    assert!(!rect_overlap(&a, &below));
}

#[quickcheck]
fn overlap_is_symmetric(ax: f64, ay: f64, bx: f64, by: f64) -> bool {
    if !(ax.is_finite() && ay.is_finite() && bx.is_finite() && by.is_finite()) {
        return true;
    }
    let a = LabelBound::new(ax, ay, 30.0, 20.0);
    let b = LabelBound::new(bx, by, 50.0, 40.0);
    rect_overlap(&a, &b) == rect_overlap(&b, &a)
}

#[quickcheck]
fn a_bound_overlaps_itself(x: f64, y: f64) -> bool {
    if !(x.is_finite() && y.is_finite()) {
        return true;
    }
    let a = LabelBound::new(x, y, 30.0, 20.0);
    rect_overlap(&a, &a)
}
