// File: crates/scatter-core/tests/scales.rs
// Purpose: Validate linear scale mapping, inversion, and degenerate domains.

use scatter_core::scale::{extent, LinearScale};

#[test]
fn x_scale_linear_interpolation() {
    // Observed incomes {10, 50, 90} onto a 100 px drawable width.
    let incomes = [10.0, 50.0, 90.0];
    let (lo, hi) = extent(incomes).unwrap();
    let s = LinearScale::new((lo, hi), (0.0, 100.0));

    assert!((s.scale(10.0) - 0.0).abs() < 1e-4);
    assert!((s.scale(50.0) - 50.0).abs() < 1e-4);
    assert!((s.scale(90.0) - 100.0).abs() < 1e-4);
}

#[test]
fn y_scale_inverts_screen_direction() {
    // Healthcare domain [0, 20] onto a 200 px drawable height: zero plots
    // at the bottom, the max at the top.
    let s = LinearScale::new((0.0, 20.0), (200.0, 0.0));
    assert!((s.scale(0.0) - 200.0).abs() < 1e-4);
    assert!((s.scale(20.0) - 0.0).abs() < 1e-4);
    assert!((s.scale(10.0) - 100.0).abs() < 1e-4);
}

#[test]
fn invert_round_trips() {
    let s = LinearScale::new((10.0, 90.0), (0.0, 100.0));
    for v in [10.0, 37.5, 64.0, 90.0] {
        let back = s.invert(s.scale(v));
        assert!((back - v).abs() < 1e-3, "{v} round-tripped to {back}");
    }
}

#[test]
fn degenerate_domain_widens() {
    // All points share one value; interpolation must stay finite.
    let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    let px = s.scale(5.0);
    assert!(px.is_finite());
    assert_eq!(s.domain(), (5.0, 6.0));
}

#[test]
fn extent_skips_non_finite() {
    let vals = [f64::NAN, 3.0, 1.0, f64::INFINITY, 2.0];
    assert_eq!(extent(vals), Some((1.0, 3.0)));
    assert_eq!(extent([f64::NAN]), None);
    let empty: [f64; 0] = [];
    assert_eq!(extent(empty), None);
}
