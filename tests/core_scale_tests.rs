use timechart::core::{Axis, Bounds, DEFAULT_PADDING_FRACTION, PaddedScale};
use timechart::error::ChartError;

#[test]
fn padded_scale_matches_the_reference_layout() {
    let scale =
        PaddedScale::derive(Axis::Time, Bounds::new(0.0, 1000.0), 0.05, 1200.0).expect("scale");

    assert!((scale.px_per_unit() - 1200.0 / 1100.0).abs() <= 1e-12);
    assert_eq!(scale.padding(), 50.0);
    assert_eq!(scale.padded_min(), -50.0);
    assert_eq!(scale.padded_max(), 1050.0);
}

#[test]
fn mapping_is_a_bare_multiplication() {
    let scale =
        PaddedScale::derive(Axis::Value, Bounds::new(0.0, 100.0), 0.05, 550.0).expect("scale");

    // 550 / (100 + 2 * 5) = 5 px per unit.
    assert_eq!(scale.px_per_unit(), 5.0);
    assert_eq!(scale.to_px(20.0), 100.0);
    assert_eq!(scale.to_px(-4.0), -20.0);
}

#[test]
fn doubling_the_pixel_extent_doubles_the_scale() {
    let bounds = Bounds::new(10.0, 110.0);
    let single = PaddedScale::derive(Axis::Time, bounds, 0.05, 600.0).expect("scale");
    let double = PaddedScale::derive(Axis::Time, bounds, 0.05, 1200.0).expect("scale");

    assert!((double.px_per_unit() - 2.0 * single.px_per_unit()).abs() <= 1e-12);
}

#[test]
fn degenerate_span_is_reported_per_axis() {
    let result = PaddedScale::derive(Axis::Time, Bounds::new(5.0, 5.0), 0.05, 1200.0);
    assert!(matches!(
        result,
        Err(ChartError::DegenerateRange {
            axis: Axis::Time,
            value,
        }) if value == 5.0
    ));

    let result = PaddedScale::derive(Axis::Value, Bounds::new(-3.0, -3.0), 0.05, 250.0);
    assert!(matches!(
        result,
        Err(ChartError::DegenerateRange {
            axis: Axis::Value,
            ..
        })
    ));
}

#[test]
fn zero_padding_keeps_extremes_on_the_edges() {
    let scale =
        PaddedScale::derive(Axis::Value, Bounds::new(10.0, 20.0), 0.0, 100.0).expect("scale");

    assert_eq!(scale.padding(), 0.0);
    assert_eq!(scale.px_per_unit(), 10.0);
    assert_eq!(scale.padded_min(), 10.0);
    assert_eq!(scale.padded_max(), 20.0);
}

#[test]
fn invalid_inputs_are_rejected() {
    let bounds = Bounds::new(0.0, 10.0);
    assert!(PaddedScale::derive(Axis::Time, bounds, -0.1, 100.0).is_err());
    assert!(PaddedScale::derive(Axis::Time, bounds, f64::NAN, 100.0).is_err());
    assert!(PaddedScale::derive(Axis::Time, bounds, 0.05, 0.0).is_err());
    assert!(PaddedScale::derive(Axis::Time, bounds, 0.05, f64::INFINITY).is_err());
    assert!(PaddedScale::derive(Axis::Time, Bounds::new(f64::NAN, 1.0), 0.05, 100.0).is_err());
    assert!(PaddedScale::derive(Axis::Time, Bounds::new(5.0, 1.0), 0.05, 100.0).is_err());
}

#[test]
fn default_padding_fraction_matches_the_views() {
    assert_eq!(DEFAULT_PADDING_FRACTION, 0.05);
}
