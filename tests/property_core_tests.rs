use proptest::prelude::*;
use timechart::core::{
    Axis, Bounds, PaddedScale, Point, Sample, Transform, time_bounds, value_bounds,
};

proptest! {
    #[test]
    fn time_bounds_are_the_first_and_last_timestamps(
        start in -1e9f64..1e9,
        deltas in prop::collection::vec(0.0f64..1e4, 0..64)
    ) {
        let mut time = start;
        let mut samples = vec![Sample::new(0.0, time)];
        for delta in deltas {
            time += delta;
            samples.push(Sample::new(1.0, time));
        }

        let bounds = time_bounds(&samples).expect("bounds");
        prop_assert_eq!(bounds.min, samples[0].time);
        prop_assert_eq!(bounds.max, samples[samples.len() - 1].time);
        prop_assert!(bounds.min <= bounds.max);
    }

    #[test]
    fn value_bounds_contain_every_value(values in prop::collection::vec(-1e6f64..1e6, 1..64)) {
        let samples: Vec<Sample> = values
            .iter()
            .enumerate()
            .map(|(index, value)| Sample::new(*value, index as f64))
            .collect();

        let bounds = value_bounds(&samples).expect("bounds");
        for value in &values {
            prop_assert!(bounds.contains(*value));
        }
        prop_assert!(values.contains(&bounds.min));
        prop_assert!(values.contains(&bounds.max));
    }

    #[test]
    fn padded_scale_grows_linearly_with_extent(
        min in -1e6f64..1e6,
        span in 0.001f64..1e6,
        extent in 1.0f64..10_000.0,
        factor in 1.0f64..8.0
    ) {
        let bounds = Bounds::new(min, min + span);
        let base = PaddedScale::derive(Axis::Time, bounds, 0.05, extent).expect("base scale");
        let scaled =
            PaddedScale::derive(Axis::Time, bounds, 0.05, extent * factor).expect("scaled");

        let ratio = scaled.px_per_unit() / base.px_per_unit();
        prop_assert!((ratio - factor).abs() <= 1e-9 * factor);
    }

    #[test]
    fn padded_window_fills_the_pixel_extent(
        min in -1e6f64..1e6,
        span in 0.001f64..1e6,
        extent in 1.0f64..10_000.0
    ) {
        let bounds = Bounds::new(min, min + span);
        let scale = PaddedScale::derive(Axis::Value, bounds, 0.05, extent).expect("scale");

        // Large offsets with tiny spans lose digits to cancellation, so the
        // tolerance is looser than the pure-math identity.
        let window_px = scale.to_px(scale.padded_max()) - scale.to_px(scale.padded_min());
        prop_assert!((window_px - extent).abs() <= extent * 1e-5);
    }

    #[test]
    fn transform_inverse_round_trips(
        a in 0.1f64..10.0,
        d in -10.0f64..-0.1,
        e in -1e4f64..1e4,
        f in -1e4f64..1e4,
        x in -1e4f64..1e4,
        y in -1e4f64..1e4
    ) {
        // Axis-aligned maps, the only family the views produce.
        let transform = Transform::new(a, 0.0, 0.0, d, e, f);
        let inverse = transform.invert().expect("invertible");

        let point = Point::new(x, y);
        let recovered = inverse.apply(transform.apply(point));
        prop_assert!((recovered.x - point.x).abs() <= 1e-6);
        prop_assert!((recovered.y - point.y).abs() <= 1e-6);
    }

    #[test]
    fn scene_mapping_round_trips_samples(
        time_start in 0.0f64..1e9,
        time_span in 1.0f64..1e6,
        value_span in 0.001f64..1e5,
        time_factor in 0.0f64..1.0,
        value_factor in 0.0f64..1.0
    ) {
        let time_bounds = Bounds::new(time_start, time_start + time_span);
        let value_bounds = Bounds::new(0.0, value_span);
        let x = PaddedScale::derive(Axis::Time, time_bounds, 0.05, 1200.0).expect("x scale");
        let y = PaddedScale::derive(Axis::Value, value_bounds, 0.05, 250.0).expect("y scale");

        let time = time_start + time_factor * time_span;
        let value = value_factor * value_span;

        let transform = Transform::new(
            1.0,
            0.0,
            0.0,
            -1.0,
            -x.to_px(x.padded_min()),
            y.to_px(y.bounds().span() + y.padding()),
        );
        let inverse = transform.invert().expect("invertible");

        let pixel = transform.apply(Point::new(x.to_px(time), y.to_px(value)));
        let recovered = inverse.apply(pixel);

        prop_assert!((recovered.x / x.px_per_unit() - time).abs() <= 1e-5 * time.abs().max(1.0));
        prop_assert!((recovered.y / y.px_per_unit() - value).abs() <= 1e-6 * value.abs().max(1.0));
    }
}
