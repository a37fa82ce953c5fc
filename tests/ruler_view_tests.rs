use timechart::api::{
    RulerStyle, ShortDateFormatter, chart_transform, draw_time_ruler, label_times, plan_labels,
    ruler_transform,
};
use timechart::core::{Axis, Bounds, Dataset, PaddedScale, Sample, Viewport};
use timechart::error::ChartError;
use timechart::render::{DrawOp, RecordingSurface, Scene, Shape};

const WIDTH: f64 = 1200.0;

fn thousand_second_dataset() -> Dataset {
    Dataset::new(vec![
        Sample::new(10.0, 0.0),
        Sample::new(30.0, 500.0),
        Sample::new(20.0, 1000.0),
    ])
    .expect("dataset")
}

fn ruler_scene() -> Scene<RecordingSurface> {
    Scene::new(RecordingSurface::new(), Viewport::new(1200, 100)).expect("scene")
}

#[test]
fn reference_plan_yields_ten_slots_of_one_hundred_seconds() {
    let x = PaddedScale::derive(Axis::Time, Bounds::new(0.0, 1000.0), 0.05, WIDTH).expect("scale");
    let plan = plan_labels(x, 100.0).expect("plan");

    assert_eq!(plan.slots, 10);
    assert_eq!(plan.time_step, 100.0);

    // Pixel spacing between neighbors stays at or above the label width.
    let spacing_px = plan.time_step * x.px_per_unit();
    assert!(spacing_px >= 100.0, "spacing: {spacing_px}");
}

#[test]
fn tick_times_cover_the_range_uniformly() {
    let x = PaddedScale::derive(Axis::Time, Bounds::new(0.0, 1000.0), 0.05, WIDTH).expect("scale");
    let plan = plan_labels(x, 100.0).expect("plan");
    let times = label_times(Bounds::new(0.0, 1000.0), plan);

    assert_eq!(times.len(), 11);
    assert_eq!(times.first(), Some(&0.0));
    assert_eq!(times.last(), Some(&1000.0));
    for pair in times.windows(2) {
        assert_eq!(pair[1] - pair[0], 100.0);
    }
}

#[test]
fn ruler_emits_one_label_and_one_tick_per_time() {
    let mut scene = ruler_scene();
    draw_time_ruler(
        &mut scene,
        &thousand_second_dataset(),
        &ShortDateFormatter::default(),
        &RulerStyle::default(),
    )
    .expect("draw");

    // Eleven tick times: a label plus a tick line for each.
    assert_eq!(scene.shapes().len(), 22);
    assert_eq!(scene.surface().text_count(), 11);
    assert_eq!(scene.surface().stroke_count(), 11);

    // Labels and ticks interleave, label first, matching paint order.
    assert!(matches!(scene.shapes()[0], Shape::Label(_)));
    assert!(matches!(scene.shapes()[1], Shape::Polyline(_)));
}

#[test]
fn tick_lines_drop_from_the_top_edge() {
    let style = RulerStyle::default();
    let mut scene = ruler_scene();
    draw_time_ruler(
        &mut scene,
        &thousand_second_dataset(),
        &ShortDateFormatter::default(),
        &style,
    )
    .expect("draw");

    for shape in scene.shapes() {
        let Shape::Polyline(tick) = shape else {
            continue;
        };
        assert_eq!(tick.points.len(), 2);
        assert_eq!(tick.points[0].y, 0.0);
        assert_eq!(tick.points[1].y, style.tick_length_px);
        assert_eq!(tick.points[0].x, tick.points[1].x);
    }
}

#[test]
fn labels_anchor_at_half_height() {
    let mut scene = ruler_scene();
    draw_time_ruler(
        &mut scene,
        &thousand_second_dataset(),
        &ShortDateFormatter::default(),
        &RulerStyle::default(),
    )
    .expect("draw");

    for shape in scene.shapes() {
        let Shape::Label(label) = shape else {
            continue;
        };
        assert_eq!(label.anchor.y, 50.0);
    }
}

#[test]
fn ruler_aligns_horizontally_with_the_chart() {
    let x = PaddedScale::derive(Axis::Time, Bounds::new(0.0, 1000.0), 0.05, WIDTH).expect("x");
    let y = PaddedScale::derive(Axis::Value, Bounds::new(10.0, 30.0), 0.05, 250.0).expect("y");

    assert_eq!(ruler_transform(x).e, chart_transform(x, y).e);
}

#[test]
fn closure_formatters_supply_the_label_text() {
    let mut scene = ruler_scene();
    let formatter = |unix_seconds: f64| format!("t{unix_seconds}");
    draw_time_ruler(
        &mut scene,
        &thousand_second_dataset(),
        &formatter,
        &RulerStyle::default(),
    )
    .expect("draw");

    let texts: Vec<String> = scene
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts.first(), Some(&"t0".to_owned()));
    assert_eq!(texts.last(), Some(&"t1000".to_owned()));
    assert_eq!(texts.len(), 11);
}

#[test]
fn degenerate_time_range_aborts_the_ruler() {
    let dataset =
        Dataset::new(vec![Sample::new(1.0, 5.0), Sample::new(2.0, 5.0)]).expect("dataset");
    let mut scene = ruler_scene();
    let result = draw_time_ruler(
        &mut scene,
        &dataset,
        &ShortDateFormatter::default(),
        &RulerStyle::default(),
    );

    assert!(matches!(
        result,
        Err(ChartError::DegenerateRange {
            axis: Axis::Time,
            value,
        }) if value == 5.0
    ));
    assert!(scene.surface().ops().is_empty());
}

#[test]
fn surface_narrower_than_one_label_overflows() {
    let mut scene = Scene::new(RecordingSurface::new(), Viewport::new(80, 100)).expect("scene");
    let result = draw_time_ruler(
        &mut scene,
        &thousand_second_dataset(),
        &ShortDateFormatter::default(),
        &RulerStyle::default(),
    );

    assert!(matches!(result, Err(ChartError::LabelOverflow { .. })));
    assert!(scene.shapes().is_empty());
    assert!(scene.surface().ops().is_empty());
}
