use tracing::debug;

use crate::core::{Axis, Dataset, PaddedScale, Point, Sample, Transform};
use crate::error::ChartResult;
use crate::render::{Polyline, Scene, Surface};

use super::ChartStyle;

/// Maps samples into scene coordinates: raw time and value multiplied by
/// the axis scale factors. Padding and origin offsets are left to the scene
/// transform so every point shares one affine map.
#[must_use]
pub fn project_samples(samples: &[Sample], x: PaddedScale, y: PaddedScale) -> Vec<Point> {
    samples
        .iter()
        .map(|sample| Point::new(x.to_px(sample.time), y.to_px(sample.value)))
        .collect()
}

/// Chart-view transform: flips Y into screen orientation and translates so
/// the padded minimum time lands at pixel x = 0 and the padded value range
/// fills the height.
#[must_use]
pub fn chart_transform(x: PaddedScale, y: PaddedScale) -> Transform {
    Transform::new(
        1.0,
        0.0,
        0.0,
        -1.0,
        -x.to_px(x.padded_min()),
        y.to_px(y.bounds().span() + y.padding()),
    )
}

/// Builds and renders the value-over-time chart into `scene`.
///
/// The zero-value axis line goes in first and the data polyline second, so
/// data always paints over the axis. Errors from degenerate ranges abort
/// before the scene is touched.
pub fn draw_chart<S: Surface>(
    scene: &mut Scene<S>,
    dataset: &Dataset,
    style: &ChartStyle,
) -> ChartResult<()> {
    style.validate()?;

    let meta = dataset.meta();
    let y = PaddedScale::derive(
        Axis::Value,
        meta.value_bounds,
        style.padding_fraction,
        scene.height(),
    )?;
    let x = PaddedScale::derive(
        Axis::Time,
        meta.time_bounds,
        style.padding_fraction,
        scene.width(),
    )?;

    let points = project_samples(dataset.samples(), x, y);
    let point_count = points.len();

    scene.set_transform(chart_transform(x, y));
    scene.add(Polyline::new(
        vec![
            Point::new(x.to_px(x.padded_min()), 0.0),
            Point::new(x.to_px(x.padded_max()), 0.0),
        ],
        style.axis_color,
        style.axis_width,
    ));
    scene.add(Polyline::new(points, style.line_color, style.line_width));

    debug!(point_count, "chart scene built");
    scene.render()
}
