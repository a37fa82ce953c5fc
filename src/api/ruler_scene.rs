use tracing::{debug, warn};

use crate::core::{Axis, Bounds, Dataset, PaddedScale, Point, Transform};
use crate::error::{ChartError, ChartResult};
use crate::render::{Polyline, Scene, Surface, TextLabel};

use super::{RulerStyle, TimeLabelFormatter};

/// Label layout across the time range: how many whole label slots fit and
/// the whole-second time delta between consecutive labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlan {
    pub slots: usize,
    pub time_step: f64,
}

/// Computes the label plan for a padded time scale.
///
/// One slot is `label_width_px` converted into time units, so emitting one
/// label per slot keeps neighbors at least a label width apart. A span
/// narrower than a single slot cannot host a label and is reported as
/// `LabelOverflow`. The step is floored to whole seconds; when flooring
/// would reach zero it clamps to one second, which still spans at least the
/// label width because sub-second stepping only happens on dense scales.
pub fn plan_labels(x: PaddedScale, label_width_px: f64) -> ChartResult<LabelPlan> {
    if !label_width_px.is_finite() || label_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "label width must be finite and > 0".to_owned(),
        ));
    }

    let span = x.bounds().span();
    let slot_span = label_width_px / x.px_per_unit();
    let slots = (span / slot_span).floor();
    if slots < 1.0 {
        return Err(ChartError::LabelOverflow { label_width_px });
    }

    let slots = slots as usize;
    let mut time_step = (span / slots as f64).floor();
    if time_step == 0.0 {
        warn!(span, slots, "label step floored to zero; clamping to one second");
        time_step = 1.0;
    }

    Ok(LabelPlan { slots, time_step })
}

/// Tick timestamps from the range minimum to the maximum, inclusive, in
/// `time_step` increments.
#[must_use]
pub fn label_times(time_bounds: Bounds, plan: LabelPlan) -> Vec<f64> {
    let mut times = Vec::with_capacity(plan.slots + 2);
    let mut time = time_bounds.min;
    while time <= time_bounds.max {
        times.push(time);
        time += plan.time_step;
    }
    times
}

/// Ruler transform: the chart view's horizontal alignment with no vertical
/// flip, so tick text reads upright.
#[must_use]
pub fn ruler_transform(x: PaddedScale) -> Transform {
    Transform::new(1.0, 0.0, 0.0, 1.0, -x.to_px(x.padded_min()), 0.0)
}

/// Builds and renders the time ruler into `scene`: one date label and one
/// tick mark per planned slot, sharing the chart view's horizontal mapping
/// so both views agree on where a timestamp falls.
pub fn draw_time_ruler<S: Surface, F: TimeLabelFormatter>(
    scene: &mut Scene<S>,
    dataset: &Dataset,
    formatter: &F,
    style: &RulerStyle,
) -> ChartResult<()> {
    style.validate()?;

    let meta = dataset.meta();
    let x = PaddedScale::derive(
        Axis::Time,
        meta.time_bounds,
        style.padding_fraction,
        scene.width(),
    )?;
    let plan = plan_labels(x, style.label_width_px)?;

    scene.set_transform(ruler_transform(x));
    let label_y = (scene.height() / 2.0).floor();

    let times = label_times(meta.time_bounds, plan);
    for &time in &times {
        let tick_x = x.to_px(time);
        scene.add(TextLabel::new(
            formatter.format_label(time),
            Point::new(tick_x, label_y),
            style.label_color,
            style.font.clone(),
        ));
        scene.add(Polyline::new(
            vec![
                Point::new(tick_x, 0.0),
                Point::new(tick_x, style.tick_length_px),
            ],
            style.tick_color,
            style.tick_width,
        ));
    }

    debug!(
        label_count = times.len(),
        time_step = plan.time_step,
        "ruler scene built"
    );
    scene.render()
}
