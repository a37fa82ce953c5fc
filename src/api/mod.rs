mod chart_scene;
mod ruler_scene;
mod style;
mod time_label_format;

pub use chart_scene::{chart_transform, draw_chart, project_samples};
pub use ruler_scene::{LabelPlan, draw_time_ruler, label_times, plan_labels, ruler_transform};
pub use style::{ChartStyle, RulerStyle};
pub use time_label_format::{ShortDateFormatter, TimeLabelFormatter};
