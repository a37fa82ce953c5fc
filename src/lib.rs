//! timechart: time-series line chart rendering with a synchronized
//! time-axis ruler.
//!
//! The crate splits into a pure coordinate-mapping core (bounds, padded
//! scales, affine transforms), a backend-agnostic scene layer, and two view
//! builders that compose them into the chart and ruler renderings.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use api::{ChartStyle, RulerStyle, ShortDateFormatter, draw_chart, draw_time_ruler};
pub use crate::core::{Dataset, Sample, Viewport};
pub use error::{ChartError, ChartResult};
pub use render::Scene;
