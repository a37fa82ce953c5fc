use thiserror::Error;

use crate::core::types::Axis;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("dataset is empty: bounds are undefined")]
    EmptyDataset,

    #[error("{axis} range is degenerate: min == max == {value}")]
    DegenerateRange { axis: Axis, value: f64 },

    #[error("time range is narrower than one {label_width_px}px label slot")]
    LabelOverflow { label_width_px: f64 },

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("failed to decode payload: {0}")]
    Decode(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend error: {0}")]
    Backend(String),
}
