use std::cmp::Ordering;

use tracing::debug;

use crate::core::bounds::{Bounds, time_bounds, value_bounds};
use crate::core::types::Sample;
use crate::error::{ChartError, ChartResult};

/// Axis extents derived once when the dataset is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetMeta {
    pub time_bounds: Bounds,
    pub value_bounds: Bounds,
}

/// Ascending-by-time sample series plus its derived meta.
///
/// Construction is the only write path: samples and meta are immutable
/// afterward, so views can read bounds without rescanning.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
    meta: DatasetMeta,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> ChartResult<Self> {
        if samples.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].time.total_cmp(&pair[0].time) == Ordering::Less {
                return Err(ChartError::InvalidData(format!(
                    "sample {} time {} precedes sample {} time {}",
                    index + 1,
                    pair[1].time,
                    index,
                    pair[0].time
                )));
            }
        }

        let meta = DatasetMeta {
            time_bounds: time_bounds(&samples)?,
            value_bounds: value_bounds(&samples)?,
        };
        debug!(sample_count = samples.len(), "dataset loaded");

        Ok(Self { samples, meta })
    }

    /// Decodes the `[[value, time], ...]` wire payload and builds a dataset.
    pub fn from_json_str(payload: &str) -> ChartResult<Self> {
        let samples: Vec<Sample> = serde_json::from_str(payload).map_err(|err| {
            ChartError::Decode(format!(
                "payload must be an array of [value, time] pairs: {err}"
            ))
        })?;
        Self::new(samples)
    }

    pub fn from_json_slice(payload: &[u8]) -> ChartResult<Self> {
        let samples: Vec<Sample> = serde_json::from_slice(payload).map_err(|err| {
            ChartError::Decode(format!(
                "payload must be an array of [value, time] pairs: {err}"
            ))
        })?;
        Self::new(samples)
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn meta(&self) -> DatasetMeta {
        self.meta
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: empty input is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
