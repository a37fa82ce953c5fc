use crate::core::types::Sample;
use crate::error::{ChartError, ChartResult};

/// Inclusive `[min, max]` extent of one sample field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Scans every sample and returns the value extent, seeded from the first
/// element so negative-only datasets do not degenerate to zero.
pub fn value_bounds(samples: &[Sample]) -> ChartResult<Bounds> {
    let Some(first) = samples.first() else {
        return Err(ChartError::EmptyDataset);
    };
    let mut min = first.value;
    let mut max = first.value;
    for sample in samples {
        if sample.value < min {
            min = sample.value;
        }
        if sample.value > max {
            max = sample.value;
        }
    }
    Ok(Bounds::new(min, max))
}

/// Returns the time extent by reading the first and last samples.
///
/// Relies on the ascending-by-time ordering enforced at dataset
/// construction, so no scan is needed.
pub fn time_bounds(samples: &[Sample]) -> ChartResult<Bounds> {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Err(ChartError::EmptyDataset);
    };
    Ok(Bounds::new(first.time, last.time))
}
