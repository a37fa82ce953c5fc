use crate::core::bounds::Bounds;
use crate::core::types::Axis;
use crate::error::{ChartError, ChartResult};

/// Fraction of the raw span added beyond each extreme of an axis.
pub const DEFAULT_PADDING_FRACTION: f64 = 0.05;

/// Linear pixels-per-unit factor over a symmetrically padded data range.
///
/// The factor is `pixel_extent / (span + 2 * padding)`, so the padded range
/// exactly fills the pixel extent. Mapping stays a bare multiplication;
/// padding and origin offsets live in the scene transform instead, which
/// keeps every point of a view on one shared affine map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedScale {
    bounds: Bounds,
    padding: f64,
    px_per_unit: f64,
}

impl PaddedScale {
    pub fn derive(
        axis: Axis,
        bounds: Bounds,
        padding_fraction: f64,
        pixel_extent: f64,
    ) -> ChartResult<Self> {
        if !padding_fraction.is_finite() || padding_fraction < 0.0 {
            return Err(ChartError::InvalidData(
                "padding fraction must be finite and >= 0".to_owned(),
            ));
        }
        if !pixel_extent.is_finite() || pixel_extent <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel extent must be finite and > 0".to_owned(),
            ));
        }
        if !bounds.min.is_finite() || !bounds.max.is_finite() || bounds.min > bounds.max {
            return Err(ChartError::InvalidData(format!(
                "{axis} bounds must be finite and ordered: min={}, max={}",
                bounds.min, bounds.max
            )));
        }

        let span = bounds.span();
        if span == 0.0 {
            return Err(ChartError::DegenerateRange {
                axis,
                value: bounds.min,
            });
        }

        let padding = span * padding_fraction;
        let px_per_unit = pixel_extent / (span + 2.0 * padding);
        Ok(Self {
            bounds,
            padding,
            px_per_unit,
        })
    }

    #[must_use]
    pub fn bounds(self) -> Bounds {
        self.bounds
    }

    /// Padding in domain units, not pixels.
    #[must_use]
    pub fn padding(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn px_per_unit(self) -> f64 {
        self.px_per_unit
    }

    #[must_use]
    pub fn padded_min(self) -> f64 {
        self.bounds.min - self.padding
    }

    #[must_use]
    pub fn padded_max(self) -> f64 {
        self.bounds.max + self.padding
    }

    /// Multiplies a raw domain value by the scale factor.
    #[must_use]
    pub fn to_px(self, domain_value: f64) -> f64 {
        domain_value * self.px_per_unit
    }
}
