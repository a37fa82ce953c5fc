use crate::core::DEFAULT_PADDING_FRACTION;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec};

/// Styling and layout policy for the value-over-time chart view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Fraction of each axis span added beyond both extremes.
    pub padding_fraction: f64,
    pub line_color: Color,
    pub line_width: f64,
    pub axis_color: Color,
    pub axis_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding_fraction: DEFAULT_PADDING_FRACTION,
            line_color: Color::GREEN,
            line_width: 1.0,
            axis_color: Color::BLACK,
            axis_width: 1.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.padding_fraction.is_finite() || self.padding_fraction < 0.0 {
            return Err(ChartError::InvalidData(
                "chart padding fraction must be finite and >= 0".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.axis_width.is_finite() || self.axis_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "chart axis width must be finite and > 0".to_owned(),
            ));
        }
        self.line_color.validate()?;
        self.axis_color.validate()
    }
}

/// Styling and layout policy for the time ruler view.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerStyle {
    /// Must match the chart view's fraction for the two views to align.
    pub padding_fraction: f64,
    /// Horizontal pixel width reserved per label.
    pub label_width_px: f64,
    pub tick_length_px: f64,
    pub tick_color: Color,
    pub tick_width: f64,
    pub label_color: Color,
    pub font: FontSpec,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            padding_fraction: DEFAULT_PADDING_FRACTION,
            label_width_px: 100.0,
            tick_length_px: 10.0,
            tick_color: Color::BLACK,
            tick_width: 1.0,
            label_color: Color::BLACK,
            font: FontSpec::default(),
        }
    }
}

impl RulerStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.padding_fraction.is_finite() || self.padding_fraction < 0.0 {
            return Err(ChartError::InvalidData(
                "ruler padding fraction must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_width_px.is_finite() || self.label_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "ruler label width must be finite and > 0".to_owned(),
            ));
        }
        if !self.tick_length_px.is_finite() || self.tick_length_px < 0.0 {
            return Err(ChartError::InvalidData(
                "ruler tick length must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tick_width.is_finite() || self.tick_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "ruler tick width must be finite and > 0".to_owned(),
            ));
        }
        self.tick_color.validate()?;
        self.label_color.validate()?;
        self.font.validate()
    }
}
