use crate::core::types::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// CSS `green` (#008000).
    pub const GREEN: Self = Self::rgb(0.0, 128.0 / 255.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Font request resolved by the backend: a family name plus pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.family.is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("serif", 14.0)
    }
}

/// Connected stroked segments through an ordered point sequence, in scene
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub color: Color,
    pub stroke_width: f64,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Point>, color: Color, stroke_width: f64) -> Self {
        Self {
            points,
            color,
            stroke_width,
        }
    }

    fn render<S: Surface>(&self, surface: &mut S) -> ChartResult<()> {
        let Some(first) = self.points.first() else {
            return Ok(());
        };
        surface.set_stroke_style(self.color, self.stroke_width);
        surface.begin_path();
        surface.move_to(*first);
        for point in &self.points[1..] {
            surface.line_to(*point);
        }
        surface.stroke_path()
    }
}

/// Single text run anchored on the alphabetic baseline at a scene point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub anchor: Point,
    pub color: Color,
    pub font: FontSpec,
}

impl TextLabel {
    #[must_use]
    pub fn new(text: impl Into<String>, anchor: Point, color: Color, font: FontSpec) -> Self {
        Self {
            text: text.into(),
            anchor,
            color,
            font,
        }
    }

    fn render<S: Surface>(&self, surface: &mut S) -> ChartResult<()> {
        surface.set_font(&self.font);
        surface.set_fill_style(self.color);
        surface.fill_text(&self.text, self.anchor)
    }
}

/// Closed set of drawable primitives understood by every backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polyline(Polyline),
    Label(TextLabel),
}

impl Shape {
    /// Issues this primitive's draw calls against `surface`.
    pub fn render<S: Surface>(&self, surface: &mut S) -> ChartResult<()> {
        match self {
            Self::Polyline(polyline) => polyline.render(surface),
            Self::Label(label) => label.render(surface),
        }
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<TextLabel> for Shape {
    fn from(label: TextLabel) -> Self {
        Self::Label(label)
    }
}
