use crate::core::{Point, Transform, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, FontSpec, Surface};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    SetTransform(Transform),
    Clear(Viewport),
    SetStrokeStyle { color: Color, line_width: f64 },
    SetFillStyle(Color),
    SetFont(FontSpec),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    StrokePath,
    FillText { text: String, anchor: Point },
}

/// Surface that records its call log instead of drawing.
///
/// Used by tests and headless scene usage to assert paint order, per-shape
/// isolation and re-render behavior without a real backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Returns the recorded log and leaves the surface empty for the next
    /// pass.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokePath))
            .count()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillText { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.ops.push(DrawOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.ops.push(DrawOp::Restore);
        Ok(())
    }

    fn set_transform(&mut self, transform: Transform) {
        self.ops.push(DrawOp::SetTransform(transform));
    }

    fn clear(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.ops.push(DrawOp::Clear(viewport));
        Ok(())
    }

    fn set_stroke_style(&mut self, color: Color, line_width: f64) {
        self.ops.push(DrawOp::SetStrokeStyle { color, line_width });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFillStyle(color));
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.ops.push(DrawOp::SetFont(font.clone()));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(DrawOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(DrawOp::LineTo(point));
    }

    fn stroke_path(&mut self) -> ChartResult<()> {
        self.ops.push(DrawOp::StrokePath);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, anchor: Point) -> ChartResult<()> {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            anchor,
        });
        Ok(())
    }
}
