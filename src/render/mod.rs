mod primitives;
mod recording;
mod scene;

pub use primitives::{Color, FontSpec, Polyline, Shape, TextLabel};
pub use recording::{DrawOp, RecordingSurface};
pub use scene::Scene;

use crate::core::{Point, Transform, Viewport};
use crate::error::ChartResult;

/// Capability contract implemented by any drawing surface backend.
///
/// The surface is a stateful 2D context: shapes configure style, build a
/// path and stroke or fill it. Scenes bracket every shape between `save`
/// and `restore` so style state never leaks from one shape into the next.
pub trait Surface {
    /// Pushes the current style and transform state.
    fn save(&mut self) -> ChartResult<()>;

    /// Pops back to the most recently saved state.
    fn restore(&mut self) -> ChartResult<()>;

    /// Replaces the affine map applied to subsequent path and text
    /// coordinates.
    fn set_transform(&mut self, transform: Transform);

    /// Clears the whole surface in device space, ignoring the active
    /// transform.
    fn clear(&mut self, viewport: Viewport) -> ChartResult<()>;

    fn set_stroke_style(&mut self, color: Color, line_width: f64);

    fn set_fill_style(&mut self, color: Color);

    fn set_font(&mut self, font: &FontSpec);

    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    /// Strokes the current path with the configured stroke style.
    fn stroke_path(&mut self) -> ChartResult<()>;

    /// Draws `text` left-aligned with the alphabetic baseline on `anchor`.
    fn fill_text(&mut self, text: &str, anchor: Point) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
