use cairo::{Context, Format, ImageSurface, Matrix};
use pango::FontDescription;

use crate::core::{Point, Transform, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec, Surface};

#[derive(Debug, Clone)]
struct StyleState {
    stroke_color: Color,
    line_width: f64,
    fill_color: Color,
    font: FontSpec,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            line_width: 1.0,
            fill_color: Color::BLACK,
            font: FontSpec::default(),
        }
    }
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Draws into an offscreen `ImageSurface`; export the result through
/// `image_surface()` (for example with `write_to_png`). Stroke and fill
/// styles are applied at operation time, so cairo's single source color is
/// never shared between a stroke and a fill.
#[derive(Debug)]
pub struct CairoSurface {
    image: ImageSurface,
    context: Context,
    clear_color: Color,
    style: StyleState,
    saved_styles: Vec<StyleState>,
}

impl CairoSurface {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::Backend("surface width exceeds cairo limits".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::Backend("surface height exceeds cairo limits".to_owned()))?;

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        Ok(Self {
            image,
            context,
            clear_color: Color::WHITE,
            style: StyleState::default(),
            saved_styles: Vec::new(),
        })
    }

    #[must_use]
    pub fn image_surface(&self) -> &ImageSurface {
        &self.image
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }
}

impl Surface for CairoSurface {
    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save context state", err))?;
        self.saved_styles.push(self.style.clone());
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context state", err))?;
        if let Some(style) = self.saved_styles.pop() {
            self.style = style;
        }
        Ok(())
    }

    fn set_transform(&mut self, transform: Transform) {
        self.context.set_matrix(Matrix::new(
            transform.a,
            transform.b,
            transform.c,
            transform.d,
            transform.e,
            transform.f,
        ));
    }

    fn clear(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save context state", err))?;
        self.context.identity_matrix();
        apply_color(&self.context, self.clear_color);
        self.context
            .rectangle(0.0, 0.0, f64::from(viewport.width), f64::from(viewport.height));
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context state", err))
    }

    fn set_stroke_style(&mut self, color: Color, line_width: f64) {
        self.style.stroke_color = color;
        self.style.line_width = line_width;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.style.fill_color = color;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.style.font = font.clone();
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, point: Point) {
        self.context.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.context.line_to(point.x, point.y);
    }

    fn stroke_path(&mut self) -> ChartResult<()> {
        apply_color(&self.context, self.style.stroke_color);
        self.context.set_line_width(self.style.line_width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill_text(&mut self, text: &str, anchor: Point) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!(
            "{} {}",
            self.style.font.family, self.style.font.size_px
        ));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        // Pango positions a layout by its top-left corner; shift up by the
        // first-line baseline so `anchor` lands on the alphabetic baseline.
        let baseline_px = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        apply_color(&self.context, self.style.fill_color);
        self.context.move_to(anchor.x, anchor.y - baseline_px);
        pangocairo::functions::show_layout(&self.context, &layout);
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
