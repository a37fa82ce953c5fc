use tracing::debug;

use crate::core::{Transform, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Shape, Surface};

/// Ordered display list bound to one drawing surface.
///
/// Insertion order is paint order: later shapes draw over earlier ones.
/// Shapes are stored untransformed; the active transform is applied by the
/// surface at render time, so changing it re-renders the same shapes into a
/// different pixel layout.
#[derive(Debug)]
pub struct Scene<S: Surface> {
    surface: S,
    viewport: Viewport,
    transform: Transform,
    shapes: Vec<Shape>,
}

impl<S: Surface> Scene<S> {
    pub fn new(surface: S, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            surface,
            viewport,
            transform: Transform::IDENTITY,
            shapes: Vec::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.viewport.height)
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Appends a shape at the top of the paint order. Shape content is not
    /// inspected here.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Replaces the transform used on the next render pass.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Clears the surface, then paints every shape in insertion order.
    ///
    /// Each shape draws inside its own save/restore bracket. Rendering does
    /// not consume the list, so a pass can be repeated after changing the
    /// transform or appending shapes.
    pub fn render(&mut self) -> ChartResult<()> {
        self.surface.clear(self.viewport)?;
        self.surface.set_transform(self.transform);

        for shape in &self.shapes {
            self.surface.save()?;
            shape.render(&mut self.surface)?;
            self.surface.restore()?;
        }

        debug!(shape_count = self.shapes.len(), "scene rendered");
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
