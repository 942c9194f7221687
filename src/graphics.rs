//! Graphics support through embedded-graphics
//!
//! [`Canvas`] turns any [`Primitives`] driver into a `DrawTarget<Color = Rgb565>`.
//! Shapes, text and images are drawn pixel by pixel, while solid fills go out
//! as one horizontal run per row.

use embedded_graphics::{
    pixelcolor::{IntoStorage, Rgb565},
    prelude::*,
    primitives::Rectangle,
};

use crate::primitives::Primitives;

/// NewType struct to implement DrawTarget
pub struct Canvas<P>(P);

impl<P> Canvas<P> {
    /// Wrap a driver
    pub fn new(display: P) -> Self {
        Canvas(display)
    }

    /// Borrow the wrapped driver
    pub fn inner(&self) -> &P {
        &self.0
    }

    /// Mutably borrow the wrapped driver, e.g. to rotate it
    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.0
    }

    /// Give back the wrapped driver
    pub fn release(self) -> P {
        self.0
    }
}

impl<P: Primitives> OriginDimensions for Canvas<P> {
    fn size(&self) -> Size {
        Size::new(self.0.width().into(), self.0.height().into())
    }
}

impl<P: Primitives> DrawTarget for Canvas<P> {
    type Color = Rgb565;
    type Error = P::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            self.0.draw_pixel(point.x, point.y, color.into_storage())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = drawable_area.bottom_right() else {
            return Ok(());
        };

        let Point { x, y: top } = drawable_area.top_left;
        let len = drawable_area.size.width as i32;
        let raw = color.into_storage();
        for y in top..=bottom_right.y {
            self.0.draw_fast_hline(x, y, len, raw)?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let area = self.bounding_box();
        self.fill_solid(&area, color)
    }
}
