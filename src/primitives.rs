//! The drawing contract a canvas builds on
//!
//! Anything that can draw points, runs and filled rectangles in RGB565 can sit
//! under [`crate::graphics::Canvas`]; lines, shapes and text are synthesized
//! from these calls by the graphics library.

/// Primitive drawing operations offered by a display driver.
///
/// Coordinates are signed so callers can pass partially off-screen geometry;
/// implementations clip instead of failing.
pub trait Primitives {
    /// Bus error
    type Error;

    /// Visible width for the current rotation
    fn width(&self) -> u8;

    /// Visible height for the current rotation
    fn height(&self) -> u8;

    /// Set one pixel; off-screen coordinates are ignored.
    fn draw_pixel(&mut self, x: i32, y: i32, color: u16) -> Result<(), Self::Error>;

    /// Draw `len` pixels to the right of `(x, y)`, clipped to the width.
    fn draw_fast_hline(&mut self, x: i32, y: i32, len: i32, color: u16) -> Result<(), Self::Error>;

    /// Draw `len` pixels below `(x, y)`, clipped to the height.
    fn draw_fast_vline(&mut self, x: i32, y: i32, len: i32, color: u16) -> Result<(), Self::Error>;

    /// Fill a rectangle anchored at `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16)
        -> Result<(), Self::Error>;

    /// Fill the whole visible area.
    fn fill_screen(&mut self, color: u16) -> Result<(), Self::Error>;

    /// Rotate by `turns` quarter turns, modulo 4.
    fn set_rotation(&mut self, turns: u8) -> Result<(), Self::Error>;

    /// Turn color inversion on or off.
    fn invert_display(&mut self, invert: bool) -> Result<(), Self::Error>;
}
