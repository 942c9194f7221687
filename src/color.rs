//! 16-bit RGB565 colors
//!
//! The controller runs in 16 bits per pixel (`COLMOD = 0x05`), so every color
//! on the bus is a packed `u16` with 5 bits red, 6 bits green and 5 bits blue.

/// Black
pub const BLACK: u16 = 0x0000;
/// Blue
pub const BLUE: u16 = 0x001F;
/// Red
pub const RED: u16 = 0xF800;
/// Green
pub const GREEN: u16 = 0x07E0;
/// Cyan
pub const CYAN: u16 = 0x07FF;
/// Magenta
pub const MAGENTA: u16 = 0xF81F;
/// Yellow
pub const YELLOW: u16 = 0xFFE0;
/// White
pub const WHITE: u16 = 0xFFFF;

/// Pack 8-bit red, green and blue channels into a RGB565 word.
///
/// The low bits of each channel are dropped: 3 for red and blue, 2 for green.
pub const fn pack_color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Swap the red and blue fields of a RGB565 word, for panels wired BGR.
pub const fn swap_color(color: u16) -> u16 {
    (color << 11) | (color & 0x07E0) | (color >> 11)
}

/// Split a color into the (high, low) bytes in bus order.
pub(crate) const fn to_bytes(color: u16) -> (u8, u8) {
    ((color >> 8) as u8, color as u8)
}
