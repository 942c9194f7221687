//! ST7628 LCD Driver
//!
//! Used in the Nokia 1600 color panel (98x70 RAM, 97x69 addressed). The
//! controller is driven over a 3-wire 9-bit serial bus which this crate
//! bit-bangs on plain GPIO outputs: no SPI peripheral is required.
//!
//! ## Architecture
//!
//! - **[`interface::BitBangInterface`]** owns the pins and frames every byte
//!   as one command or data transfer
//! - **[`driver::St7628`]** runs the init sequence and implements the drawing
//!   primitives on top of the controller's address window
//! - **[`graphics::Canvas`]** (feature `graphics`) adapts any
//!   [`primitives::Primitives`] implementation to embedded-graphics
//!
//! ## Usage
//!
//! ```rust, ignore
//! use st7628::prelude::*;
//! use embedded_graphics::{prelude::*, pixelcolor::Rgb565, primitives::*};
//!
//! // 1. Create the driver from three (or four) push-pull outputs
//! let mut display = St7628::new(cs, sda, scl, Some(rst));
//!
//! // 2. Reset and initialize the controller
//! display.init(&mut delay)?;
//! display.fill_screen(color::BLACK)?;
//!
//! // 3. Draw through embedded-graphics
//! let mut canvas = Canvas::new(display);
//! Circle::new(Point::new(30, 20), 25)
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut canvas)?;
//! ```
//!
//! Boards that tie the controller reset to the platform reset use
//! [`driver::St7628::without_reset`].
//!
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cmd;
pub mod color;
pub mod driver;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod interface;
pub mod primitives;
pub mod viewport;

mod flag;

#[cfg(test)]
mod mock;

/// Addressable panel width at rotation 0
pub const WIDTH: u8 = 97;

/// Addressable panel height at rotation 0
pub const HEIGHT: u8 = 69;

/// Useful exports
pub mod prelude {
    pub use crate::color::{self, pack_color565};
    pub use crate::driver::{InitStep, PostDelay, St7628};
    pub use crate::interface::{DisplayError, NoResetPin};
    pub use crate::primitives::Primitives;
    pub use crate::viewport::DisplayRotation;

    #[cfg(feature = "graphics")]
    pub use crate::graphics::Canvas;
}
