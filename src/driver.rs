//! Driver for interacting with the ST7628 display controller
pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::cmd::Cmd;
use crate::flag::Flag;
use crate::interface::{BitBangInterface, NoResetPin};
use crate::primitives::Primitives;
use crate::viewport::{DisplayRotation, Viewport};

use log::debug;

const LONG_DELAY_MS: u32 = 500;
const SLEEP_DELAY_MS: u32 = 10;

/// Wait that follows a command in an init sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostDelay {
    /// Continue immediately
    #[default]
    None,
    /// Wait the given number of milliseconds
    Ms(u8),
    /// Wait 500 ms
    Long,
}

impl PostDelay {
    /// Length of the wait in milliseconds.
    pub const fn as_ms(self) -> u32 {
        match self {
            PostDelay::None => 0,
            PostDelay::Ms(ms) => ms as u32,
            PostDelay::Long => LONG_DELAY_MS,
        }
    }
}

/// One command of an init sequence, its arguments and the wait after it.
/// Keep sequences as static arrays so they live in flash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitStep {
    /// Command byte
    pub cmd: u8,
    /// Arguments, each sent as its own data frame
    pub args: &'static [u8],
    /// Wait after the last argument
    pub delay: PostDelay,
}

impl InitStep {
    /// Command with arguments and no wait.
    pub const fn new(cmd: u8, args: &'static [u8]) -> Self {
        InitStep {
            cmd,
            args,
            delay: PostDelay::None,
        }
    }

    /// Same step followed by `delay`.
    pub const fn then(self, delay: PostDelay) -> Self {
        InitStep { delay, ..self }
    }
}

/// Default init sequence: wake the panel into normal 16-bit color mode.
pub const DEFAULT_INIT_SEQUENCE: &[InitStep] = &[
    InitStep::new(Cmd::WRITE_CONTRAST, &[Flag::CONTRAST_DEFAULT]),
    InitStep::new(Cmd::SLEEP_OUT, &[]).then(PostDelay::Ms(10)),
    InitStep::new(Cmd::NORMAL_ON, &[]).then(PostDelay::Ms(10)),
    InitStep::new(Cmd::INVERT_OFF, &[]).then(PostDelay::Ms(10)),
    InitStep::new(Cmd::IDLE_MODE_OFF, &[]).then(PostDelay::Ms(10)),
    InitStep::new(Cmd::MEMORY_ACCESS_CTRL, &[0x00]),
    InitStep::new(Cmd::COLOR_MODE, &[Flag::COLOR_MODE_16BIT]),
    InitStep::new(Cmd::DISPLAY_ON, &[]).then(PostDelay::Long),
];

/// A configured display with a hardware interface.
pub struct St7628<CS, SDA, SCL, RST> {
    interface: BitBangInterface<CS, SDA, SCL, RST>,
    viewport: Viewport,
    /// Panel-specific init sequence provided at construction time.
    init_sequence: &'static [InitStep],
}

impl<CS, SDA, SCL> St7628<CS, SDA, SCL, NoResetPin> {
    /// Create the driver for a board without a controllable reset line.
    pub fn without_reset(cs: CS, sda: SDA, scl: SCL) -> Self {
        Self::new(cs, sda, scl, None)
    }
}

impl<CS, SDA, SCL, RST> St7628<CS, SDA, SCL, RST> {
    /// Create the driver from chip select, serial data, serial clock and an
    /// optional reset pin. The bus is not touched until [`Self::init`].
    pub fn new(cs: CS, sda: SDA, scl: SCL, rst: Option<RST>) -> Self {
        Self::with_init_sequence(cs, sda, scl, rst, DEFAULT_INIT_SEQUENCE)
    }

    /// Create with a custom init sequence.
    pub fn with_init_sequence(
        cs: CS,
        sda: SDA,
        scl: SCL,
        rst: Option<RST>,
        init_sequence: &'static [InitStep],
    ) -> Self {
        debug!("creating new St7628 instance");
        St7628 {
            interface: BitBangInterface::new(cs, sda, scl, rst),
            viewport: Viewport::default(),
            init_sequence,
        }
    }

    /// Current geometry
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Visible width for the current rotation
    pub fn width(&self) -> u8 {
        self.viewport.width()
    }

    /// Visible height for the current rotation
    pub fn height(&self) -> u8 {
        self.viewport.height()
    }

    /// Current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.viewport.rotation()
    }

    /// Shift every window by `col` columns and `row` rows of controller RAM,
    /// for panels whose glass does not start at RAM address 0.
    pub fn set_offset(&mut self, col: u8, row: u8) {
        self.viewport.set_offset(col, row);
    }

    /// Destroy the driver and give back the pins.
    pub fn release(self) -> (CS, SDA, SCL, Option<RST>) {
        self.interface.release()
    }
}

impl<CS, SDA, SCL, RST> St7628<CS, SDA, SCL, RST>
where
    CS: OutputPin,
    SDA: OutputPin,
    SCL: OutputPin,
    RST: OutputPin,
{
    /// Reset the controller and run the init sequence.
    ///
    /// Blocks for at least 2 seconds with a reset line bound (three 500 ms
    /// reset holds plus the sequence's own waits).
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        debug!("initializing st7628");
        self.interface.idle()?;
        self.interface.hard_reset(delay)?;
        let sequence = self.init_sequence;
        self.run_init_sequence(sequence, delay)?;
        debug!("init sequence complete");
        Ok(())
    }

    /// Issue every step of `sequence` in order, waiting after each as asked.
    pub fn run_init_sequence(
        &mut self,
        sequence: &[InitStep],
        delay: &mut impl DelayNs,
    ) -> Result<(), DisplayError> {
        for step in sequence {
            debug!("init step: {:?}", step);
            self.interface.cmd_with_data(step.cmd, step.args)?;
            let ms = step.delay.as_ms();
            if ms > 0 {
                delay.delay_ms(ms);
            }
        }
        Ok(())
    }

    /// Select the RAM rectangle `(x0, y0)..=(x1, y1)` and start a memory
    /// write. Coordinates are not checked against the panel.
    pub fn set_address_window(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
    ) -> Result<(), DisplayError> {
        let col = self.viewport.col_offset();
        let row = self.viewport.row_offset();
        self.interface.cmd_with_data(
            Cmd::COLUMN_ADDR_SET,
            &[x0.wrapping_add(col), x1.wrapping_add(col)],
        )?;
        self.interface.cmd_with_data(
            Cmd::ROW_ADDR_SET,
            &[y0.wrapping_add(row), y1.wrapping_add(row)],
        )?;
        self.interface.cmd(Cmd::MEMORY_WRITE)
    }

    /// Write one color into the window opened by [`Self::set_address_window`].
    pub fn push_color(&mut self, color: u16) -> Result<(), DisplayError> {
        self.interface.data_x_times(color, 1)
    }

    /// Set one pixel; off-screen coordinates are ignored.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: u16) -> Result<(), DisplayError> {
        if !self.viewport.contains(x, y) {
            return Ok(());
        }
        self.set_address_window(x as u8, y as u8, x as u8, y as u8)?;
        self.push_color(color)
    }

    /// Draw `len` pixels to the right of `(x, y)`, clipped to the width.
    pub fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        if !self.viewport.contains(x, y) || len <= 0 {
            return Ok(());
        }
        let len = len.min(i32::from(self.width()) - x);
        self.set_address_window(x as u8, y as u8, (x + len - 1) as u8, y as u8)?;
        self.interface.data_x_times(color, len as u32)
    }

    /// Draw `len` pixels below `(x, y)`, clipped to the height.
    pub fn draw_fast_vline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        if !self.viewport.contains(x, y) || len <= 0 {
            return Ok(());
        }
        let len = len.min(i32::from(self.height()) - y);
        self.set_address_window(x as u8, y as u8, x as u8, (y + len - 1) as u8)?;
        self.interface.data_x_times(color, len as u32)
    }

    /// Fill a rectangle anchored at `(x, y)`.
    ///
    /// The window spans `(x, y)..=(x + w, y + h)`, one column and one row past
    /// the nominal size, and `(w + 1) * (h + 1)` colors are streamed. On the
    /// full screen this covers the controller's whole 98x70 RAM.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        if !self.viewport.contains(x, y) || w <= 0 || h <= 0 {
            return Ok(());
        }
        let w = w.min(i32::from(self.width()) - x);
        let h = h.min(i32::from(self.height()) - y);
        self.set_address_window(x as u8, y as u8, (x + w) as u8, (y + h) as u8)?;
        self.interface.data_x_times(color, ((w + 1) * (h + 1)) as u32)
    }

    /// Fill the whole screen.
    pub fn fill_screen(&mut self, color: u16) -> Result<(), DisplayError> {
        let (w, h) = (i32::from(self.width()), i32::from(self.height()));
        self.fill_rect(0, 0, w, h, color)
    }

    /// Set the orientation and swap width/height for 90 and 270 degrees.
    pub fn set_display_rotation(&mut self, rotation: DisplayRotation) -> Result<(), DisplayError> {
        debug!("setting rotation to {:?}", rotation);
        self.interface
            .cmd_with_data(Cmd::MEMORY_ACCESS_CTRL, &[rotation.madctl()])?;
        self.viewport.set_rotation(rotation);
        Ok(())
    }

    /// Rotate by `turns` quarter turns, modulo 4.
    pub fn set_rotation(&mut self, turns: u8) -> Result<(), DisplayError> {
        self.set_display_rotation(DisplayRotation::from(turns))
    }

    /// Turn color inversion on or off.
    pub fn invert_display(&mut self, invert: bool) -> Result<(), DisplayError> {
        self.interface.cmd(if invert {
            Cmd::INVERT_ON
        } else {
            Cmd::INVERT_OFF
        })
    }

    /// Set the electronic volume (contrast).
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.interface
            .cmd_with_data(Cmd::WRITE_CONTRAST, &[contrast])
    }

    /// Blank or show the panel without touching RAM.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.interface.cmd(if on {
            Cmd::DISPLAY_ON
        } else {
            Cmd::DISPLAY_OFF
        })
    }

    /// Put the controller into sleep mode
    pub fn sleep(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        debug!("putting st7628 to sleep");
        self.interface.cmd(Cmd::SLEEP_IN)?;
        delay.delay_ms(SLEEP_DELAY_MS);
        Ok(())
    }

    /// Leave sleep mode
    pub fn wake(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        debug!("waking st7628");
        self.interface.cmd(Cmd::SLEEP_OUT)?;
        delay.delay_ms(SLEEP_DELAY_MS);
        Ok(())
    }
}

impl<CS, SDA, SCL, RST> Primitives for St7628<CS, SDA, SCL, RST>
where
    CS: OutputPin,
    SDA: OutputPin,
    SCL: OutputPin,
    RST: OutputPin,
{
    type Error = DisplayError;

    fn width(&self) -> u8 {
        self.viewport.width()
    }

    fn height(&self) -> u8 {
        self.viewport.height()
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: u16) -> Result<(), DisplayError> {
        St7628::draw_pixel(self, x, y, color)
    }

    fn draw_fast_hline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        St7628::draw_fast_hline(self, x, y, len, color)
    }

    fn draw_fast_vline(
        &mut self,
        x: i32,
        y: i32,
        len: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        St7628::draw_fast_vline(self, x, y, len, color)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        St7628::fill_rect(self, x, y, w, h, color)
    }

    fn fill_screen(&mut self, color: u16) -> Result<(), DisplayError> {
        St7628::fill_screen(self, color)
    }

    fn set_rotation(&mut self, turns: u8) -> Result<(), DisplayError> {
        St7628::set_rotation(self, turns)
    }

    fn invert_display(&mut self, invert: bool) -> Result<(), DisplayError> {
        St7628::invert_display(self, invert)
    }
}
