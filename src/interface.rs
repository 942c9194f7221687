//! Display interface using bit-banged 9-bit serial
//!
//! The ST7628 listens on a 3-wire bus where each transfer is 9 bits long: a
//! leading command/data select bit followed by the 8 value bits, MSB first.
//! SDA is sampled on the rising edge of SCL while CS is low.
pub use display_interface::DisplayError;

use core::convert::Infallible;
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};

use crate::color;

const RESET_DELAY_MS: u32 = 500;

/// Placeholder for boards where the controller reset line is not wired to a
/// GPIO, e.g. when it is tied to the platform reset.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Fast digital output used for the clock line.
pub trait Pulse: OutputPin {
    /// Drive the line high, then low again.
    fn pulse(&mut self) -> Result<(), Self::Error> {
        self.set_high()?;
        self.set_low()
    }
}

impl<P: OutputPin> Pulse for P {}

/// The connection to the controller: chip select, serial data, serial clock
/// and an optional reset line.
pub struct BitBangInterface<CS, SDA, SCL, RST> {
    /// Chip select, active low
    cs: CS,
    /// Serial data; during the first clock of a frame low selects command, high data
    sda: SDA,
    /// Serial clock, idles low
    scl: SCL,
    /// Pin for resetting
    rst: Option<RST>,
}

impl<CS, SDA, SCL, RST> BitBangInterface<CS, SDA, SCL, RST> {
    /// Bundle the pins. No line is touched until [`Self::idle`] or the first frame.
    pub fn new(cs: CS, sda: SDA, scl: SCL, rst: Option<RST>) -> Self {
        BitBangInterface { cs, sda, scl, rst }
    }

    /// Give the pins back.
    pub fn release(self) -> (CS, SDA, SCL, Option<RST>) {
        (self.cs, self.sda, self.scl, self.rst)
    }
}

impl<CS, SDA, SCL, RST> BitBangInterface<CS, SDA, SCL, RST>
where
    CS: OutputPin,
    SDA: OutputPin,
    SCL: OutputPin,
    RST: OutputPin,
{
    /// Put the bus in its resting state: CS released, SCL and SDA low.
    pub(crate) fn idle(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::CSError)?;
        self.scl.set_low().map_err(|_| DisplayError::BusWriteError)?;
        self.sda.set_low().map_err(|_| DisplayError::BusWriteError)
    }

    /// Pulse the reset line high, low, high with 500 ms holds.
    ///
    /// Does nothing when no reset pin is bound.
    pub(crate) fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_DELAY_MS);
        rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_DELAY_MS);
        rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Clock out one byte, MSB first. Leaves SCL low and SDA at the last bit.
    fn send_byte(&mut self, value: u8) -> Result<(), DisplayError> {
        let mut bit = 0x80u8;
        while bit != 0 {
            let level = if value & bit != 0 {
                self.sda.set_high()
            } else {
                self.sda.set_low()
            };
            level.map_err(|_| DisplayError::BusWriteError)?;
            self.scl.pulse().map_err(|_| DisplayError::BusWriteError)?;
            bit >>= 1;
        }
        Ok(())
    }

    /// One 9-bit frame with chip select held only for its duration.
    fn frame(&mut self, is_data: bool, value: u8) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        let select = if is_data {
            self.sda.set_high()
        } else {
            self.sda.set_low()
        };
        select.map_err(|_| DisplayError::BusWriteError)?;
        self.scl.pulse().map_err(|_| DisplayError::BusWriteError)?;
        self.send_byte(value)?;
        self.cs.set_high().map_err(|_| DisplayError::CSError)
    }

    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        self.frame(false, command)
    }

    /// Basic function for sending a single data byte
    pub(crate) fn data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.frame(true, value)
    }

    /// Send a command followed by each argument as its own data frame.
    pub(crate) fn cmd_with_data(&mut self, command: u8, args: &[u8]) -> Result<(), DisplayError> {
        self.cmd(command)?;
        for &arg in args {
            self.data(arg)?;
        }
        Ok(())
    }

    /// Send the same 16-bit color `repetitions` times, high byte first.
    /// Used for filling an open address window.
    pub(crate) fn data_x_times(
        &mut self,
        color: u16,
        repetitions: u32,
    ) -> Result<(), DisplayError> {
        let (hi, lo) = color::to_bytes(color);
        for _ in 0..repetitions {
            self.data(hi)?;
            self.data(lo)?;
        }
        Ok(())
    }
}
