//! Recording pins and delay for unit tests.
//!
//! Every pin write and delay lands in one shared [`Trace`]. [`decode`] turns
//! the raw edges back into frames the way the controller samples them.
use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Cs,
    Sda,
    Scl,
    Rst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    DelayMs(u32),
}

/// Bus-level view of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bus {
    Command(u8),
    Data(u8),
    Reset(bool),
    DelayMs(u32),
}

#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn pin(&self, line: Line) -> MockPin {
        MockPin {
            line,
            trace: self.clone(),
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay {
            trace: self.clone(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn bus(&self) -> Vec<Bus> {
        decode(&self.events())
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

pub struct MockPin {
    line: Line,
    trace: Trace,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::Set(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::Set(self.line, true));
        Ok(())
    }
}

pub struct MockDelay {
    trace: Trace,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.push(Event::DelayMs(ms));
    }
}

/// Reassemble 9-bit frames: SDA is sampled on each rising SCL edge while CS
/// is low, and a frame ends when CS goes high.
pub fn decode(events: &[Event]) -> Vec<Bus> {
    let mut out = Vec::new();
    let mut selected = false;
    let mut sda = false;
    let mut scl = false;
    let mut bits = 0u16;
    let mut count = 0u8;

    for event in events {
        match *event {
            Event::Set(Line::Cs, false) => {
                selected = true;
                bits = 0;
                count = 0;
            }
            Event::Set(Line::Cs, true) => {
                if selected {
                    assert_eq!(count, 9, "frame ended after {count} bits");
                    let value = bits as u8;
                    out.push(if bits & 0x100 != 0 {
                        Bus::Data(value)
                    } else {
                        Bus::Command(value)
                    });
                }
                selected = false;
            }
            Event::Set(Line::Sda, level) => sda = level,
            Event::Set(Line::Scl, level) => {
                if level && !scl && selected {
                    bits = (bits << 1) | u16::from(sda);
                    count += 1;
                }
                scl = level;
            }
            Event::Set(Line::Rst, level) => out.push(Bus::Reset(level)),
            Event::DelayMs(ms) => out.push(Bus::DelayMs(ms)),
        }
    }
    assert!(!selected, "trace ended with chip select asserted");
    out
}
