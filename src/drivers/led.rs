//! LED driver on top of a single GPIO line.
use crate::{
    error::Error,
    hal::{
        gpio::{Level, Line, OutputPin},
        led::Switch,
    },
};

/// Solid (non-blinking) monochrome LED
///
/// Implements Switch. Writes that would not change the known state of
/// the line are skipped.
///
/// # Example
/// ```
/// # use blinker_lib::drivers::led::*;
/// # use blinker_lib::error::Error;
/// # use blinker_lib::hal::{gpio::{Line, OutputPin}, led::*};
/// # #[derive(Default)]
/// # struct Pin { high: bool }
/// # impl OutputPin for Pin {
/// #     fn set_low(&mut self) -> Result<(), Error> { self.high = false; Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Error> { self.high = true; Ok(()) }
/// # }
/// # impl Line for Pin { fn release(&mut self) {} }
/// let mut led = MonochromeLed::new(Pin::default(), Logic::Inverted);
///
/// led.on().unwrap();
/// assert!(led.is_on());
/// led.off().unwrap();
/// assert!(!led.is_on());
/// ```
pub struct MonochromeLed<Pin: Line> {
    pin: Pin,
    state: State,
    logic: Logic,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Logic {
    /// Logical high equals "on"
    Direct,
    /// Logical high equals "off"
    Inverted,
}

impl Logic {
    /// Line level that keeps the LED dark.
    pub fn off_level(self) -> Level {
        match self {
            Logic::Direct => Level::Low,
            Logic::Inverted => Level::High,
        }
    }
}

// What we last managed to drive the line to. A failed write leaves
// the line in an unknown state.
#[derive(Copy, Clone, Debug, PartialEq)]
enum State {
    On,
    Off,
    Unknown,
}

// Extension trait to ensure LED pins are correctly
// operated based on the led's direct or inverted logic
trait LedPin: OutputPin {
    fn off(&mut self, logic: Logic) -> Result<(), Error> {
        if let Logic::Direct = logic {
            self.set_low()
        } else {
            self.set_high()
        }
    }

    fn on(&mut self, logic: Logic) -> Result<(), Error> {
        if let Logic::Direct = logic {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}

// Blanket implementation of LedPin for all output pins
impl<Pin: OutputPin> LedPin for Pin {}

impl<Pin: Line> MonochromeLed<Pin> {
    /// Takes ownership of the line. Its level is unknown until the
    /// first write, so the first `on` or `off` always reaches the pin.
    pub fn new(pin: Pin, logic: Logic) -> Self { Self { pin, state: State::Unknown, logic } }

    pub fn is_on(&self) -> bool { self.state == State::On }

    /// Hands the underlying line back to its owner. The LED should be
    /// switched off first.
    pub fn release(&mut self) { self.pin.release(); }
}

impl<Pin: Line> Switch for MonochromeLed<Pin> {
    fn on(&mut self) -> Result<(), Error> {
        if self.state != State::On {
            self.state = State::Unknown;
            LedPin::on(&mut self.pin, self.logic)?;
        }
        self.state = State::On;
        Ok(())
    }

    fn off(&mut self) -> Result<(), Error> {
        if self.state != State::Off {
            self.state = State::Unknown;
            LedPin::off(&mut self.pin, self.logic)?;
        }
        self.state = State::Off;
        Ok(())
    }
}
