//! Raspberry Pi GPIO through `rppal`.
//!
//! `rppal` uses BCM numbering, so `--pin 17` is BCM GPIO 17 (physical
//! pin 11 on the 40-pin header).
use crate::{
    error::Error,
    hal::gpio::{Gpio, Level, Line, OutputPin},
};
use rppal::gpio;

/// Hands out `rppal` output lines.
#[derive(Debug, Default)]
pub struct RpiGpio;

pub struct RpiLine {
    number: u8,
    pin: Option<gpio::OutputPin>,
}

impl RpiGpio {
    pub fn new() -> Self { Self }
}

fn acquisition_error(pin: u8, error: gpio::Error) -> Error {
    match error {
        gpio::Error::PinUsed(_) => Error::PinUnavailable(pin),
        other => Error::HardwareInit(format!("GPIO{}: {}", pin, other)),
    }
}

impl Gpio for RpiGpio {
    type Line = RpiLine;

    fn acquire(&mut self, pin: u8, initial: Level) -> Result<RpiLine, Error> {
        let controller = gpio::Gpio::new().map_err(|e| acquisition_error(pin, e))?;
        let input = controller.get(pin).map_err(|e| acquisition_error(pin, e))?;
        let output = match initial {
            Level::Low => input.into_output_low(),
            Level::High => input.into_output_high(),
        };
        log::debug!("GPIO{} acquired as output ({:?})", pin, initial);
        Ok(RpiLine { number: pin, pin: Some(output) })
    }
}

impl RpiLine {
    fn output(&mut self) -> Result<&mut gpio::OutputPin, Error> {
        let number = self.number;
        self.pin.as_mut().ok_or_else(|| Error::Device(format!("GPIO{} was already released", number)))
    }
}

impl OutputPin for RpiLine {
    fn set_low(&mut self) -> Result<(), Error> {
        self.output()?.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Error> {
        self.output()?.set_high();
        Ok(())
    }
}

impl Line for RpiLine {
    fn release(&mut self) {
        // Dropping the rppal pin restores its previous mode
        if self.pin.take().is_some() {
            log::debug!("GPIO{} released", self.number);
        }
    }
}
