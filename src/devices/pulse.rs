//! Single pulse: LED on for a while, off for a while, done.
use super::blinker::{setup, Outcome, Stop};
use crate::{
    configuration::PulseConfiguration,
    drivers::{interrupt::Running, led::MonochromeLed},
    error::Error,
    hal::{
        gpio::{Gpio, Line},
        led::Switch,
        time::Delay,
    },
};

pub struct Pulse {
    configuration: PulseConfiguration,
    running: Running,
}

impl Pulse {
    pub fn new(configuration: PulseConfiguration, running: Running) -> Self {
        Self { configuration, running }
    }

    /// Same stopping rules as a single blink cycle: the OFF phase is
    /// skipped if the running flag drops during the ON phase, and a
    /// failed write ends the pulse without being returned.
    pub fn run<L: Line, D: Delay>(&self, led: &mut MonochromeLed<L>, delay: &mut D) -> Outcome {
        let mut blinks = 0;
        let stop = match self.phases(led, delay, &mut blinks) {
            Ok(stop) => stop,
            Err(error) => {
                log::error!("Pulse failed: {}", error);
                Stop::Faulted(error)
            }
        };
        Outcome { blinks, stop }
    }

    // A pulse counts as one blink as soon as the LED has been lit.
    fn phases<L: Line, D: Delay>(
        &self,
        led: &mut MonochromeLed<L>,
        delay: &mut D,
        blinks: &mut u64,
    ) -> Result<Stop, Error> {
        if !self.running.is_running() {
            return Ok(Stop::Interrupted);
        }

        led.on()?;
        *blinks = 1;
        log::info!("LED ON for {:?}", self.configuration.on_time());
        delay.wait(self.configuration.on_time());

        if !self.running.is_running() {
            return Ok(Stop::Interrupted);
        }

        led.off()?;
        log::info!("LED OFF for {:?}", self.configuration.off_time());
        delay.wait(self.configuration.off_time());
        Ok(Stop::Completed)
    }

    pub fn execute<G: Gpio, D: Delay>(&self, gpio: &mut G, delay: &mut D) -> Result<Outcome, Error> {
        let mut handle = setup(gpio, self.configuration.pin(), self.configuration.logic())?;
        let outcome = self.run(&mut *handle, delay);
        handle.release();
        log::info!("Pulse finished");
        Ok(outcome)
    }
}
