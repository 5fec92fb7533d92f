//! Blink controller.
//!
//! Owns one GPIO line for its whole life: acquired at setup, blinked by
//! [`Blinker::run`], switched off and released exactly once when the
//! [`Handle`] drops, whichever way the loop ended.
use crate::{
    configuration::Configuration,
    drivers::{
        interrupt::Running,
        led::{Logic, MonochromeLed},
    },
    error::Error,
    hal::{
        gpio::{Gpio, Line},
        led::Switch,
        time::Delay,
    },
    utilities::guard::Guard,
};

/// Exclusive ownership of an LED line. Dropping it runs [`teardown`].
pub type Handle<L> = Guard<MonochromeLed<L>, fn(&mut MonochromeLed<L>)>;

/// Why a blink loop stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Stop {
    /// The configured number of cycles was reached.
    Completed,
    /// The running flag was lowered.
    Interrupted,
    /// A hardware write failed mid-phase.
    Faulted(Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub blinks: u64,
    pub stop: Stop,
}

/// Acquires `pin` at its dark level and drives its LED off.
///
/// Once the line is acquired it is guarded, so a failure to drive it
/// off still releases it.
pub fn setup<G: Gpio>(gpio: &mut G, pin: u8, logic: Logic) -> Result<Handle<G::Line>, Error> {
    let line = gpio.acquire(pin, logic.off_level())?;
    let mut handle: Handle<G::Line> = Guard::new(
        MonochromeLed::new(line, logic),
        teardown::<G::Line> as fn(&mut MonochromeLed<G::Line>),
    );
    handle.off()?;
    log::debug!("GPIO{} ready ({:?} logic)", pin, logic);
    Ok(handle)
}

/// Switches the LED off unless it is known to be off already, then
/// releases the line. Runs when a [`Handle`] drops.
pub fn teardown<L: Line>(led: &mut MonochromeLed<L>) {
    if let Err(error) = led.off() {
        log::warn!("Could not switch the LED off before release: {}", error);
    }
    led.release();
    log::debug!("GPIO line released");
}

pub struct Blinker {
    configuration: Configuration,
    running: Running,
    blinks: u64,
}

impl Blinker {
    pub fn new(configuration: Configuration, running: Running) -> Self {
        Self { configuration, running, blinks: 0 }
    }

    pub fn setup<G: Gpio>(&self, gpio: &mut G) -> Result<Handle<G::Line>, Error> {
        setup(gpio, self.configuration.pin(), self.configuration.logic())
    }

    /// Blinks until the configured count is reached, the running flag
    /// is lowered, or a write fails. Never returns an error: a failed
    /// write is logged and reported through the outcome.
    pub fn run<L: Line, D: Delay>(&mut self, led: &mut MonochromeLed<L>, delay: &mut D) -> Outcome {
        let stop = loop {
            if let Some(count) = self.configuration.count() {
                if self.blinks >= count {
                    break Stop::Completed;
                }
            }
            if !self.running.is_running() {
                break Stop::Interrupted;
            }
            match self.cycle(led, delay) {
                Ok(true) => (),
                Ok(false) => break Stop::Interrupted,
                Err(error) => {
                    log::error!("Blink cycle {} failed: {}", self.blinks, error);
                    break Stop::Faulted(error);
                }
            }
        };
        Outcome { blinks: self.blinks, stop }
    }

    // One ON phase and one OFF phase. Returns false if the running flag
    // dropped during the ON phase, in which case the OFF phase is left
    // to teardown.
    fn cycle<L: Line, D: Delay>(
        &mut self,
        led: &mut MonochromeLed<L>,
        delay: &mut D,
    ) -> Result<bool, Error> {
        self.blinks += 1;
        let interval = self.configuration.interval();

        led.on()?;
        log::info!("Blink #{}: LED ON", self.blinks);
        delay.wait(interval);

        if !self.running.is_running() {
            return Ok(false);
        }

        led.off()?;
        log::info!("Blink #{}: LED OFF", self.blinks);
        delay.wait(interval);
        Ok(true)
    }

    /// Full lifecycle: setup, run, teardown.
    ///
    /// Only setup failures are returned as errors; by then nothing was
    /// blinked and the line (if it was acquired at all) is released.
    pub fn execute<G: Gpio, D: Delay>(&mut self, gpio: &mut G, delay: &mut D) -> Result<Outcome, Error> {
        let mut handle = self.setup(gpio)?;
        match self.configuration.count() {
            Some(count) => log::info!(
                "Blinking GPIO{} {} times every {:?} (Ctrl+C to stop)",
                self.configuration.pin(),
                count,
                self.configuration.interval()
            ),
            None => log::info!(
                "Blinking GPIO{} every {:?} (Ctrl+C to stop)",
                self.configuration.pin(),
                self.configuration.interval()
            ),
        }

        let outcome = self.run(&mut *handle, delay);
        handle.release();

        match &outcome.stop {
            Stop::Completed => log::info!("Finished after {} blinks", outcome.blinks),
            Stop::Interrupted => log::info!("Blinking stopped after {} blinks", outcome.blinks),
            Stop::Faulted(_) => log::warn!("Blinking aborted after {} blinks", outcome.blinks),
        }
        Ok(outcome)
    }
}
