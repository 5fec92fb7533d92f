use super::error::FakeError;
use crate::{
    error::Error,
    hal::gpio::{Gpio, Level, Line, OutputPin},
};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Default)]
struct PinRecord {
    state: bool,
    changes: Vec<bool>,
    writes: usize,
    releases: usize,
    fail_from_write: Option<usize>,
}

/// Recording pin. Clones share the same record, so a test can keep one
/// copy while the code under test owns another.
#[derive(Clone, Debug, Default)]
pub struct MockPin {
    record: Rc<RefCell<PinRecord>>,
}

impl MockPin {
    /// A pin whose writes start failing once `writes` of them succeeded.
    pub fn failing_after(writes: usize) -> Self {
        let pin = Self::default();
        pin.record.borrow_mut().fail_from_write = Some(writes);
        pin
    }

    pub fn is_high(&self) -> bool { self.record.borrow().state }
    pub fn is_low(&self) -> bool { !self.record.borrow().state }
    pub fn changes(&self) -> Vec<bool> { self.record.borrow().changes.clone() }
    pub fn releases(&self) -> usize { self.record.borrow().releases }

    // Level the line is configured with on acquisition. Not a write.
    fn preset(&self, level: Level) { self.record.borrow_mut().state = level == Level::High; }

    fn write(&mut self, level: bool) -> Result<(), Error> {
        let mut record = self.record.borrow_mut();
        if record.fail_from_write.map_or(false, |limit| record.writes >= limit) {
            return Err(FakeError.into());
        }
        record.writes += 1;
        record.state = level;
        record.changes.push(level);
        Ok(())
    }
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Error> { self.write(false) }
    fn set_high(&mut self) -> Result<(), Error> { self.write(true) }
}

impl Line for MockPin {
    fn release(&mut self) { self.record.borrow_mut().releases += 1; }
}

/// GPIO controller that hands out clones of a single mock pin, or fails
/// every acquisition with a scripted error.
#[derive(Debug, Default)]
pub struct MockGpio {
    pub pin: MockPin,
    pub acquisitions: Vec<u8>,
    pub initial_levels: Vec<Level>,
    pub failure: Option<Error>,
}

impl MockGpio {
    pub fn new(pin: MockPin) -> Self { Self { pin, ..Default::default() } }
    pub fn failing(error: Error) -> Self { Self { failure: Some(error), ..Default::default() } }
}

impl Gpio for MockGpio {
    type Line = MockPin;

    fn acquire(&mut self, pin: u8, initial: Level) -> Result<MockPin, Error> {
        self.acquisitions.push(pin);
        self.initial_levels.push(initial);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => {
                self.pin.preset(initial);
                Ok(self.pin.clone())
            }
        }
    }
}
