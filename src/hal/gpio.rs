//! # Simple GPIO interface
//!
//! The whole hardware boundary of the project: a GPIO controller hands
//! out exclusive lines, a line can be driven high or low, and a line is
//! eventually released back.

use crate::error::Error;

/// Electrical level of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Interface to a writable pin.
pub trait OutputPin {
    fn set_low(&mut self) -> Result<(), Error>;
    fn set_high(&mut self) -> Result<(), Error>;
}

/// An output pin exclusively owned by its holder until released.
///
/// Releasing more than once must be harmless, but callers are expected
/// to route release through a single teardown path.
pub trait Line: OutputPin {
    fn release(&mut self);
}

/// Source of GPIO lines.
pub trait Gpio {
    type Line: Line;

    /// Claims exclusive access to `pin` as an output driven at `initial`
    /// from the moment it is configured.
    ///
    /// Fails with [`Error::PinUnavailable`] if another owner holds the
    /// line, and with [`Error::HardwareInit`] for any other reason.
    fn acquire(&mut self, pin: u8, initial: Level) -> Result<Self::Line, Error>;
}
