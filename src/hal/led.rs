//! LED interfaces

use crate::error::Error;

/// Interface to a LED's direct on/off operations.
pub trait Switch {
    fn on(&mut self) -> Result<(), Error>;
    fn off(&mut self) -> Result<(), Error>;
}
