//! Driver implementations for the supported platforms, plus the
//! process level plumbing (sleeping, interrupts) the devices rely on.

pub mod interrupt;
pub mod led;
pub mod rpi;
pub mod sleep;
