//! Hardware Abstraction Layer, containing interfaces
//! for low level drivers.

pub mod gpio;
pub mod led;
pub mod time;

#[cfg(test)]
pub mod doubles;
