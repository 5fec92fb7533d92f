//! Test doubles for the hardware abstraction layer.
pub mod capture;
pub mod error;
pub mod gpio;
pub mod time;
