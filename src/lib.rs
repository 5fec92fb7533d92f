//! # Blinker Library
//!
//! This crate contains all functionality for the
//! GPIO LED blinker in library form.

pub mod utilities {
    pub mod guard;
    pub mod logger;
}

pub mod configuration;
pub mod devices;
pub mod drivers;
pub mod error;
pub mod hal;
