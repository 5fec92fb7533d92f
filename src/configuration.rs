//! Blinker configuration.
//!
//! Values come from three layers: built-in defaults, an optional RON
//! file, and command line flags, each overriding the previous one. The
//! merged values are validated once into an immutable [`Configuration`].
//!
//! A configuration file looks like this (every field is optional):
//! ```ron
//! #![enable(implicit_some)]
//! (
//!     pin: 22,
//!     interval: 0.5,
//!     count: 10,
//!     active_low: false,
//! )
//! ```
use crate::{drivers::led::Logic, error::Error, hal::time};
use anyhow::Context;
use serde::Deserialize;
use std::{fs, ops::RangeInclusive, path::Path, time::Duration};

pub const DEFAULT_PIN: i64 = 17;
pub const DEFAULT_INTERVAL: f64 = 1.0;
pub const DEFAULT_ON_TIME: f64 = 3.0;
pub const DEFAULT_OFF_TIME: f64 = 1.0;
pub const PIN_RANGE: RangeInclusive<i64> = 1..=40;

/// Raw, unvalidated settings from one configuration layer.
///
/// Numbers are kept wide and signed so out-of-range input is reported
/// as a range error rather than a parse error.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub pin: Option<i64>,
    pub interval: Option<f64>,
    pub count: Option<i64>,
    pub active_low: Option<bool>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> { Ok(ron::de::from_str(text)?) }

    /// Fills every field missing from `self` with the one in `fallback`.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            pin: self.pin.or(fallback.pin),
            interval: self.interval.or(fallback.interval),
            count: self.count.or(fallback.count),
            active_low: self.active_low.or(fallback.active_low),
        }
    }
}

/// Validated blink configuration. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pin: u8,
    interval: Duration,
    count: Option<u64>,
    logic: Logic,
}

impl Configuration {
    pub fn new(pin: i64, interval: f64, count: Option<i64>, logic: Logic) -> Result<Self, Error> {
        let pin = validate_pin(pin)?;
        let interval = validate_seconds("interval", interval)?;
        let count = match count {
            Some(count) if count <= 0 => {
                return Err(Error::Configuration(format!(
                    "count must be greater than 0 (got {})",
                    count
                )))
            }
            Some(count) => Some(count as u64),
            None => None,
        };
        Ok(Self { pin, interval, count, logic })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        Self::new(
            settings.pin.unwrap_or(DEFAULT_PIN),
            settings.interval.unwrap_or(DEFAULT_INTERVAL),
            settings.count,
            logic(settings.active_low.unwrap_or(false)),
        )
    }

    pub fn pin(&self) -> u8 { self.pin }
    pub fn interval(&self) -> Duration { self.interval }
    pub fn count(&self) -> Option<u64> { self.count }
    pub fn logic(&self) -> Logic { self.logic }
}

/// Validated single-pulse configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseConfiguration {
    pin: u8,
    on_time: Duration,
    off_time: Duration,
    logic: Logic,
}

impl PulseConfiguration {
    pub fn new(pin: i64, on_time: f64, off_time: f64, logic: Logic) -> Result<Self, Error> {
        Ok(Self {
            pin: validate_pin(pin)?,
            on_time: validate_seconds("on-time", on_time)?,
            off_time: validate_seconds("off-time", off_time)?,
            logic,
        })
    }

    pub fn pin(&self) -> u8 { self.pin }
    pub fn on_time(&self) -> Duration { self.on_time }
    pub fn off_time(&self) -> Duration { self.off_time }
    pub fn logic(&self) -> Logic { self.logic }
}

pub fn logic(active_low: bool) -> Logic {
    if active_low {
        Logic::Inverted
    } else {
        Logic::Direct
    }
}

fn validate_pin(pin: i64) -> Result<u8, Error> {
    if PIN_RANGE.contains(&pin) {
        Ok(pin as u8)
    } else {
        Err(Error::Configuration(format!(
            "pin must be between {} and {} (got {})",
            PIN_RANGE.start(),
            PIN_RANGE.end(),
            pin
        )))
    }
}

fn validate_seconds(name: &str, value: f64) -> Result<Duration, Error> {
    time::seconds(value).ok_or_else(|| {
        Error::Configuration(format!("{} must be a positive number of seconds (got {})", name, value))
    })
}
