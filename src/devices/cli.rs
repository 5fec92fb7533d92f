//! Command line front ends for the `blinker` and `pulse` binaries.
//!
//! Argument syntax (unknown flags, missing values, `--help`) is handled
//! by clap, which exits on its own. Values are parsed and validated here,
//! before any hardware is touched.
use super::{blinker::Blinker, pulse::Pulse};
use crate::{
    configuration::{self, Configuration, PulseConfiguration, Settings},
    drivers::interrupt::Running,
    error::{Error, ReportOnError},
    hal::{gpio::Gpio, time::Delay},
};
use clap::{App, AppSettings, Arg, ArgMatches};
use std::{fmt::Display, path::PathBuf, str::FromStr};

fn pin_arg() -> Arg<'static, 'static> {
    Arg::with_name("pin")
        .long("pin")
        .takes_value(true)
        .value_name("PIN")
        .help("GPIO line driving the LED, BCM numbering, 1 to 40 [default: 17]")
}

fn active_low_arg() -> Arg<'static, 'static> {
    Arg::with_name("active-low")
        .long("active-low")
        .help("The LED lights when the line is low")
}

fn verbose_arg() -> Arg<'static, 'static> {
    Arg::with_name("verbose")
        .short("v")
        .long("verbose")
        .multiple(true)
        .help("Log more detail (repeat for even more)")
}

pub fn blink_app() -> App<'static, 'static> {
    App::new("blinker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Blinks an LED attached to a GPIO line until the count is reached or Ctrl+C")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(pin_arg())
        .arg(
            Arg::with_name("interval")
                .long("interval")
                .takes_value(true)
                .value_name("SECONDS")
                .help("Time the LED stays on, and then off, in each cycle [default: 1.0]"),
        )
        .arg(
            Arg::with_name("count")
                .long("count")
                .takes_value(true)
                .value_name("CYCLES")
                .help("Number of on/off cycles [default: blink until interrupted]"),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("RON file providing defaults for the options above"),
        )
        .arg(active_low_arg())
        .arg(verbose_arg())
}

pub fn pulse_app() -> App<'static, 'static> {
    App::new("pulse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Switches an LED attached to a GPIO line on once, then off, then exits")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(pin_arg())
        .arg(
            Arg::with_name("on-time")
                .long("on-time")
                .takes_value(true)
                .value_name("SECONDS")
                .help("How long the LED stays on [default: 3.0]"),
        )
        .arg(
            Arg::with_name("off-time")
                .long("off-time")
                .takes_value(true)
                .value_name("SECONDS")
                .help("How long to hold the LED off before exiting [default: 1.0]"),
        )
        .arg(active_low_arg())
        .arg(verbose_arg())
}

fn value<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .value_of(name)
        .map(|text| {
            text.trim().parse::<T>().map_err(|e| {
                Error::Configuration(format!("invalid value '{}' for --{}: {}", text, name, e))
            })
        })
        .transpose()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlinkArguments {
    pub settings: Settings,
    pub config_file: Option<PathBuf>,
    pub verbosity: u64,
}

impl BlinkArguments {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        Ok(Self {
            settings: Settings {
                pin: value(matches, "pin")?,
                interval: value(matches, "interval")?,
                count: value(matches, "count")?,
                active_low: matches.is_present("active-low").then(|| true),
            },
            config_file: matches.value_of("config").map(PathBuf::from),
            verbosity: matches.occurrences_of("verbose"),
        })
    }

    /// Merges flags over the configuration file (if any) and validates.
    pub fn configuration(&self) -> Result<Configuration, Error> {
        let file = match &self.config_file {
            Some(path) => {
                Settings::load(path).map_err(|e| Error::Configuration(format!("{:#}", e)))?
            }
            None => Settings::default(),
        };
        Configuration::from_settings(&self.settings.clone().or(file))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PulseArguments {
    pub pin: Option<i64>,
    pub on_time: Option<f64>,
    pub off_time: Option<f64>,
    pub active_low: bool,
    pub verbosity: u64,
}

impl PulseArguments {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        Ok(Self {
            pin: value(matches, "pin")?,
            on_time: value(matches, "on-time")?,
            off_time: value(matches, "off-time")?,
            active_low: matches.is_present("active-low"),
            verbosity: matches.occurrences_of("verbose"),
        })
    }

    pub fn configuration(&self) -> Result<PulseConfiguration, Error> {
        PulseConfiguration::new(
            self.pin.unwrap_or(configuration::DEFAULT_PIN),
            self.on_time.unwrap_or(configuration::DEFAULT_ON_TIME),
            self.off_time.unwrap_or(configuration::DEFAULT_OFF_TIME),
            configuration::logic(self.active_low),
        )
    }
}

/// Validates the `blinker` arguments, then blinks on `gpio`.
///
/// Returns the process exit status: 1 if validation or setup failed, 0
/// otherwise. A fault during the loop is logged and the LED switched off
/// by then, so it does not change the status. No line is acquired
/// unless validation succeeds.
pub fn run_blink<G: Gpio, D: Delay>(
    matches: &ArgMatches,
    running: Running,
    gpio: &mut G,
    delay: &mut D,
) -> i32 {
    let configuration = match BlinkArguments::from_matches(matches)
        .and_then(|arguments| arguments.configuration())
        .report_error()
    {
        Ok(configuration) => configuration,
        Err(_) => return 1,
    };
    match Blinker::new(configuration, running).execute(gpio, delay).report_error() {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Validates the `pulse` arguments, then pulses on `gpio`. Exit status
/// as for [`run_blink`].
pub fn run_pulse<G: Gpio, D: Delay>(
    matches: &ArgMatches,
    running: Running,
    gpio: &mut G,
    delay: &mut D,
) -> i32 {
    let configuration = match PulseArguments::from_matches(matches)
        .and_then(|arguments| arguments.configuration())
        .report_error()
    {
        Ok(configuration) => configuration,
        Err(_) => return 1,
    };
    match Pulse::new(configuration, running).execute(gpio, delay).report_error() {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
