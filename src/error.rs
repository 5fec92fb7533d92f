//! Error type for the Blinker project as a whole.
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Command line or configuration file input was rejected.
    Configuration(String),
    /// The GPIO line is already held by another owner.
    PinUnavailable(u8),
    /// Any other failure while acquiring the GPIO line.
    HardwareInit(String),
    /// A hardware operation failed after the line was acquired.
    Device(String),
}

pub trait ReportOnError<T> {
    /// Logs the error (if any) and hands the result back untouched.
    fn report_error(self) -> Result<T, Error>;
}

impl<T> ReportOnError<T> for Result<T, Error> {
    fn report_error(self) -> Result<T, Error> {
        if let Err(error) = &self {
            error.report();
        }
        self
    }
}

impl Error {
    pub fn report(&self) {
        match self {
            Error::Configuration(text) => log::error!("[ConfigurationError] -> {}", text),
            Error::PinUnavailable(pin) => {
                log::error!("[PinUnavailable] -> GPIO{} is already in use", pin)
            }
            Error::HardwareInit(text) => log::error!("[HardwareInitError] -> {}", text),
            Error::Device(text) => log::error!("[DeviceError] -> {}", text),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;
        match self {
            Configuration(text) => write!(f, "Invalid configuration: {}", text),
            PinUnavailable(pin) => write!(f, "GPIO{} is already in use by another owner.", pin),
            HardwareInit(text) => write!(f, "Failed to initialize GPIO hardware: {}", text),
            Device(text) => write!(f, "GPIO operation failed: {}", text),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors_describe_the_offending_pin() {
        // Given
        let error = Error::PinUnavailable(17);

        // Then
        assert_eq!("GPIO17 is already in use by another owner.", error.to_string());
    }

    #[test]
    fn reporting_leaves_the_result_untouched() {
        // Given
        let ok: Result<u8, Error> = Ok(3);
        let failed: Result<u8, Error> = Err(Error::Device("stuck".into()));

        // Then
        assert_eq!(Ok(3), ok.report_error());
        assert_eq!(Err(Error::Device("stuck".into())), failed.report_error());
    }
}
