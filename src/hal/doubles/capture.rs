//! Logger that keeps every message per thread, so parallel tests can
//! each inspect the lines their own code under test produced.
use log::{LevelFilter, Log, Metadata, Record};
use std::{cell::RefCell, sync::Once};

thread_local! {
    static LINES: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool { true }

    fn log(&self, record: &Record) {
        let line = record.args().to_string();
        LINES.with(|lines| lines.borrow_mut().push(line));
    }

    fn flush(&self) {}
}

/// Installs the capturing logger (once per process) and clears the
/// calling thread's captured lines.
pub fn capture() {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    LINES.with(|lines| lines.borrow_mut().clear());
}

/// Lines logged by the calling thread since the last `capture`.
pub fn lines() -> Vec<String> { LINES.with(|lines| lines.borrow().clone()) }

/// Captured lines starting with `prefix`.
pub fn lines_starting_with(prefix: &str) -> Vec<String> {
    lines().into_iter().filter(|line| line.starts_with(prefix)).collect()
}
