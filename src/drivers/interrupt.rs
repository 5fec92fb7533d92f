//! Operator interrupt (Ctrl-C, SIGTERM) handling.
//!
//! The handler never touches hardware. It only lowers a shared
//! [`Running`] flag that the blink loop polls between phases.
use crate::error::Error;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared "keep going" flag. Starts raised.
#[derive(Clone, Debug)]
pub struct Running(Arc<AtomicBool>);

impl Default for Running {
    fn default() -> Self { Self(Arc::new(AtomicBool::new(true))) }
}

impl Running {
    pub fn new() -> Self { Self::default() }

    pub fn is_running(&self) -> bool { self.0.load(Ordering::SeqCst) }

    /// Lowers the flag. Returns `true` only for the call that actually
    /// lowered it.
    pub fn stop(&self) -> bool { self.0.swap(false, Ordering::SeqCst) }
}

/// Installs the process-wide interrupt handler. Can only succeed once
/// per process.
pub fn install(running: Running) -> Result<(), Error> {
    ctrlc::set_handler(move || {
        if running.stop() {
            log::warn!("Interrupt received, stopping after the current phase");
        }
    })
    .map_err(|e| Error::Device(format!("Failed to install interrupt handler: {}", e)))
}
