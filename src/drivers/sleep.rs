use crate::hal::time::Delay;
use std::{thread, time::Duration};

/// Blocks the calling thread for the requested duration.
#[derive(Debug, Default, Copy, Clone)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&mut self, duration: Duration) { thread::sleep(duration) }
}
