use crate::hal::time::Delay;
use std::time::Duration;

/// Delay that returns immediately, recording every requested wait.
///
/// An optional hook runs after each wait with the number of waits so
/// far, which lets a test deliver an "interrupt" in the middle of a
/// given sleep.
#[derive(Default)]
pub struct MockDelay {
    pub waits: Vec<Duration>,
    hook: Option<Box<dyn FnMut(usize)>>,
}

impl MockDelay {
    pub fn new() -> Self { Self::default() }

    pub fn on_wait<F: FnMut(usize) + 'static>(hook: F) -> Self {
        Self { waits: Vec::new(), hook: Some(Box::new(hook)) }
    }
}

impl Delay for MockDelay {
    fn wait(&mut self, duration: Duration) {
        self.waits.push(duration);
        let waited = self.waits.len();
        if let Some(hook) = self.hook.as_mut() {
            hook(waited);
        }
    }
}
