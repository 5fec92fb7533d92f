//! RAII guard that owns an item and calls a given function on it
//! when it drops out of scope.
//!
//! Useful for ensuring resource cleanup no matter the return
//! path, including early returns and panics.
//!
//! Example
//! ```
//! # use blinker_lib::utilities::guard::*;
//! use std::cell::Cell;
//!
//! let released = Cell::new(false);
//! {
//!     let mut pins = Guard::new(Vec::new(), |pins: &mut Vec<u8>| {
//!         pins.clear();
//!         released.set(true);
//!     });
//!     // The guard derefs to the item it protects
//!     pins.push(17);
//!     assert_eq!(1, pins.len());
//! }
//! // Guard has dropped out of scope here, so the exit function ran
//! assert!(released.get());
//! ```

use std::ops::{Deref, DerefMut};

pub struct Guard<T, G>
where
    G: FnOnce(&mut T),
{
    item: T,
    on_exit: Option<G>,
}

impl<T, G> Guard<T, G>
where
    G: FnOnce(&mut T),
{
    pub fn new(item: T, on_exit: G) -> Self { Self { item, on_exit: Some(on_exit) } }

    /// Runs the exit function now rather than at the end of the scope.
    pub fn release(self) {}
}

impl<T, G> Deref for Guard<T, G>
where
    G: FnOnce(&mut T),
{
    type Target = T;
    fn deref(&self) -> &T { &self.item }
}

impl<T, G> DerefMut for Guard<T, G>
where
    G: FnOnce(&mut T),
{
    fn deref_mut(&mut self) -> &mut T { &mut self.item }
}

impl<T, G> Drop for Guard<T, G>
where
    G: FnOnce(&mut T),
{
    fn drop(&mut self) {
        if let Some(on_exit) = self.on_exit.take() {
            on_exit(&mut self.item);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn exit_function_runs_once_on_explicit_release() {
        // Given
        let calls = Cell::new(0);
        let guard = Guard::new(5u8, |_: &mut u8| calls.set(calls.get() + 1));

        // When
        guard.release();

        // Then
        assert_eq!(1, calls.get());
    }

    #[test]
    fn exit_function_runs_on_early_return() {
        fn bail(calls: &Cell<u32>, fail: bool) -> Result<(), ()> {
            let _guard = Guard::new((), |_: &mut ()| calls.set(calls.get() + 1));
            if fail {
                return Err(());
            }
            Ok(())
        }

        // Given
        let calls = Cell::new(0);

        // When
        let result = bail(&calls, true);

        // Then
        assert!(result.is_err());
        assert_eq!(1, calls.get());
    }

    #[test]
    fn exit_function_sees_mutations_made_through_the_guard() {
        // Given
        let seen = Cell::new(0);
        let mut guard = Guard::new(1u32, |value: &mut u32| seen.set(*value));

        // When
        *guard += 41;
        drop(guard);

        // Then
        assert_eq!(42, seen.get());
    }
}
