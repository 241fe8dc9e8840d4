//! One-shot callback slot.
//!
//! A [`Handler`] always holds something callable: an empty slot is a no-op
//! closure, never a null pointer. Firing a handler swaps in a fresh no-op
//! before invoking the stored callback, so each registration runs at most once.

use core::fmt;

type Callback = Box<dyn FnOnce() + Send>;

pub struct Handler {
    callback: Callback,
}

impl Handler {
    /// Wrap a callback.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self { callback: Box::new(f) }
    }

    /// Invoke the stored callback and leave a no-op in its place.
    pub fn fire(&mut self) {
        let callback = core::mem::take(self).callback;
        callback();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
