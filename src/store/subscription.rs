//! Deregistration handle returned by `Store::subscribe`.

use std::fmt;

/// Keeps a store listener registered for as long as it is alive.
///
/// Dropping the subscription unsubscribes the listener.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    cleanup: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl Subscription {
    pub(crate) fn new<F: FnOnce() + Send + 'static>(cleanup: F) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// Deregister the listener now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cleanup.is_some())
            .finish()
    }
}
