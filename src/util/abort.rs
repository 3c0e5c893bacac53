//! Cancellation handles for in-flight HTTP requests.
//!
//! DESIGN
//! ======
//! Every networking call in `net` takes a `FetchAbort`. A view creates one
//! handle per lifetime and aborts it on teardown so late responses never
//! land in torn-down state; this is a correctness requirement for every
//! fetch, not an optimization. Clones share the underlying controller, so
//! aborting any clone cancels every request issued with the handle.

#[cfg(test)]
#[path = "abort_test.rs"]
mod abort_test;

#[cfg(not(feature = "hydrate"))]
use std::cell::Cell;
#[cfg(not(feature = "hydrate"))]
use std::rc::Rc;

/// Abort handle tied to a view lifetime.
#[derive(Clone, Debug)]
pub struct FetchAbort {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
    #[cfg(feature = "hydrate")]
    signal: Option<web_sys::AbortSignal>,
    #[cfg(not(feature = "hydrate"))]
    aborted: Rc<Cell<bool>>,
}

impl FetchAbort {
    /// Create a fresh handle. Pass it to every fetch the view issues and
    /// call [`abort`](Self::abort) on teardown.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            match web_sys::AbortController::new() {
                Ok(controller) => {
                    let signal = controller.signal();
                    Self {
                        controller: Some(controller),
                        signal: Some(signal),
                    }
                }
                Err(_) => Self {
                    controller: None,
                    signal: None,
                },
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {
                aborted: Rc::new(Cell::new(false)),
            }
        }
    }

    /// Cancel every request issued with this handle or its clones.
    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = &self.controller {
                controller.abort();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.aborted.set(true);
        }
    }

    /// Whether this handle has been aborted.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.signal.as_ref().map_or(false, |s| s.aborted())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.aborted.get()
        }
    }

    /// Browser abort signal to attach to an outgoing request.
    #[cfg(feature = "hydrate")]
    pub(crate) fn signal(&self) -> Option<&web_sys::AbortSignal> {
        self.signal.as_ref()
    }
}

impl Default for FetchAbort {
    fn default() -> Self {
        Self::new()
    }
}
