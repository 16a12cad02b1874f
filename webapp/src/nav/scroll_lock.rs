//! Scoped suppression of document scrolling while a full-screen overlay
//! (the mobile drawer) is open.
//!
//! The document-level flag is reference counted, so several holders can
//! coexist without last-write-wins races; the body style is only touched
//! when the count crosses zero.  A holder that is dropped while engaged
//! releases its reference, so the lock cannot leak past unmount.

use std::sync::atomic::{AtomicUsize, Ordering};

pub struct LockCounter(AtomicUsize);

impl LockCounter {
    pub const fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    /// Returns true when this acquisition took the count from zero.
    fn acquire(&self) -> bool {
        self.0.fetch_add(1, Ordering::SeqCst) == 0
    }

    /// Returns true when this release took the count back to zero.
    fn release(&self) -> bool {
        self.0.fetch_sub(1, Ordering::SeqCst) == 1
    }

    pub fn locked(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }
}

static HOLDERS: LockCounter = LockCounter::new();

/// Whether any holder currently suppresses document scrolling.
pub fn document_locked() -> bool {
    HOLDERS.locked()
}

/// One component instance's handle on the document scroll-lock.
pub struct ScrollLock {
    engaged: bool,
}

impl ScrollLock {
    pub const fn new() -> Self {
        Self { engaged: false }
    }

    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// Drive the lock toward the wanted state; idempotent in both
    /// directions.
    pub fn set(&mut self, want: bool) {
        if want == self.engaged {
            return;
        }

        if want {
            if HOLDERS.acquire() {
                set_body_overflow(true);
            }
        } else if HOLDERS.release() {
            set_body_overflow(false);
        }

        self.engaged = want;
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.set(false);
    }
}

#[cfg(target_arch = "wasm32")]
fn set_body_overflow(hidden: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());

    match body {
        Some(body) => {
            let value = if hidden { "hidden" } else { "" };
            if let Err(err) = body.style().set_property("overflow", value) {
                gloo_console::error!(format!("failed to set body overflow: {err:?}"));
            }
        }
        None => gloo_console::error!("document body unavailable for scroll-lock"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_body_overflow(_hidden: bool) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_crossings() {
        let counter = LockCounter::new();
        assert!(!counter.locked());

        assert!(counter.acquire());
        assert!(!counter.acquire());
        assert!(counter.locked());

        assert!(!counter.release());
        assert!(counter.release());
        assert!(!counter.locked());
    }

    // The document counter is shared process state, so every sequence runs
    // in this single test to keep the assertions race-free.
    #[test]
    fn holder_lifecycle() {
        let mut lock = ScrollLock::new();
        assert!(!document_locked());

        // engage / disengage round trip
        lock.set(true);
        assert!(lock.engaged());
        assert!(document_locked());
        lock.set(false);
        assert!(!document_locked());

        // redundant writes are idempotent
        lock.set(false);
        lock.set(true);
        lock.set(true);
        assert!(document_locked());

        // a second holder keeps the document locked after the first exits
        let mut other = ScrollLock::new();
        other.set(true);
        lock.set(false);
        assert!(document_locked());

        // dropping an engaged holder releases it
        drop(other);
        assert!(!document_locked());
    }
}
