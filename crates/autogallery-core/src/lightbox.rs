/// Lightbox -- full-size viewer over the gallery grid.
///
/// Opening the lightbox claims the document scroll lock so the grid does
/// not scroll underneath it; closing releases the claim. Navigation wraps
/// around at both ends.
use crate::host::{ScrollLock, ScrollLockGuard};
use tracing::debug;

#[derive(Debug)]
pub struct Lightbox {
    scroll_lock: ScrollLock,
    active: Option<usize>,
    claim: Option<ScrollLockGuard>,
}

impl Lightbox {
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            scroll_lock,
            active: None,
            claim: None,
        }
    }

    /// Index of the item on display.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Show item `index` of `len`. Out-of-range indices are refused.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        if self.claim.is_none() {
            self.claim = Some(self.scroll_lock.acquire("lightbox"));
        }
        self.active = Some(index);
        debug!(index, "lightbox opened");
        true
    }

    /// Hide the lightbox. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        if let Some(claim) = self.claim.take() {
            claim.release();
        }
        let was_open = self.active.take().is_some();
        if was_open {
            debug!("lightbox closed");
        }
        was_open
    }

    /// Advance to the next item, wrapping to the first.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.step(len, |i| (i + 1) % len)
    }

    /// Go back to the previous item, wrapping to the last.
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        self.step(len, |i| (i + len - 1) % len)
    }

    /// Close if the active index no longer exists (the catalogue shrank).
    pub fn clamp_to(&mut self, len: usize) {
        if self.active.is_some_and(|i| i >= len) {
            self.close();
        }
    }

    fn step(&mut self, len: usize, f: impl FnOnce(usize) -> usize) -> Option<usize> {
        if len == 0 {
            self.close();
            return None;
        }
        let current = self.active?;
        let next = f(current.min(len - 1));
        self.active = Some(next);
        Some(next)
    }
}
