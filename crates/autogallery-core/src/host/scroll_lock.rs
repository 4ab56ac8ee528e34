/// Document-wide scroll lock.
///
/// The host's scrolling container consults [`ScrollLock::is_locked`] every
/// frame and suppresses scrolling while any claim is outstanding. Claims are
/// counted so that two independent holders (two comparators dragged by two
/// fingers, or a comparator inside an open lightbox) never release each
/// other's claim.
///
/// A claim is a [`ScrollLockGuard`]: it is released exactly once, either by
/// [`ScrollLockGuard::release`] or when the guard is dropped.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Shared handle to the document's scroll-lock state.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while at least one guard is alive.
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of outstanding claims.
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }

    /// Claim the lock. Scrolling stays suppressed until the guard is released.
    pub fn acquire(&self, owner: &'static str) -> ScrollLockGuard {
        let now = self.holders.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(owner, holders = now, "scroll lock acquired");
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
            owner,
            released: false,
        }
    }
}

/// One outstanding claim on a [`ScrollLock`].
#[derive(Debug)]
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
    owner: &'static str,
    released: bool,
}

impl ScrollLockGuard {
    /// Release the claim now.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let now = self.holders.fetch_sub(1, Ordering::AcqRel) - 1;
        debug!(owner = self.owner, holders = now, "scroll lock released");
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release_once();
    }
}
