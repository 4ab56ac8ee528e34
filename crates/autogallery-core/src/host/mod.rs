/// Host document resources shared by every mounted comparator.
///
/// The only global state a comparator touches is the document's scroll
/// lock; the only global event source it subscribes to is the document's
/// touch stream. Both live here, together with the id allocator that keeps
/// instances distinct. Nothing else is shared between comparators.
pub mod listeners;
pub mod scroll_lock;

pub use listeners::{DocumentListeners, ListenerGuard};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};

use crate::compare::{Comparator, DocumentTouch};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identity of one mounted comparator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComparatorId(pub u64);

/// Cloneable handle to the host document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    scroll_lock: ScrollLock,
    listeners: DocumentListeners,
    next_id: Arc<AtomicU64>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn listeners(&self) -> &DocumentListeners {
        &self.listeners
    }

    /// Allocate a fresh comparator id.
    pub fn allocate_id(&self) -> ComparatorId {
        ComparatorId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Deliver a document-level touch event to the subscribed comparators.
    ///
    /// Comparators that are not subscribed never see the event. Returns the
    /// number of comparators whose slider position changed.
    pub fn dispatch<'a, I>(&self, event: DocumentTouch, comparators: I) -> usize
    where
        I: IntoIterator<Item = &'a mut Comparator>,
    {
        if self.listeners.is_empty() {
            return 0;
        }
        let mut changed = 0;
        for comparator in comparators {
            if !self.listeners.is_subscribed(comparator.id()) {
                continue;
            }
            if comparator.on_document_touch(event) {
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let doc = Document::new();
        let a = doc.allocate_id();
        let b = doc.clone().allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn clones_share_state() {
        let doc = Document::new();
        let other = doc.clone();
        let _guard = doc.scroll_lock().acquire("test");
        assert!(other.scroll_lock().is_locked());
    }
}
