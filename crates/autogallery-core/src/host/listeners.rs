/// Registry of comparators listening to document-level touch events.
///
/// A comparator is subscribed only while it is dragging. The host routes
/// touch move / end / cancel events to the registered ids and nobody else,
/// so an idle comparator can never be moved by a finger elsewhere on the
/// page.
use super::ComparatorId;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to the listener registry.
#[derive(Debug, Clone, Default)]
pub struct DocumentListeners {
    subscribed: Arc<Mutex<BTreeSet<ComparatorId>>>,
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` for document-level touch events.
    pub fn subscribe(&self, id: ComparatorId) -> ListenerGuard {
        self.subscribed.lock().insert(id);
        debug!(comparator = id.0, "document touch listeners attached");
        ListenerGuard {
            id,
            subscribed: Arc::clone(&self.subscribed),
            active: true,
        }
    }

    pub fn is_subscribed(&self, id: ComparatorId) -> bool {
        self.subscribed.lock().contains(&id)
    }

    /// Snapshot of the subscribed ids, in ascending order.
    pub fn subscribers(&self) -> Vec<ComparatorId> {
        self.subscribed.lock().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.subscribed.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribed.lock().is_empty()
    }
}

/// Active subscription; detached on [`ListenerGuard::unsubscribe`] or drop.
#[derive(Debug)]
#[must_use = "dropping the guard detaches the listeners immediately"]
pub struct ListenerGuard {
    id: ComparatorId,
    subscribed: Arc<Mutex<BTreeSet<ComparatorId>>>,
    active: bool,
}

impl ListenerGuard {
    pub fn id(&self) -> ComparatorId {
        self.id
    }

    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.subscribed.lock().remove(&self.id);
        debug!(comparator = self.id.0, "document touch listeners detached");
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.detach();
    }
}
