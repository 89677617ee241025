use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Change callback. Identity is the `Arc` allocation.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

/// Set of change listeners keyed by handle.
///
/// `notify` snapshots the registered callbacks and releases the lock before
/// invoking them, so a callback may add or remove listeners (itself included)
/// without deadlocking. Such changes take effect on the next notification.
#[derive(Default, Clone)]
pub struct Listeners {
    inner: Arc<Mutex<Registry>>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

fn same_listener(a: &Listener, b: &Listener) -> bool {
    // Compare data pointers only; vtable pointers are not stable.
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`. Registering the same `Arc` again returns the
    /// existing handle instead of adding a second entry.
    pub fn add_listener(&self, listener: Listener) -> ListenerId {
        let mut registry = lock(&self.inner);

        if let Some((id, _)) = registry
            .entries
            .iter()
            .find(|(_, existing)| same_listener(existing, &listener))
        {
            return *id;
        }

        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, listener));
        id
    }

    /// Returns `false` if `id` was not registered (already removed).
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut registry = lock(&self.inner);
        let before = registry.entries.len();
        registry.entries.retain(|(existing, _)| *existing != id);
        registry.entries.len() != before
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every listener registered at the time of the call.
    pub fn notify(&self) {
        let snapshot: Vec<Listener> = lock(&self.inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener();
        }
    }

    /// Handle that removes `id` when `unsubscribe` is called.
    pub fn unsubscriber(&self, id: ListenerId) -> Unsubscribe {
        Unsubscribe {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }
}

/// Returned by `subscribe`. Calling `unsubscribe` more than once is a no-op,
/// as is calling it after the store is gone. Dropping it does not unsubscribe.
#[derive(Clone)]
pub struct Unsubscribe {
    registry: Weak<Mutex<Registry>>,
    id: ListenerId,
}

impl Unsubscribe {
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry)
                .entries
                .retain(|(existing, _)| *existing != self.id);
        }
    }
}

impl std::fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsubscribe").field("id", &self.id).finish()
    }
}
