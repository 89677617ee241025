use crate::domain::listing::{Listing, NewListing};
use crate::store::listeners::{Listener, ListenerId, Listeners, Unsubscribe};
use crate::store::StoreError;
use chrono::Utc;
use rand::Rng;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct StoreState {
    // Newest first.
    listings: Vec<Listing>,
    next_seq: u64,
}

/// In-memory listing registry with change notification.
///
/// One instance per running app; construct it explicitly and hand it to
/// whatever needs it. Listings are only ever prepended.
#[derive(Default)]
pub struct ListingStore {
    state: Mutex<StoreState>,
    listeners: Listeners,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `seed`, which is taken as already newest-first.
    pub fn with_listings(seed: Vec<Listing>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                listings: seed,
                next_seq: 0,
            }),
            listeners: Listeners::new(),
        }
    }

    fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut StoreState) -> T,
    {
        let mut guard: MutexGuard<'_, StoreState> =
            self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy of every listing, newest first.
    pub fn get_listings(&self) -> Vec<Listing> {
        self.with_state(|state| state.listings.clone())
    }

    pub fn find_listing(&self, id: &str) -> Option<Listing> {
        self.with_state(|state| state.listings.iter().find(|l| l.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.with_state(|state| state.listings.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a listing from `payload`, puts it first, and notifies every
    /// subscriber before returning it.
    ///
    /// A blank restaurant name is rejected with nothing changed and no one
    /// notified. All other checks belong to the form layer.
    pub fn add_listing(&self, payload: NewListing) -> Result<Listing, StoreError> {
        if payload.restaurant_name.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "restaurant name must not be empty".into(),
            ));
        }

        let listing = self.with_state(|state| {
            let seq = state.next_seq;
            state.next_seq += 1;

            let listing = build_listing(next_id(seq), payload);
            state.listings.insert(0, listing.clone());
            listing
        });

        tracing::debug!(id = %listing.id, "listing added, notifying {} listener(s)", self.listeners.len());
        self.listeners.notify();

        Ok(listing)
    }

    /// Registers `listener` for change notifications.
    pub fn subscribe(&self, listener: Listener) -> Unsubscribe {
        let id = self.listeners.add_listener(listener);
        self.listeners.unsubscriber(id)
    }

    pub fn add_listener(&self, listener: Listener) -> ListenerId {
        self.listeners.add_listener(listener)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove_listener(id)
    }

    pub fn notify(&self) {
        self.listeners.notify();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Millisecond timestamp plus a per-store sequence number. The sequence alone
/// guarantees uniqueness; the timestamp keeps ids from different runs apart.
fn next_id(seq: u64) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), seq)
}

fn build_listing(id: String, payload: NewListing) -> Listing {
    let mut rng = rand::thread_rng();
    let image_seed: u32 = rng.gen_range(6..=1005);
    let distance: f64 = rng.gen_range(0.1..5.1);

    let pickup_time = payload.pickup_time();
    Listing {
        id,
        restaurant_name: payload.restaurant_name,
        food_type: payload.food_type,
        description: payload.description,
        quantity: payload.quantity,
        pickup_time,
        address: payload.address,
        image_url: Some(format!("https://picsum.photos/400/300?random={image_seed}")),
        distance: Some(format!("{distance:.1} miles")),
    }
}
