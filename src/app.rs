use crate::config::Config;
use crate::store::seed::demo_listings;
use crate::store::ListingStore;
use crate::suggestions::{GeminiClient, SuggestionError, SuggestionService};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static INSTANCES: AtomicU64 = AtomicU64::new(0);

/// Everything a request handler needs. One per running server.
pub struct App {
    pub store: ListingStore,
    suggestions: Box<dyn SuggestionService>,
    revision: Arc<AtomicU64>,
    // Start time in millis plus an instance number; keeps ETags from one
    // run (or one `App`) apart from the next.
    boot: String,
}

impl App {
    pub fn new(store: ListingStore, suggestions: Box<dyn SuggestionService>) -> Self {
        let revision = Arc::new(AtomicU64::new(0));

        // Bumped on every store change; the browse fragment uses it as its ETag.
        let counter = Arc::clone(&revision);
        store.subscribe(Arc::new(move || {
            let rev = counter.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(revision = rev, "listings changed");
        }));

        Self {
            store,
            suggestions,
            revision,
            boot: format!(
                "{}.{}",
                Utc::now().timestamp_millis(),
                INSTANCES.fetch_add(1, Ordering::Relaxed)
            ),
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self, SuggestionError> {
        let store = if cfg.seed_listings {
            ListingStore::with_listings(demo_listings())
        } else {
            ListingStore::new()
        };

        let client = GeminiClient::new(cfg.gemini.clone())?;
        if !client.is_configured() {
            tracing::warn!("GEMINI_API_KEY not set; AI suggestions will be unavailable");
        }

        Ok(Self::new(store, Box::new(client)))
    }

    pub fn suggestions(&self) -> &dyn SuggestionService {
        self.suggestions.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    pub fn etag(&self) -> String {
        format!("\"{}-rev-{}\"", self.boot, self.revision())
    }
}
