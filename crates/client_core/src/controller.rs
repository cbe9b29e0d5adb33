use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use shared::{
    domain::{ViewMode, ViewState},
    error::CatalogError,
};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{PageLoader, PokedexGateway};

/// Mediates user actions into gateway calls and reconciles the results into
/// renderable [`ViewState`] snapshots.
///
/// Every operation either publishes a success snapshot or an error snapshot;
/// no error escapes past this boundary. Snapshots are replaced whole through
/// a watch channel, so readers never observe a half-applied transition.
pub struct ViewController {
    gateway: Arc<dyn PokedexGateway>,
    loader: PageLoader,
    page_size: u32,
    state: watch::Sender<ViewState>,
    // Monotonic tag for page loads; completions that no longer carry the
    // newest tag are stale and get dropped.
    load_seq: AtomicU64,
}

impl ViewController {
    pub fn new(gateway: Arc<dyn PokedexGateway>, page_size: u32) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            loader: PageLoader::new(Arc::clone(&gateway)),
            gateway,
            page_size,
            state,
            load_seq: AtomicU64::new(0),
        }
    }

    /// Subscription handle for renderers; fires on every snapshot change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Stores raw search input. No fetch is triggered.
    pub fn set_query(&self, text: impl Into<String>) {
        let mut next = self.snapshot();
        next.query = text.into();
        self.state.send_replace(next);
    }

    /// Mount-time side effect: loads page 1 without bounds checking, since
    /// no page count is known yet.
    pub async fn load_initial(&self) {
        self.load_listing_page(1).await;
    }

    /// Navigates to page `n`. Out-of-bounds requests, including any request
    /// made before a first page has been loaded, are silent no-ops.
    pub async fn go_to_page(&self, page_number: u32) {
        let total = match &self.snapshot().current_page {
            Some(page) => page.total_page_count,
            None => return,
        };
        if page_number < 1 || page_number > total {
            debug!(page_number, total, "page out of bounds, ignoring");
            return;
        }
        self.load_listing_page(page_number).await;
    }

    async fn load_listing_page(&self, page_number: u32) {
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.loader.load_page(page_number, self.page_size).await;
        if self.load_seq.load(Ordering::SeqCst) != seq {
            debug!(page_number, "discarding stale page load");
            return;
        }
        let mut next = self.snapshot();
        match result {
            Ok(page) => {
                next.mode = ViewMode::Listing;
                next.current_page = Some(page);
                next.error_message = None;
            }
            Err(err) => {
                warn!(page_number, error = %err, "page load failed");
                // Previous page stays in place behind the error banner.
                next.error_message = Some(format!("failed to load page {page_number}: {err}"));
            }
        }
        self.state.send_replace(next);
    }

    /// Looks up a single Pokémon by the stored query, case-insensitively.
    /// A trimmed-empty query is silently ignored and touches neither the
    /// network nor the state.
    pub async fn submit_search(&self) {
        let query = self.snapshot().query.trim().to_string();
        if query.is_empty() {
            return;
        }
        let result = self.gateway.fetch_by_name(&query).await;
        let mut next = self.snapshot();
        match result {
            Ok(pokemon) => {
                next.mode = ViewMode::SingleResult;
                next.searched = Some(pokemon);
                next.error_message = None;
            }
            Err(err) => {
                warn!(query = %query, error = %err, "search failed");
                // Mode is left alone so a visible listing stays behind the
                // banner, but stale search data must never accompany an
                // error.
                next.searched = None;
                next.error_message = Some(match err {
                    CatalogError::NotFound(name) => {
                        format!("\"{name}\" was not found in the catalog")
                    }
                    other => other.to_string(),
                });
            }
        }
        self.state.send_replace(next);
    }

    /// Returns to the listing view, reusing the last loaded page without a
    /// refetch.
    pub fn reset_to_listing(&self) {
        let mut next = self.snapshot();
        next.mode = ViewMode::Listing;
        next.searched = None;
        next.error_message = None;
        next.query.clear();
        self.state.send_replace(next);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
