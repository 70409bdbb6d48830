//! Live dashboard views, one per browser session.
//!
//! A view is created on first visit ("mount"), populated by a single member
//! fetch, and dropped on reload or after sitting idle ("unmount"). Fetch
//! completions carry a [`LoadTicket`]; a completion whose view was unmounted
//! or remounted in the meantime is discarded.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::models::dashboard::DashboardState;
use crate::models::member::{FetchError, Member, MemberSource};

pub type ViewId = String;

/// Generate a random 16-byte hex view id.
pub fn new_view_id() -> ViewId {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug)]
pub struct View {
    pub state: DashboardState,
    pub status: LoadStatus,
    pub loaded_at: Option<DateTime<Utc>>,
    generation: u64,
    last_seen: Instant,
}

impl View {
    /// Time since the owning session last loaded or changed this view.
    pub fn idle_for(&self) -> Duration {
        self.last_seen.elapsed()
    }
}

/// Proof that a fetch belongs to a particular mount of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub view_id: ViewId,
    generation: u64,
}

#[derive(Debug, Default)]
struct Inner {
    views: HashMap<ViewId, View>,
    next_generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the view if it does not exist. Returns a ticket only when the
    /// caller must start the initial load; an existing view is marked as seen.
    pub fn mount(&self, view_id: &str) -> Option<LoadTicket> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(view) = inner.views.get_mut(view_id) {
            view.last_seen = Instant::now();
            return None;
        }
        inner.next_generation += 1;
        let generation = inner.next_generation;
        inner.views.insert(
            view_id.to_string(),
            View {
                state: DashboardState::new(),
                status: LoadStatus::Pending,
                loaded_at: None,
                generation,
                last_seen: Instant::now(),
            },
        );
        log::debug!("Mounted view {view_id} (generation {generation})");
        Some(LoadTicket { view_id: view_id.to_string(), generation })
    }

    /// Drop the view. Any fetch still in flight for it will be ignored.
    pub fn unmount(&self, view_id: &str) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let removed = inner.views.remove(view_id).is_some();
        if removed {
            log::debug!("Unmounted view {view_id}");
        }
        removed
    }

    /// Apply a fetch result. Returns false when the view is gone or was
    /// remounted since the ticket was issued.
    pub fn complete_load(&self, ticket: &LoadTicket, result: Result<Vec<Member>, FetchError>) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let Some(view) = inner.views.get_mut(&ticket.view_id) else {
            log::debug!("Discarding member load for unmounted view {}", ticket.view_id);
            return false;
        };
        if view.generation != ticket.generation {
            log::debug!("Discarding stale member load for view {}", ticket.view_id);
            return false;
        }

        match result {
            Ok(members) => {
                log::info!("Loaded {} members into view {}", members.len(), ticket.view_id);
                view.state.load(members);
                view.status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::error!("Error fetching members: {e}");
                view.state.load(Vec::new());
                view.status = LoadStatus::Failed;
            }
        }
        view.loaded_at = Some(Utc::now());
        true
    }

    /// Run `f` against the view's state under the registry lock.
    pub fn with_view<R>(&self, view_id: &str, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.views.get_mut(view_id).map(|view| {
            view.last_seen = Instant::now();
            f(&mut view.state)
        })
    }

    /// Unmount every view idle for at least `max_idle`. Returns how many
    /// were dropped.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let before = inner.views.len();
        inner.views.retain(|view_id, view| {
            let keep = view.idle_for() < max_idle;
            if !keep {
                log::debug!("Evicting idle view {view_id}");
            }
            keep
        });
        before - inner.views.len()
    }

    /// Read-only access to the whole view, including load status.
    pub fn inspect<R>(&self, view_id: &str, f: impl FnOnce(&View) -> R) -> Option<R> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.views.get(view_id).map(f)
    }

    pub fn status(&self, view_id: &str) -> Option<LoadStatus> {
        self.inspect(view_id, |v| v.status)
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mount the view and, if this call created it, run the initial fetch.
/// The fetch runs without holding the registry lock.
pub async fn load_view<S: MemberSource>(registry: &ViewRegistry, source: &S, view_id: &str) {
    let Some(ticket) = registry.mount(view_id) else {
        return;
    };
    let result = source.fetch_members().await;
    registry.complete_load(&ticket, result);
}

/// Every `every`, unmount views idle for at least `max_idle`.
pub fn spawn_view_sweeper(registry: ViewRegistry, max_idle: Duration, every: Duration) {
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(every);
        loop {
            interval.tick().await;
            let evicted = registry.evict_idle(max_idle);
            if evicted > 0 {
                log::info!("View sweeper dropped {evicted} idle view(s), {} remaining", registry.len());
            }
        }
    });
}
