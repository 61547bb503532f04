//! Listing view lifecycle: mount, refresh, unmount.
//!
//! The board mirrors a mounted UI component. Mounting starts the one
//! initial fetch, refresh re-runs it on demand, and unmounting cancels
//! whatever is still in flight so a stale response can never land in
//! the state afterwards.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::source::JobSource;
use jobdeck_core::JobSummary;

// ---------------------------------------------------------------------------
// Listing state
// ---------------------------------------------------------------------------

/// Observable state of the listing view.
///
/// Transitions only ever move forward through a fetch:
/// `NotLoaded -> Loading -> Loaded | Failed`, with `refresh` looping a
/// settled state back through `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// No fetch has been requested yet.
    NotLoaded,
    /// A fetch is in flight.
    Loading,
    /// The listing arrived, in backend order.
    Loaded(Vec<JobSummary>),
    /// The fetch failed; the message is what the gateway reported.
    Failed(String),
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The job listing view.
///
/// State lives in a `watch` channel so any number of observers can
/// follow transitions without polling. All handles are cheap clones of
/// shared interior state, so the board can be driven from multiple
/// tasks.
pub struct JobBoard {
    source: Arc<dyn JobSource>,
    state_tx: watch::Sender<ListState>,
    cancel: CancellationToken,
}

impl JobBoard {
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        let (state_tx, _) = watch::channel(ListState::NotLoaded);
        Self {
            source,
            state_tx,
            cancel: CancellationToken::new(),
        }
    }

    /// Mount the view, starting the initial fetch.
    ///
    /// Only the first mount fetches. Calling this again while the view
    /// is loading or already settled does nothing, so concurrent mounts
    /// cannot duplicate the request.
    pub fn mount(&self) {
        if self.cancel.is_cancelled() {
            return;
        }

        let started = self.state_tx.send_if_modified(|state| {
            if matches!(state, ListState::NotLoaded) {
                *state = ListState::Loading;
                true
            } else {
                false
            }
        });

        if started {
            tracing::debug!("Board mounted, fetching listing");
            self.spawn_fetch();
        }
    }

    /// Re-run the listing fetch.
    ///
    /// A no-op while a fetch is already in flight; from any settled
    /// state the view drops back to `Loading` and fetches again.
    pub fn refresh(&self) {
        if self.cancel.is_cancelled() {
            return;
        }

        let started = self.state_tx.send_if_modified(|state| {
            if matches!(state, ListState::Loading) {
                false
            } else {
                *state = ListState::Loading;
                true
            }
        });

        if started {
            tracing::debug!("Refreshing listing");
            self.spawn_fetch();
        }
    }

    /// Unmount the view.
    ///
    /// Cancels any in-flight fetch; a response that arrives after this
    /// point is discarded rather than written into the state. The board
    /// stays unmounted: later `mount` and `refresh` calls do nothing.
    pub fn unmount(&self) {
        tracing::debug!("Board unmounted, cancelling in-flight fetch");
        self.cancel.cancel();
    }

    /// Current state snapshot.
    pub fn state(&self) -> ListState {
        self.state_tx.borrow().clone()
    }

    /// Watch the state as it changes.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state_tx.subscribe()
    }

    /// Wait until the current fetch settles and return the outcome.
    ///
    /// Call after `mount` or `refresh`; if no fetch is running this
    /// waits for the next one to finish.
    pub async fn wait_settled(&self) -> ListState {
        let mut rx = self.state_tx.subscribe();
        loop {
            let current = rx.borrow_and_update().clone();
            match current {
                ListState::Loaded(_) | ListState::Failed(_) => return current,
                ListState::NotLoaded | ListState::Loading => {}
            }
            if rx.changed().await.is_err() {
                return self.state();
            }
        }
    }

    /// One display line per job, `[id] title at company`.
    ///
    /// Empty unless the listing is loaded; a failed view renders no
    /// rows and reports through `state` instead.
    pub fn rows(&self) -> Vec<String> {
        match self.state() {
            ListState::Loaded(jobs) => jobs.iter().map(format_row).collect(),
            _ => Vec::new(),
        }
    }

    /// Run the fetch in a task tied to the board's cancellation token.
    fn spawn_fetch(&self) {
        let source = Arc::clone(&self.source);
        let state_tx = self.state_tx.clone();
        let fetch_cancel = self.cancel.child_token();

        tokio::spawn(async move {
            let result = tokio::select! {
                _ = fetch_cancel.cancelled() => return, // unmounted mid-fetch
                result = source.list_jobs() => result,
            };

            // Unmount can land between the select resolving and the
            // commit; a late result must stay out of the state.
            if fetch_cancel.is_cancelled() {
                return;
            }

            let next = match result {
                Ok(jobs) => {
                    tracing::debug!(count = jobs.len(), "Listing loaded");
                    ListState::Loaded(jobs)
                }
                Err(error) => {
                    tracing::warn!(%error, "Listing fetch failed");
                    ListState::Failed(error.to_string())
                }
            };
            state_tx.send_replace(next);
        });
    }
}

fn format_row(job: &JobSummary) -> String {
    format!("[{}] {} at {}", job.id, job.title, job.company.name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
