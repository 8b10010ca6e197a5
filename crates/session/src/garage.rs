//! Saved-build list state and the identity-driven refresh loop.
//!
//! Queries race user actions: a sign-out/sign-in pair can leave an older
//! principal's query completing after the newer principal's. Every refresh
//! is tagged with a generation counter and the principal it was issued for;
//! completions that no longer match the latest tag are discarded, so the
//! displayed list always belongs to the current principal.

use std::sync::Arc;

use tokio::sync::Mutex;

use nexdrive_core::principal::AuthState;
use nexdrive_identity::IdentityWatcher;
use nexdrive_store::{BuildGateway, GatewayError, SavedBuild};

/// Identifies one issued refresh: which generation and for which principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTag {
    generation: u64,
    principal_id: String,
}

impl QueryTag {
    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }
}

/// UI-facing list state for the garage view.
#[derive(Default)]
pub struct GarageView {
    builds: Vec<SavedBuild>,
    error: Option<GatewayError>,
    next_generation: u64,
    latest: Option<QueryTag>,
}

impl GarageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The builds currently on display.
    pub fn builds(&self) -> &[SavedBuild] {
        &self.builds
    }

    /// Error indicator from the most recent applied refresh, if any. The
    /// prior list stays visible alongside it.
    pub fn error(&self) -> Option<&GatewayError> {
        self.error.as_ref()
    }

    /// Record that a refresh is being issued for a principal and return its
    /// tag. Supersedes every earlier in-flight refresh.
    pub fn begin_refresh(&mut self, principal_id: &str) -> QueryTag {
        self.next_generation += 1;
        let tag = QueryTag {
            generation: self.next_generation,
            principal_id: principal_id.to_string(),
        };
        self.latest = Some(tag.clone());
        tag
    }

    /// Apply a completed refresh. Returns `false` when the completion is
    /// stale (superseded generation or principal mismatch) and was dropped.
    ///
    /// Success replaces the list and clears the error. Failure keeps the
    /// prior list visible and sets the error indicator; the empty list
    /// stays reserved for a confirmed "no builds yet".
    pub fn apply(
        &mut self,
        tag: QueryTag,
        result: Result<Vec<SavedBuild>, GatewayError>,
    ) -> bool {
        match &self.latest {
            Some(latest) if *latest == tag => {}
            _ => {
                tracing::debug!(
                    principal_id = %tag.principal_id,
                    generation = tag.generation,
                    "discarding stale garage refresh"
                );
                return false;
            }
        }

        match result {
            Ok(builds) => {
                self.builds = builds;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "garage refresh failed; keeping prior list");
                self.error = Some(err);
            }
        }
        true
    }

    /// Sign-out: drop the list and invalidate every in-flight refresh.
    pub fn clear(&mut self) {
        self.builds.clear();
        self.error = None;
        self.latest = None;
    }
}

/// Drive garage refreshes from identity transitions.
///
/// Issues a query only on transitions to a signed-in principal — never
/// while resolution is in progress and never for a signed-out slot — and
/// clears the view on sign-out. Queries run on their own task so a rapid
/// principal switch can supersede them mid-flight; the tag check in
/// [`GarageView::apply`] drops whatever arrives late.
pub async fn watch_identity(
    mut watcher: IdentityWatcher,
    gateway: Arc<BuildGateway>,
    garage: Arc<Mutex<GarageView>>,
) {
    loop {
        let state = match watcher.changed().await {
            Some(state) => state,
            None => return,
        };
        match state {
            AuthState::SignedIn(principal) => {
                let tag = garage.lock().await.begin_refresh(&principal.id);
                let gateway = gateway.clone();
                let garage = garage.clone();
                tokio::spawn(async move {
                    let result = gateway.list_for_owner(tag.principal_id()).await;
                    garage.lock().await.apply(tag, result);
                });
            }
            AuthState::SignedOut => {
                garage.lock().await.clear();
            }
            // The slot never re-enters Resolving; nothing to do either way.
            AuthState::Resolving => {}
        }
    }
}
