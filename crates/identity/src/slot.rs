//! Identity slot backed by a `tokio::sync::watch` channel.
//!
//! [`IdentitySlot`] is the writer half, owned by whatever receives the
//! identity provider's notifications. [`IdentityWatcher`] is the cheaply
//! cloneable reader half handed to every component that needs identity.
//!
//! Lifecycle: the slot starts in [`AuthState::Resolving`]; the first
//! `resolve` call moves it to `SignedOut` or `SignedIn` and it never
//! returns to `Resolving`. Readers must treat every read as a snapshot
//! valid only at read time.

use tokio::sync::watch;

use nexdrive_core::principal::{AuthState, Principal};

/// Writer half of the identity slot. Single writer by construction: the
/// struct is not `Clone`.
pub struct IdentitySlot {
    sender: watch::Sender<AuthState>,
}

/// Reader half of the identity slot.
#[derive(Clone)]
pub struct IdentityWatcher {
    receiver: watch::Receiver<AuthState>,
}

impl IdentitySlot {
    /// Create a slot in the `Resolving` state plus its first watcher.
    pub fn new() -> (Self, IdentityWatcher) {
        let (sender, receiver) = watch::channel(AuthState::Resolving);
        (Self { sender }, IdentityWatcher { receiver })
    }

    /// Deliver one provider notification: `Some` for a signed-in principal,
    /// `None` for signed-out. The first call clears `Resolving`.
    pub fn resolve(&self, principal: Option<Principal>) {
        let next = match principal {
            Some(p) => {
                tracing::debug!(principal_id = %p.id, "identity resolved to principal");
                AuthState::SignedIn(p)
            }
            None => {
                tracing::debug!("identity resolved to signed-out");
                AuthState::SignedOut
            }
        };
        // send only fails when every watcher is gone; identity updates are
        // then moot.
        let _ = self.sender.send(next);
    }

    /// Hand out another reader.
    pub fn watch(&self) -> IdentityWatcher {
        IdentityWatcher {
            receiver: self.sender.subscribe(),
        }
    }
}

impl IdentityWatcher {
    /// The auth state at this instant. A snapshot: it can change between
    /// reads across any suspension point.
    pub fn snapshot(&self) -> AuthState {
        self.receiver.borrow().clone()
    }

    /// Wait until the state changes, returning the new snapshot.
    ///
    /// Returns `None` when the writer half has been dropped.
    pub async fn changed(&mut self) -> Option<AuthState> {
        match self.receiver.changed().await {
            Ok(()) => Some(self.receiver.borrow_and_update().clone()),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(id: &str) -> Principal {
        Principal {
            id: id.into(),
            display_name: "Test Driver".into(),
            avatar_url: "https://example.com/a.png".into(),
            email: "driver@example.com".into(),
        }
    }

    #[tokio::test]
    async fn slot_starts_resolving() {
        let (_slot, watcher) = IdentitySlot::new();
        assert_eq!(watcher.snapshot(), AuthState::Resolving);
    }

    #[tokio::test]
    async fn first_resolve_clears_resolving() {
        let (slot, watcher) = IdentitySlot::new();
        slot.resolve(None);
        assert_eq!(watcher.snapshot(), AuthState::SignedOut);
    }

    #[tokio::test]
    async fn watchers_observe_sign_in_and_sign_out() {
        let (slot, mut watcher) = IdentitySlot::new();

        slot.resolve(Some(principal("u-1")));
        let state = watcher.changed().await.expect("writer alive");
        assert_eq!(state.principal().map(|p| p.id.as_str()), Some("u-1"));

        slot.resolve(None);
        let state = watcher.changed().await.expect("writer alive");
        assert_eq!(state, AuthState::SignedOut);
    }

    #[tokio::test]
    async fn every_watcher_sees_the_same_snapshot() {
        let (slot, first) = IdentitySlot::new();
        let second = slot.watch();
        let third = first.clone();

        slot.resolve(Some(principal("u-2")));
        for watcher in [&first, &second, &third] {
            assert_eq!(
                watcher.snapshot().principal().map(|p| p.id.clone()),
                Some("u-2".to_string())
            );
        }
    }

    #[tokio::test]
    async fn changed_returns_none_after_writer_drops() {
        let (slot, mut watcher) = IdentitySlot::new();
        drop(slot);
        assert_eq!(watcher.changed().await, None);
    }
}
