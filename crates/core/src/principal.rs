//! Authenticated principal value and the three-state auth lifecycle.

use serde::{Deserialize, Serialize};

/// An authenticated identity as delivered by the identity provider.
///
/// The id is opaque; the remaining fields are display attributes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub display_name: String,
    pub avatar_url: String,
    pub email: String,
}

/// Where identity resolution currently stands.
///
/// `Resolving` is a distinct third state, not "signed out": while the
/// provider has not yet answered, no store traffic may be issued on the
/// principal's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// The provider has not delivered its first notification yet.
    Resolving,
    /// Resolved: no principal is signed in.
    SignedOut,
    /// Resolved: this principal is signed in.
    SignedIn(Principal),
}

impl AuthState {
    /// The signed-in principal, if any.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            AuthState::SignedIn(p) => Some(p),
            AuthState::Resolving | AuthState::SignedOut => None,
        }
    }

    /// Returns `true` once the provider has answered at least once.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Resolving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(id: &str) -> Principal {
        Principal {
            id: id.into(),
            display_name: "Ada Lovelace".into(),
            avatar_url: "https://example.com/ada.png".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn resolving_and_signed_out_have_no_principal() {
        assert!(AuthState::Resolving.principal().is_none());
        assert!(AuthState::SignedOut.principal().is_none());
    }

    #[test]
    fn signed_in_exposes_the_principal() {
        let state = AuthState::SignedIn(principal("u-1"));
        assert_eq!(state.principal().map(|p| p.id.as_str()), Some("u-1"));
    }

    #[test]
    fn only_resolving_counts_as_unresolved() {
        assert!(!AuthState::Resolving.is_resolved());
        assert!(AuthState::SignedOut.is_resolved());
        assert!(AuthState::SignedIn(principal("u-1")).is_resolved());
    }
}
