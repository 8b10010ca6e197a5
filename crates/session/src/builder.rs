//! The active builder view's session state.

use std::sync::Arc;

use nexdrive_core::catalog::{self, CatalogEntry};
use nexdrive_core::config::Configuration;
use nexdrive_core::error::CoreError;
use nexdrive_core::scene::{self, SceneGraph};
use nexdrive_identity::IdentityWatcher;
use nexdrive_store::{BuildGateway, GatewayError};

/// Owns the mutable [`Configuration`] for one builder view.
///
/// The configuration is owned exclusively by the UI-driving task; each user
/// selection applies one pure transition and the scene is re-derived from
/// the result. Leaving the view without saving simply drops the session.
pub struct BuilderSession {
    config: Configuration,
    gateway: Arc<BuildGateway>,
    identity: IdentityWatcher,
}

impl BuilderSession {
    /// Start a session at the documented default build.
    pub fn new(gateway: Arc<BuildGateway>, identity: IdentityWatcher) -> Self {
        Self {
            config: Configuration::default_build(),
            gateway,
            identity,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Catalog row for the currently selected model.
    pub fn entry(&self) -> &'static CatalogEntry {
        catalog::entry(self.config.model)
    }

    pub fn select_model(&mut self, key: &str) -> Result<(), CoreError> {
        self.config = self.config.select_model(key)?;
        Ok(())
    }

    pub fn select_color(&mut self, color_value: &str) -> Result<(), CoreError> {
        self.config = self.config.select_color(color_value)?;
        Ok(())
    }

    pub fn select_trim(&mut self, slot: &str, option: &str) -> Result<(), CoreError> {
        self.config = self.config.select_trim(slot, option)?;
        Ok(())
    }

    /// The scene graph for the current configuration, re-derived on demand
    /// after every transition.
    pub fn scene(&self) -> Result<SceneGraph, CoreError> {
        scene::compose(&self.config, self.entry())
    }

    /// Whether a save would currently be accepted.
    pub fn is_savable(&self) -> bool {
        self.config.is_savable(&self.identity.snapshot())
    }

    /// Save a snapshot of the current configuration.
    ///
    /// Both the configuration and the auth state are captured at call time;
    /// the builder keeps mutating independently of the saved record.
    pub async fn save_current(&self) -> Result<String, GatewayError> {
        let auth = self.identity.snapshot();
        self.gateway.save(&self.config, &auth).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use nexdrive_core::catalog::ModelKind;
    use nexdrive_identity::IdentitySlot;
    use nexdrive_core::principal::Principal;
    use nexdrive_store::config::StoreConfig;
    use nexdrive_store::MemoryStore;

    use super::*;

    fn session() -> (BuilderSession, IdentitySlot) {
        let store = Arc::new(MemoryStore::new());
        let gateway = Arc::new(BuildGateway::new(store, &StoreConfig::default()));
        let (slot, watcher) = IdentitySlot::new();
        (BuilderSession::new(gateway, watcher), slot)
    }

    fn principal(id: &str) -> Principal {
        Principal {
            id: id.into(),
            display_name: "Test Driver".into(),
            avatar_url: "https://example.com/a.png".into(),
            email: "driver@example.com".into(),
        }
    }

    #[tokio::test]
    async fn session_starts_at_the_default_build() {
        let (session, _slot) = session();
        assert_eq!(session.config().model, ModelKind::Sports);
        assert_eq!(session.config().color_value, "#ff3b30");
        assert_eq!(session.entry().display_name, "Porsche 911 GT3");
    }

    #[tokio::test]
    async fn transitions_mutate_in_place_and_rederive_the_scene() {
        let (mut session, _slot) = session();
        session.select_model("supercar").unwrap();
        session.select_color("#007AFF").unwrap();
        session.select_trim("interior", "Tan").unwrap();

        assert_eq!(session.config().model, ModelKind::Supercar);
        let graph = session.scene().unwrap();
        // The scene always reflects the configuration it was derived from.
        assert!(format!("{:?}", graph.nodes[0].material).contains("#007AFF"));
    }

    #[tokio::test]
    async fn invalid_selection_leaves_the_session_unchanged() {
        let (mut session, _slot) = session();
        let before = session.config().clone();
        assert_matches!(session.select_model("zeppelin"), Err(CoreError::InvalidKey { .. }));
        assert_eq!(session.config(), &before);
    }

    #[tokio::test]
    async fn save_reflects_the_auth_state_at_call_time() {
        let (session, slot) = session();
        assert!(!session.is_savable());
        assert_matches!(
            session.save_current().await,
            Err(GatewayError::Unauthenticated)
        );

        slot.resolve(Some(principal("u-1")));
        assert!(session.is_savable());
        assert!(session.save_current().await.is_ok());
    }
}
