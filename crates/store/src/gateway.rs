//! Translates configurations to and from documents in the builds collection.

use std::sync::Arc;
use std::time::Duration;

use nexdrive_core::config::Configuration;
use nexdrive_core::principal::AuthState;

use crate::backend::DocumentStore;
use crate::config::StoreConfig;
use crate::document::{BuildDocument, SavedBuild};
use crate::error::GatewayError;

/// The wire field carrying the owning principal id.
const OWNER_FIELD: &str = "ownerId";

/// Persistence gateway for saved builds.
///
/// Holds no mutable state of its own; every call works on its own snapshot
/// of configuration and principal, so concurrent `save` and
/// `list_for_owner` calls never contend.
pub struct BuildGateway {
    store: Arc<dyn DocumentStore>,
    collection: String,
    op_timeout: Duration,
}

impl BuildGateway {
    pub fn new(store: Arc<dyn DocumentStore>, config: &StoreConfig) -> Self {
        Self {
            store,
            collection: config.collection.clone(),
            op_timeout: config.op_timeout,
        }
    }

    /// Persist a snapshot of `config` owned by the signed-in principal.
    ///
    /// Exactly one write attempt per call and no deduplication: saving the
    /// same content twice creates two records ("save a new build", not
    /// upsert). Fails with `Unauthenticated` while the identity slot is
    /// resolving or signed out; no document is created in that case.
    pub async fn save(
        &self,
        config: &Configuration,
        auth: &AuthState,
    ) -> Result<String, GatewayError> {
        let principal = match auth.principal() {
            Some(p) if config.is_savable(auth) => p,
            _ => return Err(GatewayError::Unauthenticated),
        };

        let doc = BuildDocument::snapshot(config, &principal.id);
        let fields = serde_json::to_value(&doc)
            .map_err(|e| GatewayError::Unavailable(format!("serialize build document: {e}")))?;

        let insert = self.store.insert(&self.collection, fields);
        let record_id = tokio::time::timeout(self.op_timeout, insert)
            .await
            .map_err(|_| GatewayError::Timeout(self.op_timeout))??;

        tracing::debug!(
            owner_id = %principal.id,
            record_id = %record_id,
            model = doc.model_key,
            "build saved"
        );
        Ok(record_id)
    }

    /// All builds owned by a principal, in store-defined order.
    ///
    /// An empty vec is a valid result meaning "no builds yet". Callers must
    /// not invoke this without a resolved principal id; the gateway has no
    /// anonymous scope.
    pub async fn list_for_owner(&self, principal_id: &str) -> Result<Vec<SavedBuild>, GatewayError> {
        let query = self.store.query_eq(&self.collection, OWNER_FIELD, principal_id);
        let docs = tokio::time::timeout(self.op_timeout, query)
            .await
            .map_err(|_| GatewayError::Timeout(self.op_timeout))??;

        let mut builds = Vec::with_capacity(docs.len());
        for stored in docs {
            let doc: BuildDocument = serde_json::from_value(stored.fields).map_err(|e| {
                GatewayError::Unavailable(format!(
                    "malformed build document {}: {e}",
                    stored.record_id
                ))
            })?;
            builds.push(SavedBuild::hydrate(stored.record_id, doc)?);
        }

        tracing::debug!(owner_id = %principal_id, count = builds.len(), "builds listed");
        Ok(builds)
    }
}
