use std::time::Duration;

/// Store connection configuration loaded from environment variables.
///
/// Credentials are pure configuration; nothing in the core reads them
/// beyond handing them to the backend at wiring time.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Remote project/tenant identifier. Consumed only by a remote
    /// `DocumentStore` backend at construction; `MemoryStore` ignores it.
    pub project_id: String,
    /// API key for the remote store. Same scope as `project_id`.
    pub api_key: String,
    /// Collection holding saved builds (default: `builds`).
    pub collection: String,
    /// Deadline applied to every store call.
    pub op_timeout: Duration,
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default  |
    /// |-------------------------|----------|
    /// | `STORE_PROJECT_ID`      | (empty)  |
    /// | `STORE_API_KEY`         | (empty)  |
    /// | `STORE_COLLECTION`      | `builds` |
    /// | `STORE_OP_TIMEOUT_SECS` | `10`     |
    pub fn from_env() -> Self {
        let project_id = std::env::var("STORE_PROJECT_ID").unwrap_or_default();
        let api_key = std::env::var("STORE_API_KEY").unwrap_or_default();
        let collection = std::env::var("STORE_COLLECTION").unwrap_or_else(|_| "builds".into());

        let op_timeout_secs: u64 = std::env::var("STORE_OP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("STORE_OP_TIMEOUT_SECS must be a valid u64");

        Self {
            project_id,
            api_key,
            collection,
            op_timeout: Duration::from_secs(op_timeout_secs),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: String::new(),
            collection: "builds".into(),
            op_timeout: Duration::from_secs(10),
        }
    }
}
