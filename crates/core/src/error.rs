use std::fmt;

/// Which fixed domain a rejected key was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDomain {
    /// Model keys, e.g. `"sports"`.
    Model,
    /// Paint color values, e.g. `"#ff3b30"`.
    Color,
    /// Trim slot names, e.g. `"wheel"`.
    TrimSlot,
}

impl fmt::Display for KeyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDomain::Model => write!(f, "model"),
            KeyDomain::Color => write!(f, "color"),
            KeyDomain::TrimSlot => write!(f, "trim slot"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CoreError {
    /// Caller supplied a key outside one of the fixed selection domains.
    ///
    /// Fatal to the single call; the caller recovers by re-presenting valid
    /// choices. Never silently coerced.
    #[error("Invalid {domain} key: {key:?}")]
    InvalidKey { domain: KeyDomain, key: String },
}

impl CoreError {
    pub fn invalid_key(domain: KeyDomain, key: impl Into<String>) -> Self {
        CoreError::InvalidKey {
            domain,
            key: key.into(),
        }
    }
}
