use serde::Serialize;
use thiserror::Error;

use shopnav_core::NavigationId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be an absolute path starting with '/', got '{value}'")]
    InvalidPath { key: String, value: String },
}

/// Misconfiguration detected while following a redirect chain.
///
/// Never fatal: the guard allows the original target and reports the anomaly.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardAnomaly {
    /// A redirect pointed back at a path already visited in this chain.
    #[error("redirect cycle: {}", .chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// A newer navigation was requested before this one was committed.
    #[error("navigation {id} was superseded before commit")]
    Superseded { id: NavigationId },
}
