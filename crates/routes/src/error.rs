use thiserror::Error;

use shopnav_core::PathError;

use crate::ViewId;

/// Route table construction failure.
///
/// All variants are startup-time configuration errors: the table is never
/// partially built.
#[derive(Debug, Error)]
pub enum RouteTableError {
    /// Two siblings normalize to the same pattern, so one of them is unreachable.
    #[error(
        "configuration conflict under '{parent}': '{pattern}' declared by '{first}' and '{second}'"
    )]
    ConfigurationConflict {
        parent: String,
        pattern: String,
        first: ViewId,
        second: ViewId,
    },

    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PathError,
    },

    #[error("standalone route '{pattern}' cannot be nested under '{parent}'")]
    NestedStandalone { pattern: String, parent: String },

    #[error("malformed route manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
