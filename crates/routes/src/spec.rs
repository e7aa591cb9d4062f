//! Route declaration surface.

use serde::{Deserialize, Serialize};

use crate::{RouteMetadata, ViewId};

/// One declared route, possibly with nested children.
///
/// Child patterns are relative to the parent unless they start with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub pattern: String,
    pub view: ViewId,
    #[serde(alias = "meta")]
    pub metadata: RouteMetadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteSpec>,
}

impl RouteSpec {
    pub fn new(
        pattern: impl Into<String>,
        view: impl Into<ViewId>,
        metadata: RouteMetadata,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            view: view.into(),
            metadata,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<RouteSpec>) -> Self {
        self.children = children;
        self
    }
}

/// Deployment-time route list, as loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    pub routes: Vec<RouteSpec>,
}

impl RouteManifest {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
