//! Immutable route table and path resolution.
//!
//! Resolution order for a concrete path:
//! 1. standalone routes (the login screen always wins when it matches),
//! 2. exact patterns (no parameter segment), by normalized path,
//! 3. parameterized patterns, in declaration order.

use std::collections::HashMap;

use serde::Serialize;

use shopnav_core::{normalize_path, path_segments, PathPattern, RouteParams};

use crate::{LayoutGroup, RouteManifest, RouteMetadata, RouteSpec, RouteTableError, ViewId};

/// A compiled route: full pattern plus the metadata it was declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: PathPattern,
    view: ViewId,
    metadata: RouteMetadata,
    parent: Option<usize>,
}

impl Route {
    /// Full pattern, including the parent prefix.
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> &ViewId {
        &self.view
    }

    pub fn metadata(&self) -> &RouteMetadata {
        &self.metadata
    }

    pub fn layout_group(&self) -> LayoutGroup {
        self.metadata.layout_group
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    route: &'a Route,
    params: RouteParams,
    ancestors: Vec<&'a Route>,
}

impl<'a> Resolution<'a> {
    pub fn route(&self) -> &'a Route {
        self.route
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Enclosing routes, outermost first.
    pub fn ancestors(&self) -> &[&'a Route] {
        &self.ancestors
    }

    /// A protected layout protects everything nested in it.
    pub fn requires_auth(&self) -> bool {
        self.route.metadata.requires_auth || self.ancestors.iter().any(|r| r.metadata.requires_auth)
    }

    pub fn layout_group(&self) -> LayoutGroup {
        self.route.layout_group()
    }

    pub fn summary(&self) -> ResolvedSummary {
        ResolvedSummary {
            pattern: self.route.pattern.to_string(),
            view: self.route.view.clone(),
            display_name: self.route.metadata.display_name.clone(),
            layout_group: self.layout_group(),
            requires_auth: self.requires_auth(),
            params: self.params.clone(),
        }
    }
}

/// Owned, serializable view of a [`Resolution`] for logs and audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSummary {
    pub pattern: String,
    pub view: ViewId,
    pub display_name: String,
    pub layout_group: LayoutGroup,
    pub requires_auth: bool,
    pub params: RouteParams,
}

/// Immutable lookup structure built once at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    standalone: Vec<usize>,
    exact: HashMap<String, usize>,
    parameterized: Vec<usize>,
}

impl RouteTable {
    /// Compile route declarations.
    ///
    /// Fails if two siblings collapse to the same normalized pattern, if a
    /// pattern is malformed, or if a standalone route is nested.
    pub fn build(specs: &[RouteSpec]) -> Result<Self, RouteTableError> {
        let mut table = Self::default();
        table.add_siblings(specs, None, &PathPattern::root())?;

        tracing::debug!(
            routes = table.routes.len(),
            standalone = table.standalone.len(),
            parameterized = table.parameterized.len(),
            "route table built"
        );
        Ok(table)
    }

    pub fn from_manifest(manifest: &RouteManifest) -> Result<Self, RouteTableError> {
        Self::build(&manifest.routes)
    }

    pub fn from_manifest_json(text: &str) -> Result<Self, RouteTableError> {
        let manifest = RouteManifest::from_json(text)?;
        Self::from_manifest(&manifest)
    }

    fn add_siblings(
        &mut self,
        specs: &[RouteSpec],
        parent: Option<usize>,
        base: &PathPattern,
    ) -> Result<(), RouteTableError> {
        let mut seen: HashMap<String, &ViewId> = HashMap::new();

        for spec in specs {
            if parent.is_some() && spec.metadata.is_standalone() {
                return Err(RouteTableError::NestedStandalone {
                    pattern: spec.pattern.clone(),
                    parent: base.to_string(),
                });
            }

            let pattern = base
                .join(&spec.pattern)
                .map_err(|source| RouteTableError::InvalidPattern {
                    pattern: spec.pattern.clone(),
                    source,
                })?;

            let key = pattern.normalized_key();
            if let Some(first) = seen.get(&key) {
                return Err(RouteTableError::ConfigurationConflict {
                    parent: base.to_string(),
                    pattern: key,
                    first: (*first).clone(),
                    second: spec.view.clone(),
                });
            }
            seen.insert(key, &spec.view);

            let index = self.routes.len();
            self.routes.push(Route {
                pattern: pattern.clone(),
                view: spec.view.clone(),
                metadata: spec.metadata.clone(),
                parent,
            });

            // Children register before their parent so that a `""` child
            // shadows the layout route sharing its path.
            self.add_siblings(&spec.children, Some(index), &pattern)?;
            self.register(index);
        }

        Ok(())
    }

    fn register(&mut self, index: usize) {
        let route = &self.routes[index];
        if route.metadata.is_standalone() {
            self.standalone.push(index);
        } else if route.pattern.is_parameterized() {
            self.parameterized.push(index);
        } else {
            self.exact.entry(route.pattern.normalized_key()).or_insert(index);
        }
    }

    /// Look up the route a concrete path navigates to.
    ///
    /// Returns `None` when nothing matches; the caller decides what an unknown
    /// path means.
    pub fn resolve(&self, path: &str) -> Option<Resolution<'_>> {
        let segments = path_segments(path);

        let standalone = self.standalone.iter().find_map(|&i| {
            self.routes[i]
                .pattern
                .matches(&segments)
                .map(|params| (i, params))
        });
        if let Some((index, params)) = standalone {
            return Some(self.resolution(index, params));
        }

        if let Some(&index) = self.exact.get(&normalize_path(path)) {
            return Some(self.resolution(index, RouteParams::default()));
        }

        self.parameterized.iter().find_map(|&i| {
            self.routes[i]
                .pattern
                .matches(&segments)
                .map(|params| self.resolution(i, params))
        })
    }

    fn resolution(&self, index: usize, params: RouteParams) -> Resolution<'_> {
        let route = &self.routes[index];

        let mut ancestors = Vec::new();
        let mut cursor = route.parent;
        while let Some(i) = cursor {
            ancestors.push(&self.routes[i]);
            cursor = self.routes[i].parent;
        }
        ancestors.reverse();

        Resolution {
            route,
            params,
            ancestors,
        }
    }

    /// All routes in declaration order (parents before children).
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
