//! Per-route metadata.

use serde::{Deserialize, Serialize};

/// Whether a route renders inside the shared application shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutGroup {
    /// Rendered inside the main layout (sidebar, header, greeting).
    #[default]
    Main,
    /// Rendered on its own, e.g. the login screen. Never nested.
    Standalone,
}

/// Access and presentation metadata attached to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    /// Navigation requires an authenticated session. Defaults to `true` when
    /// omitted from a manifest.
    #[serde(default = "default_requires_auth")]
    pub requires_auth: bool,

    /// Title shown in the page header.
    #[serde(alias = "pageName")]
    pub display_name: String,

    /// Whether the shell shows the user greeting above this view.
    #[serde(default)]
    pub show_greeting: bool,

    #[serde(default)]
    pub layout_group: LayoutGroup,
}

fn default_requires_auth() -> bool {
    true
}

impl RouteMetadata {
    /// A view inside the main layout that needs a session.
    pub fn protected(display_name: impl Into<String>) -> Self {
        Self {
            requires_auth: true,
            display_name: display_name.into(),
            show_greeting: false,
            layout_group: LayoutGroup::Main,
        }
    }

    /// A view inside the main layout open to anonymous sessions.
    pub fn public(display_name: impl Into<String>) -> Self {
        Self {
            requires_auth: false,
            ..Self::protected(display_name)
        }
    }

    pub fn with_greeting(mut self) -> Self {
        self.show_greeting = true;
        self
    }

    pub fn standalone(mut self) -> Self {
        self.layout_group = LayoutGroup::Standalone;
        self
    }

    pub fn is_standalone(&self) -> bool {
        self.layout_group == LayoutGroup::Standalone
    }
}
