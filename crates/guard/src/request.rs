use serde::Serialize;

/// One navigation attempt. Created per request and discarded after the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    pub target_path: String,
    pub source_path: Option<String>,
}

impl NavigationRequest {
    pub fn to(target_path: impl Into<String>) -> Self {
        Self {
            target_path: target_path.into(),
            source_path: None,
        }
    }

    pub fn from_source(mut self, source_path: impl Into<String>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }
}

/// Guard output for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "disposition", content = "path", rename_all = "snake_case")]
pub enum Disposition {
    Allow,
    RedirectTo(String),
}

impl Disposition {
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::RedirectTo(path.into())
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectTo(path) => Some(path),
        }
    }
}
