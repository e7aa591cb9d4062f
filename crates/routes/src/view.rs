use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Opaque reference to a renderable view.
///
/// The view layer owns what the name means; the route table only carries it
/// through to the host router.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(Cow<'static, str>);

impl ViewId {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ViewId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ViewId {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
