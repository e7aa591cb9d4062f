//! Path patterns and concrete path normalization.
//!
//! A pattern is a `/`-separated list of segments where at most one segment may be
//! a positional parameter written `:name`. Concrete paths are normalized before
//! matching: query and fragment are dropped, empty segments are ignored.

use serde::Serialize;

use crate::error::{PathError, PathResult};

/// One segment of a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn parse(raw: &str, pattern: &str) -> PathResult<Self> {
        match raw.strip_prefix(':') {
            Some("") => Err(PathError::empty_parameter_name(pattern)),
            Some(name) => Ok(Self::Param(name.to_string())),
            None => Ok(Self::Literal(raw.to_string())),
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param(_))
    }
}

/// A parsed route pattern such as `/purchase-orders/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// The root pattern `/`.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a pattern. Leading, trailing and repeated `/` are insignificant.
    pub fn parse(raw: &str) -> PathResult<Self> {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| Segment::parse(s, raw))
            .collect::<PathResult<Vec<_>>>()?;

        Self::from_segments(segments, raw)
    }

    /// Resolve a child pattern against this (parent) pattern.
    ///
    /// A child starting with `/` is absolute and ignores the parent.
    pub fn join(&self, child: &str) -> PathResult<Self> {
        let child_pattern = Self::parse(child)?;
        if child.starts_with('/') {
            return Ok(child_pattern);
        }

        let mut segments = self.segments.clone();
        segments.extend(child_pattern.segments);
        let display = format!("{}/{}", self.as_string().trim_end_matches('/'), child);
        Self::from_segments(segments, &display)
    }

    fn from_segments(segments: Vec<Segment>, raw: &str) -> PathResult<Self> {
        if segments.iter().filter(|s| s.is_param()).count() > 1 {
            return Err(PathError::multiple_parameters(raw));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_parameterized(&self) -> bool {
        self.segments.iter().any(Segment::is_param)
    }

    pub fn param_name(&self) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Canonical text form, e.g. `/purchase-orders/:id`.
    pub fn as_string(&self) -> String {
        self.render(|name| format!(":{name}"))
    }

    /// Form used for sibling uniqueness: parameter names are erased, so
    /// `/orders/:id` and `/orders/:orderId` share a key.
    pub fn normalized_key(&self) -> String {
        self.render(|_| ":".to_string())
    }

    fn render(&self, param: impl Fn(&str) -> String) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => out.push_str(&param(name)),
            }
        }
        out
    }

    /// Match already-normalized concrete segments against this pattern.
    ///
    /// Literals must be equal (case-sensitive); the parameter segment binds any
    /// non-empty segment.
    pub fn matches(&self, concrete: &[&str]) -> Option<RouteParams> {
        if concrete.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, value) in self.segments.iter().zip(concrete) {
            match segment {
                Segment::Literal(lit) if lit.as_str() == *value => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if value.is_empty() => return None,
                Segment::Param(name) => params.bind(name, value),
            }
        }
        Some(params)
    }
}

impl core::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Parameter bound while matching a pattern (at most one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    #[serde(flatten)]
    binding: Option<ParamBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ParamBinding {
    name: String,
    value: String,
}

impl RouteParams {
    fn bind(&mut self, name: &str, value: &str) {
        self.binding = Some(ParamBinding {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.binding
            .as_ref()
            .filter(|b| b.name == name)
            .map(|b| b.value.as_str())
    }
}

/// Split a concrete navigation path into its significant segments.
///
/// Query string and fragment are dropped; empty segments are ignored.
pub fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Canonical form of a concrete path (`/a/b`, or `/` for the root).
pub fn normalize_path(path: &str) -> String {
    let segments = path_segments(path);
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
