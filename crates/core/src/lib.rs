//! `shopnav-core` — navigation building blocks.
//!
//! This crate contains **pure** path primitives (no routing policy, no session state).

pub mod error;
pub mod id;
pub mod path;

pub use error::{PathError, PathResult};
pub use id::NavigationId;
pub use path::{normalize_path, path_segments, PathPattern, RouteParams, Segment};
