//! `shopnav-routes` — the route table.
//!
//! Routes are declared once at startup (in code or as a JSON manifest) and
//! compiled into an immutable [`RouteTable`]. Nothing here knows about
//! sessions or redirects; see `shopnav-guard` for the access policy.

pub mod catalog;
pub mod error;
pub mod metadata;
pub mod spec;
pub mod table;
pub mod view;

pub use error::RouteTableError;
pub use metadata::{LayoutGroup, RouteMetadata};
pub use spec::{RouteManifest, RouteSpec};
pub use table::{Resolution, ResolvedSummary, Route, RouteTable};
pub use view::ViewId;
