//! `shopnav-guard` — navigation access policy.
//!
//! Decoupled from rendering and from the token backend: the guard reads a
//! session snapshot through [`SessionSource`] and never writes to it.

pub mod config;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod request;
pub mod session;

pub use config::GuardConfig;
pub use error::{ConfigError, GuardAnomaly, NavigationError};
pub use guard::{DecisionReason, Evaluation, Hop, NavigationGuard};
pub use navigator::{CommittedNavigation, Navigator, PendingNavigation};
pub use request::{Disposition, NavigationRequest};
pub use session::{SessionSnapshot, SessionSource, SessionStore};
