//! `shopnav-shell` — replay navigations against a route table from the
//! command line. Useful for checking a route manifest before deploying it.

pub mod config;
pub mod script;

pub use config::ShellConfig;
pub use script::{run_script, Step};
