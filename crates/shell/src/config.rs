//! Shell configuration (environment-driven).

use std::path::PathBuf;

use anyhow::Context;

use shopnav_guard::navigator::DEFAULT_HISTORY_LIMIT;
use shopnav_guard::GuardConfig;

pub const ROUTES_VAR: &str = "SHOPNAV_ROUTES";
pub const TOKEN_VAR: &str = "SHOPNAV_TOKEN";
pub const HISTORY_LIMIT_VAR: &str = "SHOPNAV_HISTORY_LIMIT";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// JSON route manifest; the built-in catalog is used when unset.
    pub routes_manifest: Option<PathBuf>,
    /// Session token restored at startup.
    pub token: Option<String>,
    pub history_limit: usize,
    pub guard: GuardConfig,
}

impl ShellConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let guard = GuardConfig::from_lookup(&lookup).context("invalid guard configuration")?;

        let history_limit = match lookup(HISTORY_LIMIT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| {
                    format!("{HISTORY_LIMIT_VAR} must be a positive integer, got '{raw}'")
                })?,
            None => DEFAULT_HISTORY_LIMIT,
        };

        Ok(Self {
            routes_manifest: lookup(ROUTES_VAR).filter(|p| !p.trim().is_empty()).map(PathBuf::from),
            token: lookup(TOKEN_VAR).filter(|t| !t.is_empty()),
            history_limit,
            guard,
        })
    }
}
