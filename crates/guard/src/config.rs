//! Guard configuration.
//!
//! `login_path` and `home_path` are fixed at startup and never derived from
//! the route table.

use serde::Serialize;

use shopnav_core::normalize_path;

use crate::ConfigError;

pub const LOGIN_PATH_VAR: &str = "SHOPNAV_LOGIN_PATH";
pub const HOME_PATH_VAR: &str = "SHOPNAV_HOME_PATH";

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardConfig {
    login_path: String,
    home_path: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
        }
    }
}

impl GuardConfig {
    pub fn new(login_path: &str, home_path: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            login_path: validated(LOGIN_PATH_VAR, login_path)?,
            home_path: validated(HOME_PATH_VAR, home_path)?,
        })
    }

    /// Read overrides from `SHOPNAV_LOGIN_PATH` / `SHOPNAV_HOME_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let login = lookup(LOGIN_PATH_VAR).unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
        let home = lookup(HOME_PATH_VAR).unwrap_or_else(|| DEFAULT_HOME_PATH.to_string());
        Self::new(&login, &home)
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }
}

fn validated(key: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidPath {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(normalize_path(trimmed))
}
