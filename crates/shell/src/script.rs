//! Navigation scripts.
//!
//! One step per line:
//!
//! ```text
//! /sales              navigate
//! sign-in <token>     external login, then re-check the current view
//! sign-out            external logout, then re-check the current view
//! # comment
//! ```

use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::Serialize;

use shopnav_guard::{CommittedNavigation, Navigator, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Navigate(String),
    SignIn(String),
    SignOut,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.starts_with('/') {
            return Ok(Self::Navigate(line.to_string()));
        }

        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("sign-in"), Some(token), None) => Ok(Self::SignIn(token.to_string())),
            (Some("sign-out"), None, None) => Ok(Self::SignOut),
            _ => bail!("unrecognized step '{line}'"),
        }
    }
}

/// Parse a script, skipping blank lines and `#` comments.
pub fn parse_script(text: &str) -> anyhow::Result<Vec<Step>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(n, line)| line.parse().with_context(|| format!("line {}", n + 1)))
        .collect()
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    step: &'static str,
    #[serde(flatten)]
    navigation: &'a CommittedNavigation,
}

/// Run steps in order, writing one JSON line per committed navigation.
pub fn run_script(
    navigator: &mut Navigator,
    session: &SessionStore,
    steps: &[Step],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for step in steps {
        let (label, committed) = match step {
            Step::Navigate(path) => ("navigate", Some(navigator.navigate(path)?)),
            Step::SignIn(token) => {
                session.sign_in(token.as_str());
                ("sign_in", navigator.on_session_change()?)
            }
            Step::SignOut => {
                session.sign_out();
                ("sign_out", navigator.on_session_change()?)
            }
        };

        if let Some(navigation) = committed {
            serde_json::to_writer(&mut *out, &Output { step: label, navigation: &navigation })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
