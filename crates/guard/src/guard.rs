//! The navigation guard.
//!
//! Decision table, first match wins:
//!
//! | condition                                   | disposition          |
//! |---------------------------------------------|----------------------|
//! | target unresolved                           | `Allow`              |
//! | route requires auth, session anonymous      | `RedirectTo(login)`  |
//! | target is the login path, session signed in | `RedirectTo(home)`   |
//! | otherwise                                   | `Allow`              |
//!
//! A redirect is re-checked once before it is returned. If that re-check
//! redirects again, or a redirect points back into the chain, the table is
//! misconfigured: the original target is allowed and the anomaly is logged.

use std::sync::Arc;

use serde::Serialize;

use shopnav_core::normalize_path;
use shopnav_routes::{ResolvedSummary, RouteTable};

use crate::{
    Disposition, GuardAnomaly, GuardConfig, NavigationRequest, SessionSnapshot, SessionSource,
};

/// Why a single hop produced its disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// No route matched; not-found handling belongs to the view layer.
    UnresolvedPath,
    AuthenticationRequired,
    AlreadyAuthenticated,
    Permitted,
}

/// One evaluation of the decision table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub target: String,
    pub reason: DecisionReason,
    pub disposition: Disposition,
    pub route: Option<ResolvedSummary>,
}

/// Full record of a guarded decision chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub request: NavigationRequest,
    pub hops: Vec<Hop>,
    /// Finalized disposition handed to the host router.
    pub disposition: Disposition,
    /// Path the host should commit.
    pub committed_path: String,
    pub anomaly: Option<GuardAnomaly>,
}

pub struct NavigationGuard {
    table: Arc<RouteTable>,
    config: GuardConfig,
    session: Arc<dyn SessionSource>,
}

impl NavigationGuard {
    pub fn new(
        table: Arc<RouteTable>,
        config: GuardConfig,
        session: Arc<dyn SessionSource>,
    ) -> Self {
        Self {
            table,
            config,
            session,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Host-facing entry point, called before every committed navigation.
    pub fn intercept(&self, request: &NavigationRequest) -> Disposition {
        self.evaluate(request).disposition
    }

    /// Apply the decision table once, without following redirects.
    pub fn decide(&self, request: &NavigationRequest, session: &SessionSnapshot) -> Disposition {
        self.hop(&request.target_path, session).disposition
    }

    /// Run the bounded redirect chain and report every hop.
    pub fn evaluate(&self, request: &NavigationRequest) -> Evaluation {
        let session = self.session.snapshot();
        let original = normalize_path(&request.target_path);

        let first = self.hop(&original, &session);
        let Disposition::RedirectTo(redirect) = first.disposition.clone() else {
            return Evaluation {
                request: request.clone(),
                hops: vec![first],
                disposition: Disposition::Allow,
                committed_path: request.target_path.clone(),
                anomaly: None,
            };
        };

        let mut chain = vec![original];
        let mut hops = vec![first];

        if chain.contains(&redirect) {
            chain.push(redirect);
            let anomaly = GuardAnomaly::RedirectCycle { chain };
            return self.settle_on_original(request, hops, anomaly);
        }
        chain.push(redirect.clone());

        let second = self.hop(&redirect, &session);
        let next = second.disposition.redirect_target().map(str::to_string);
        hops.push(second);

        match next {
            None => Evaluation {
                request: request.clone(),
                hops,
                disposition: Disposition::RedirectTo(redirect.clone()),
                committed_path: redirect,
                anomaly: None,
            },
            // With a single snapshot the only way to redirect twice is to
            // come back to a path already in the chain.
            Some(next) => {
                chain.push(next);
                let anomaly = GuardAnomaly::RedirectCycle { chain };
                self.settle_on_original(request, hops, anomaly)
            }
        }
    }

    fn settle_on_original(
        &self,
        request: &NavigationRequest,
        hops: Vec<Hop>,
        anomaly: GuardAnomaly,
    ) -> Evaluation {
        tracing::warn!(
            target_path = %request.target_path,
            anomaly = %anomaly,
            login_path = %self.config.login_path(),
            home_path = %self.config.home_path(),
            "redirect chain did not settle; allowing original target"
        );

        Evaluation {
            request: request.clone(),
            hops,
            disposition: Disposition::Allow,
            committed_path: request.target_path.clone(),
            anomaly: Some(anomaly),
        }
    }

    fn hop(&self, target: &str, session: &SessionSnapshot) -> Hop {
        let target = normalize_path(target);

        let Some(resolution) = self.table.resolve(&target) else {
            tracing::debug!(target_path = %target, "no route matched; allowing");
            return Hop {
                target,
                reason: DecisionReason::UnresolvedPath,
                disposition: Disposition::Allow,
                route: None,
            };
        };

        let authenticated = session.is_authenticated();
        let (reason, disposition) = if resolution.requires_auth() && !authenticated {
            (
                DecisionReason::AuthenticationRequired,
                Disposition::redirect(self.config.login_path()),
            )
        } else if target == self.config.login_path() && authenticated {
            (
                DecisionReason::AlreadyAuthenticated,
                Disposition::redirect(self.config.home_path()),
            )
        } else {
            (DecisionReason::Permitted, Disposition::Allow)
        };

        tracing::debug!(
            target_path = %target,
            view = %resolution.route().view(),
            layout = ?resolution.layout_group(),
            authenticated,
            ?reason,
            "navigation decided"
        );

        Hop {
            target,
            reason,
            disposition,
            route: Some(resolution.summary()),
        }
    }
}

impl core::fmt::Debug for NavigationGuard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("routes", &self.table.len())
            .field("config", &self.config)
            .finish()
    }
}
