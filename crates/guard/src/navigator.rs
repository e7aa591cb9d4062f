//! Host-side navigation loop.
//!
//! request -> guard -> commit. Every request gets a generation stamp; only the
//! newest pending navigation may commit, so a decision made for a superseded
//! request is dropped without touching the current route.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopnav_core::NavigationId;
use shopnav_routes::ResolvedSummary;

use crate::{Disposition, Evaluation, NavigationError, NavigationGuard, NavigationRequest};

pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A guarded decision waiting to be applied.
#[derive(Debug, Serialize)]
pub struct PendingNavigation {
    pub id: NavigationId,
    #[serde(skip)]
    generation: u64,
    pub evaluation: Evaluation,
}

/// A navigation that took effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommittedNavigation {
    pub id: NavigationId,
    pub requested: String,
    pub path: String,
    pub disposition: Disposition,
    pub route: Option<ResolvedSummary>,
    pub committed_at: DateTime<Utc>,
}

impl CommittedNavigation {
    pub fn was_redirected(&self) -> bool {
        !self.disposition.is_allow()
    }
}

#[derive(Debug)]
pub struct Navigator {
    guard: NavigationGuard,
    generation: u64,
    current: Option<CommittedNavigation>,
    history: VecDeque<CommittedNavigation>,
    history_limit: usize,
}

impl Navigator {
    pub fn new(guard: NavigationGuard) -> Self {
        Self::with_history_limit(guard, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(guard: NavigationGuard, history_limit: usize) -> Self {
        Self {
            guard,
            generation: 0,
            current: None,
            history: VecDeque::new(),
            history_limit: history_limit.max(1),
        }
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    pub fn current(&self) -> Option<&CommittedNavigation> {
        self.current.as_ref()
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.path.as_str())
    }

    /// Committed navigations, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &CommittedNavigation> {
        self.history.iter()
    }

    /// Run the guard for `target`. Supersedes any navigation still pending.
    pub fn begin(&mut self, target: &str) -> PendingNavigation {
        let evaluation = self.evaluate(target);
        self.stamp(evaluation)
    }

    fn evaluate(&self, target: &str) -> Evaluation {
        let mut request = NavigationRequest::to(target);
        if let Some(source) = self.current_path() {
            request = request.from_source(source);
        }
        self.guard.evaluate(&request)
    }

    fn stamp(&mut self, evaluation: Evaluation) -> PendingNavigation {
        self.generation += 1;

        let id = NavigationId::new();
        tracing::debug!(
            navigation_id = %id,
            target_path = %evaluation.request.target_path,
            committed_path = %evaluation.committed_path,
            "navigation pending"
        );

        PendingNavigation {
            id,
            generation: self.generation,
            evaluation,
        }
    }

    /// Apply a pending navigation unless a newer one has been requested since.
    pub fn commit(
        &mut self,
        pending: PendingNavigation,
    ) -> Result<CommittedNavigation, NavigationError> {
        if pending.generation != self.generation {
            tracing::warn!(
                navigation_id = %pending.id,
                target_path = %pending.evaluation.request.target_path,
                "discarding superseded navigation"
            );
            return Err(NavigationError::Superseded { id: pending.id });
        }

        let Evaluation {
            request,
            disposition,
            committed_path,
            ..
        } = pending.evaluation;

        let route = self
            .guard
            .table()
            .resolve(&committed_path)
            .map(|r| r.summary());

        let committed = CommittedNavigation {
            id: pending.id,
            requested: request.target_path,
            path: committed_path,
            disposition,
            route,
            committed_at: Utc::now(),
        };

        tracing::info!(
            navigation_id = %committed.id,
            requested = %committed.requested,
            path = %committed.path,
            redirected = committed.was_redirected(),
            "navigation committed"
        );

        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(committed.clone());
        self.current = Some(committed.clone());

        Ok(committed)
    }

    /// Guard and commit in one step.
    pub fn navigate(&mut self, target: &str) -> Result<CommittedNavigation, NavigationError> {
        let pending = self.begin(target);
        self.commit(pending)
    }

    /// Re-check the current route after an external login or logout.
    ///
    /// Returns the new navigation if the guard moved the user (signed out on a
    /// protected view, or signed in while sitting on the login view). A
    /// re-check that leaves the user in place does not supersede a navigation
    /// still pending.
    pub fn on_session_change(
        &mut self,
    ) -> Result<Option<CommittedNavigation>, NavigationError> {
        let Some(path) = self.current_path().map(str::to_string) else {
            return Ok(None);
        };

        let evaluation = self.evaluate(&path);
        if evaluation.disposition.is_allow() {
            return Ok(None);
        }

        tracing::info!(
            from = %path,
            to = %evaluation.committed_path,
            "session changed; redirecting"
        );
        let pending = self.stamp(evaluation);
        self.commit(pending).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{GuardConfig, SessionStore};
    use shopnav_routes::catalog::default_table;

    fn navigator(store: Arc<SessionStore>) -> Navigator {
        Navigator::new(NavigationGuard::new(
            Arc::new(default_table().unwrap()),
            GuardConfig::default(),
            store,
        ))
    }

    #[test]
    fn superseded_navigation_is_discarded() {
        let mut nav = navigator(Arc::new(SessionStore::new()));
        nav.navigate("/login").unwrap();

        let stale = nav.begin("/sales");
        let fresh = nav.begin("/login?next=reports");

        let err = nav.commit(stale).unwrap_err();
        assert!(matches!(err, NavigationError::Superseded { .. }));
        assert_eq!(nav.current_path(), Some("/login"));
        assert_eq!(nav.history().count(), 1);

        let committed = nav.commit(fresh).unwrap();
        assert_eq!(committed.path, "/login?next=reports");
    }

    #[test]
    fn request_carries_the_current_path_as_source() {
        let mut nav = navigator(Arc::new(SessionStore::restored(Some("jwt".to_string()))));
        nav.navigate("/sales").unwrap();

        let pending = nav.begin("/payments");
        assert_eq!(pending.evaluation.request.source_path.as_deref(), Some("/sales"));
    }

    #[test]
    fn logout_on_protected_view_moves_to_login() {
        let store = Arc::new(SessionStore::new());
        store.sign_in("jwt");
        let mut nav = navigator(store.clone());

        nav.navigate("/reports/profit-loss").unwrap();
        assert!(nav.on_session_change().unwrap().is_none());

        store.sign_out();
        let moved = nav.on_session_change().unwrap().unwrap();
        assert_eq!(moved.path, "/login");
        assert_eq!(moved.requested, "/reports/profit-loss");
        assert!(moved.was_redirected());
    }

    #[test]
    fn login_while_on_login_view_moves_home() {
        let store = Arc::new(SessionStore::new());
        let mut nav = navigator(store.clone());

        let first = nav.navigate("/sales").unwrap();
        assert_eq!(first.path, "/login");

        store.sign_in("jwt");
        let moved = nav.on_session_change().unwrap().unwrap();
        assert_eq!(moved.path, "/");
        assert_eq!(moved.route.unwrap().view.as_str(), "Dashboard");
    }

    #[test]
    fn token_refresh_keeps_pending_navigation_alive() {
        let store = Arc::new(SessionStore::new());
        store.sign_in("jwt");
        let mut nav = navigator(store.clone());
        nav.navigate("/sales").unwrap();

        let pending = nav.begin("/payments");
        store.sign_in("jwt-refreshed");
        assert!(nav.on_session_change().unwrap().is_none());

        let committed = nav.commit(pending).unwrap();
        assert_eq!(committed.path, "/payments");
        assert_eq!(nav.current_path(), Some("/payments"));
    }

    #[test]
    fn logout_redirect_supersedes_pending_navigation() {
        let store = Arc::new(SessionStore::new());
        store.sign_in("jwt");
        let mut nav = navigator(store.clone());
        nav.navigate("/sales").unwrap();

        let pending = nav.begin("/payments");
        store.sign_out();
        let moved = nav.on_session_change().unwrap().unwrap();
        assert_eq!(moved.path, "/login");

        let err = nav.commit(pending).unwrap_err();
        assert!(matches!(err, NavigationError::Superseded { .. }));
        assert_eq!(nav.current_path(), Some("/login"));
    }

    #[test]
    fn history_is_bounded() {
        let store = Arc::new(SessionStore::restored(Some("jwt".to_string())));
        let mut nav = Navigator::with_history_limit(
            NavigationGuard::new(Arc::new(default_table().unwrap()), GuardConfig::default(), store),
            2,
        );

        for path in ["/sales", "/payments", "/expenses"] {
            nav.navigate(path).unwrap();
        }
        let paths: Vec<&str> = nav.history().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/payments", "/expenses"]);
    }
}
