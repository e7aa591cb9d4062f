//! Session state as seen by the guard.
//!
//! The token is owned by an external login/logout flow. The guard only asks
//! whether one is present, and it asks exactly once per decision chain.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// Read-only access to the current session.
pub trait SessionSource: Send + Sync {
    /// Take one consistent snapshot of the session.
    fn snapshot(&self) -> SessionSnapshot;
}

impl<T: SessionSource + ?Sized> SessionSource for Arc<T> {
    fn snapshot(&self) -> SessionSnapshot {
        (**self).snapshot()
    }
}

/// Point-in-time view of the session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    token: Option<Arc<String>>,
}

impl SessionSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(Arc::new(token.into())),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(String::as_str)
    }

    /// A token is present and non-empty. Its contents are never inspected.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }
}

impl core::fmt::Debug for SessionSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionSnapshot")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionSource for SessionSnapshot {
    fn snapshot(&self) -> SessionSnapshot {
        self.clone()
    }
}

/// Process-wide session holder.
///
/// Reads are a single atomic load; sign-in and sign-out are single atomic
/// stores, so a concurrent logout can never be observed half-applied.
#[derive(Default)]
pub struct SessionStore {
    token: ArcSwapOption<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a session persisted by the host (e.g. from local storage).
    pub fn restored(token: Option<String>) -> Self {
        Self {
            token: ArcSwapOption::new(token.map(Arc::new)),
        }
    }

    /// Called by the external login flow after the backend issued a token.
    pub fn sign_in(&self, token: impl Into<String>) {
        self.token.store(Some(Arc::new(token.into())));
        tracing::info!("session token stored");
    }

    /// Called by the external logout flow.
    pub fn sign_out(&self) {
        self.token.store(None);
        tracing::info!("session token cleared");
    }

    pub fn token(&self) -> Option<Arc<String>> {
        self.token.load_full()
    }
}

impl core::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.snapshot().is_authenticated())
            .finish()
    }
}

impl SessionSource for SessionStore {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token.load_full(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_authenticated() {
        assert!(!SessionSnapshot::anonymous().is_authenticated());
        assert!(!SessionSnapshot::with_token("").is_authenticated());
        assert!(SessionSnapshot::with_token("abc").is_authenticated());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_sign_out() {
        let store = SessionStore::new();
        store.sign_in("token-1");

        let snapshot = store.snapshot();
        store.sign_out();

        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.token(), Some("token-1"));
        assert!(!store.snapshot().is_authenticated());
    }

    #[test]
    fn restored_session_keeps_its_token() {
        let store = SessionStore::restored(Some("persisted".to_string()));
        assert_eq!(store.token().as_deref().map(String::as_str), Some("persisted"));
        assert!(!SessionStore::restored(None).snapshot().is_authenticated());
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let rendered = format!("{:?}", SessionSnapshot::with_token("secret-value"));
        assert!(!rendered.contains("secret-value"));
    }

    #[test]
    fn concurrent_sign_in_and_out_always_yield_whole_snapshots() {
        let store = Arc::new(SessionStore::new());
        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..1_000 {
                    store.sign_in("token");
                    store.sign_out();
                }
            })
        };

        for _ in 0..1_000 {
            let snapshot = store.snapshot();
            match snapshot.token() {
                Some(t) => assert_eq!(t, "token"),
                None => assert!(!snapshot.is_authenticated()),
            }
        }
        writer.join().unwrap();
    }
}
