use std::sync::Arc;

use proptest::prelude::*;

use shopnav_guard::{
    DecisionReason, Disposition, GuardConfig, NavigationGuard, NavigationRequest, Navigator,
    SessionSnapshot, SessionStore,
};
use shopnav_routes::catalog::{default_routes, default_table};
use shopnav_routes::{RouteMetadata, RouteSpec, RouteTable};

fn guard(session: SessionSnapshot) -> NavigationGuard {
    NavigationGuard::new(
        Arc::new(default_table().unwrap()),
        GuardConfig::default(),
        Arc::new(session),
    )
}

/// Concrete paths for every protected route in the built-in catalog.
fn protected_paths() -> Vec<String> {
    let table = default_table().unwrap();
    table
        .routes()
        .map(|r| r.pattern().to_string().replace(":id", "17"))
        .filter(|p| table.resolve(p).is_some_and(|r| r.requires_auth()))
        .collect()
}

#[test]
fn anonymous_user_opening_products_lands_on_login() {
    let guard = guard(SessionSnapshot::anonymous());
    let evaluation = guard.evaluate(&NavigationRequest::to("/products"));

    assert_eq!(evaluation.hops[0].disposition, Disposition::redirect("/login"));
    assert_eq!(evaluation.hops[1].target, "/login");
    assert_eq!(evaluation.hops[1].disposition, Disposition::Allow);
    assert_eq!(evaluation.committed_path, "/login");
}

#[test]
fn signed_in_user_opening_login_lands_on_home() {
    let guard = guard(SessionSnapshot::with_token("jwt"));
    let evaluation = guard.evaluate(&NavigationRequest::to("/login"));

    assert_eq!(evaluation.hops[0].disposition, Disposition::redirect("/"));
    assert_eq!(evaluation.hops[1].reason, DecisionReason::Permitted);
    assert!(evaluation.hops[1].route.as_ref().unwrap().requires_auth);
    assert_eq!(evaluation.committed_path, "/");
}

#[test]
fn navigator_walks_a_full_login_session() {
    let store = Arc::new(SessionStore::new());
    let mut nav = Navigator::new(NavigationGuard::new(
        Arc::new(default_table().unwrap()),
        GuardConfig::default(),
        store.clone(),
    ));

    assert_eq!(nav.navigate("/purchase-orders/42").unwrap().path, "/login");

    store.sign_in("jwt");
    assert_eq!(nav.on_session_change().unwrap().unwrap().path, "/");

    let order = nav.navigate("/purchase-orders/42").unwrap();
    assert_eq!(order.path, "/purchase-orders/42");
    assert_eq!(order.route.as_ref().unwrap().params.get("id"), Some("42"));

    store.sign_out();
    assert_eq!(nav.on_session_change().unwrap().unwrap().path, "/login");
    assert_eq!(nav.history().count(), 4);
}

#[test]
fn custom_login_and_home_paths_are_honoured() {
    let mut routes = default_routes();
    routes.push(RouteSpec::new(
        "/auth/sign-in",
        "SignIn",
        RouteMetadata::public("Sign in").standalone(),
    ));
    let table = Arc::new(RouteTable::build(&routes).unwrap());
    let config = GuardConfig::new("/auth/sign-in", "/sales").unwrap();

    let anonymous = NavigationGuard::new(
        table.clone(),
        config.clone(),
        Arc::new(SessionSnapshot::anonymous()),
    );
    assert_eq!(
        anonymous.intercept(&NavigationRequest::to("/sales")),
        Disposition::redirect("/auth/sign-in")
    );

    let signed_in =
        NavigationGuard::new(table, config, Arc::new(SessionSnapshot::with_token("jwt")));
    assert_eq!(
        signed_in.intercept(&NavigationRequest::to("/auth/sign-in/")),
        Disposition::redirect("/sales")
    );
}

proptest! {
    /// Every protected route bounces an anonymous session to login.
    #[test]
    fn auth_gate_holds_for_every_protected_route(pick in any::<prop::sample::Index>()) {
        let paths = protected_paths();
        let path = &paths[pick.index(paths.len())];
        let guard = guard(SessionSnapshot::anonymous());

        prop_assert_eq!(
            guard.decide(&NavigationRequest::to(path.as_str()), &SessionSnapshot::anonymous()),
            Disposition::redirect("/login")
        );
    }

    /// A signed-in session passes through every protected route.
    #[test]
    fn signed_in_sessions_pass_through(
        pick in any::<prop::sample::Index>(),
        token in "[A-Za-z0-9]{1,32}",
    ) {
        let paths = protected_paths();
        let path = &paths[pick.index(paths.len())];
        let session = SessionSnapshot::with_token(token);

        let request = NavigationRequest::to(path.as_str());
        prop_assert_eq!(guard(session.clone()).decide(&request, &session), Disposition::Allow);
    }

    /// Unknown paths are never redirected, whatever the session.
    #[test]
    fn unknown_paths_are_allowed(
        segment in "[a-z]{3,10}",
        signed_in in any::<bool>(),
    ) {
        let path = format!("/zz-{segment}/unknown");
        let session = if signed_in {
            SessionSnapshot::with_token("jwt")
        } else {
            SessionSnapshot::anonymous()
        };

        prop_assert_eq!(guard(session).intercept(&NavigationRequest::to(path)), Disposition::Allow);
    }
}
