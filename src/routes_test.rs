use super::*;
use crate::net::types::{User, UserId};

// =============================================================
// Helpers
// =============================================================

fn restoring() -> SessionState {
    SessionState::default()
}

fn signed_out() -> SessionState {
    SessionState { user: None, loading: false }
}

fn signed_in() -> SessionState {
    SessionState {
        user: Some(User {
            id: UserId::Number(1),
            email: "a@b.com".to_owned(),
            full_name: None,
            role: None,
            extra: serde_json::Map::new(),
        }),
        loading: false,
    }
}

fn target_of(path: &str) -> Target {
    match_route(path).entry.target
}

// =============================================================
// Route table
// =============================================================

#[test]
fn public_paths_are_root_login_register() {
    assert!(is_public_path("/"));
    assert!(is_public_path("/login"));
    assert!(is_public_path("/register"));
    assert!(!is_public_path("/dashboard"));
    assert!(!is_public_path("/customers"));
    assert!(!is_public_path("/nonexistent"));
}

#[test]
fn table_ends_with_catch_all() {
    assert_eq!(ROUTE_TABLE.last(), Some(&CATCH_ALL));
    assert_eq!(CATCH_ALL_INDEX, ROUTE_TABLE.len() - 1);
}

#[test]
fn unmatched_path_falls_back_to_the_closing_entry() {
    let matched = match_route("/no/such/page");
    assert!(std::ptr::eq(matched.entry, &ROUTE_TABLE[CATCH_ALL_INDEX]));
    assert!(matched.params.is_empty());
    assert!(!matched.entry.requires_auth);
}

#[test]
fn protected_entries_are_exactly_the_app_pages() {
    let protected: Vec<&str> = ROUTE_TABLE.iter().filter(|e| e.requires_auth).map(|e| e.pattern).collect();
    assert_eq!(protected, vec!["/dashboard", "/assessment", "/assessment/results/:id", "/customers"]);
}

#[test]
fn each_known_path_matches_exactly_one_specific_entry() {
    let paths = ["/", "/login", "/register", "/dashboard", "/assessment", "/assessment/results/42", "/customers"];
    for path in paths {
        let specific = ROUTE_TABLE
            .iter()
            .filter(|e| e.pattern != "*" && match_pattern(e.pattern, path).is_some())
            .count();
        assert_eq!(specific, 1, "{path}");
    }
}

#[test]
fn match_route_maps_pages() {
    assert_eq!(target_of("/login"), Target::Page(Page::Login));
    assert_eq!(target_of("/register"), Target::Page(Page::Register));
    assert_eq!(target_of("/dashboard"), Target::Page(Page::Dashboard));
    assert_eq!(target_of("/assessment"), Target::Page(Page::Assessment));
    assert_eq!(target_of("/customers"), Target::Page(Page::Customers));
}

#[test]
fn match_route_captures_results_id() {
    let matched = match_route(&results_path("abc-123"));
    assert_eq!(matched.entry.target, Target::Page(Page::Results));
    assert_eq!(matched.param("id"), Some("abc-123"));
    assert_eq!(matched.param("other"), None);
}

#[test]
fn match_route_tolerates_trailing_slash() {
    assert_eq!(target_of("/dashboard/"), Target::Page(Page::Dashboard));
}

#[test]
fn match_route_results_requires_id() {
    assert_eq!(target_of("/assessment/results"), Target::RedirectTo("/dashboard"));
    assert_eq!(target_of("/assessment/results/1/extra"), Target::RedirectTo("/dashboard"));
}

#[test]
fn match_route_root_and_unknown_redirect_to_dashboard() {
    assert_eq!(match_route("/").entry.pattern, "/");
    assert_eq!(target_of("/"), Target::RedirectTo("/dashboard"));
    assert_eq!(match_route("/nonexistent").entry.pattern, "*");
    assert_eq!(target_of("/nonexistent"), Target::RedirectTo("/dashboard"));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_protected_page_waits_while_restoring() {
    assert_eq!(resolve("/customers", &restoring()), Resolution::Pending);
}

#[test]
fn resolve_public_page_renders_while_restoring() {
    assert!(matches!(resolve("/login", &restoring()), Resolution::Render(_)));
}

#[test]
fn resolve_protected_page_signed_out_redirects_with_replace() {
    assert_eq!(resolve("/customers", &signed_out()), Resolution::Redirect(Redirect::replace("/login")));
}

#[test]
fn resolve_protected_page_signed_in_renders() {
    let Resolution::Render(matched) = resolve("/assessment/results/5", &signed_in()) else {
        panic!("expected render");
    };
    assert_eq!(matched.entry.target, Target::Page(Page::Results));
    assert_eq!(matched.param("id"), Some("5"));
}

#[test]
fn resolve_root_redirects_regardless_of_session() {
    for state in [restoring(), signed_out(), signed_in()] {
        assert_eq!(resolve("/", &state), Resolution::Redirect(Redirect::replace("/dashboard")));
    }
}

#[test]
fn resolve_login_renders_when_signed_in() {
    assert!(matches!(resolve("/login", &signed_in()), Resolution::Render(_)));
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_root_signed_out_bounces_twice_to_login() {
    let settled = settle("/", &signed_out()).unwrap();
    assert_eq!(settled.visited, vec!["/", "/dashboard", "/login"]);
    assert_eq!(settled.final_path(), "/login");
    assert!(matches!(settled.resolution, Resolution::Render(ref m) if m.entry.target == Target::Page(Page::Login)));
}

#[test]
fn settle_customers_signed_out_ends_at_login() {
    let settled = settle("/customers", &signed_out()).unwrap();
    assert_eq!(settled.final_path(), "/login");
    assert_eq!(settled.visited, vec!["/customers", "/login"]);
}

#[test]
fn settle_unknown_path_signed_in_ends_at_dashboard() {
    let settled = settle("/nonexistent", &signed_in()).unwrap();
    assert_eq!(settled.visited, vec!["/nonexistent", "/dashboard"]);
    assert!(matches!(settled.resolution, Resolution::Render(ref m) if m.entry.target == Target::Page(Page::Dashboard)));
}

#[test]
fn settle_unknown_path_signed_out_ends_at_login() {
    let settled = settle("/nonexistent", &signed_out()).unwrap();
    assert_eq!(settled.final_path(), "/login");
}

#[test]
fn settle_root_while_restoring_stops_at_dashboard() {
    let settled = settle("/", &restoring()).unwrap();
    assert_eq!(settled.visited, vec!["/", "/dashboard"]);
    assert_eq!(settled.resolution, Resolution::Pending);
}

#[test]
fn settle_every_path_terminates() {
    let paths = ["/", "/login", "/register", "/dashboard", "/assessment", "/assessment/results/1", "/customers", "/x/y"];
    for state in [restoring(), signed_out(), signed_in()] {
        for path in paths {
            let settled = settle(path, &state).unwrap();
            assert!(settled.visited.len() <= 3, "{path}: {:?}", settled.visited);
        }
    }
}

#[test]
fn route_error_message_names_start() {
    let err = RouteError::RedirectLoop { start: "/a".to_owned(), hops: 9 };
    assert_eq!(err.to_string(), "redirect loop starting at \"/a\" after 9 hops");
}
