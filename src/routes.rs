//! Route table and navigation policy.
//!
//! DESIGN
//! ======
//! `ROUTE_TABLE` is the single ordered list of paths the app knows about.
//! `app::App` mounts the same paths with `leptos_router`; this module keeps a
//! browser-free model of them so the access rules (public vs protected, root
//! and catch-all redirects, the session guard) can be checked in unit tests.
//!
//! The root and catch-all entries redirect to `/dashboard` without looking at
//! the session. For a signed-out visitor the guard then bounces `/dashboard`
//! to `/login`, so `/` takes two hops.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::SessionState;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ASSESSMENT_PATH: &str = "/assessment";
pub const RESULTS_PATTERN: &str = "/assessment/results/:id";
pub const CUSTOMERS_PATH: &str = "/customers";

/// Paths the session guard never redirects away from.
pub const PUBLIC_PATHS: [&str; 3] = [ROOT_PATH, LOGIN_PATH, REGISTER_PATH];

/// Upper bound on redirects followed by [`settle`].
pub const MAX_REDIRECT_HOPS: usize = 8;

#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Concrete path for one assessment's results page.
#[must_use]
pub fn results_path(id: &str) -> String {
    format!("/assessment/results/{id}")
}

/// Page views the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Assessment,
    Results,
    Customers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Page(Page),
    RedirectTo(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// `/`-separated segments; `:name` captures one segment, `*` matches anything.
    pub pattern: &'static str,
    pub requires_auth: bool,
    pub target: Target,
}

const CATCH_ALL: RouteEntry = RouteEntry { pattern: "*", requires_auth: false, target: Target::RedirectTo(DASHBOARD_PATH) };

/// Ordered route table. First match wins; the final entry matches everything.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { pattern: LOGIN_PATH, requires_auth: false, target: Target::Page(Page::Login) },
    RouteEntry { pattern: REGISTER_PATH, requires_auth: false, target: Target::Page(Page::Register) },
    RouteEntry { pattern: DASHBOARD_PATH, requires_auth: true, target: Target::Page(Page::Dashboard) },
    RouteEntry { pattern: ASSESSMENT_PATH, requires_auth: true, target: Target::Page(Page::Assessment) },
    RouteEntry { pattern: RESULTS_PATTERN, requires_auth: true, target: Target::Page(Page::Results) },
    RouteEntry { pattern: CUSTOMERS_PATH, requires_auth: true, target: Target::Page(Page::Customers) },
    RouteEntry { pattern: ROOT_PATH, requires_auth: false, target: Target::RedirectTo(DASHBOARD_PATH) },
    CATCH_ALL,
];

/// A navigation request produced by the router or the session guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl Redirect {
    #[must_use]
    pub const fn push(to: &'static str) -> Self {
        Self { to, replace: false }
    }

    #[must_use]
    pub const fn replace(to: &'static str) -> Self {
        Self { to, replace: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    if pattern == "*" {
        return Some(Vec::new());
    }
    let expected: Vec<&'static str> = segments(pattern).collect();
    let actual: Vec<&str> = segments(path).collect();
    if expected.len() != actual.len() {
        return None;
    }
    let mut params = Vec::new();
    for (want, got) in expected.into_iter().zip(actual) {
        if let Some(name) = want.strip_prefix(':') {
            params.push((name, got.to_owned()));
        } else if want != got {
            return None;
        }
    }
    Some(params)
}

/// Index of the closing catch-all in `ROUTE_TABLE`.
const CATCH_ALL_INDEX: usize = ROUTE_TABLE.len() - 1;

const _: () = assert!(
    matches!(ROUTE_TABLE[CATCH_ALL_INDEX].target, Target::RedirectTo(_)),
    "ROUTE_TABLE must close with the catch-all redirect"
);

/// Find the table entry for `path`: the first specific entry that matches,
/// otherwise the closing catch-all.
#[must_use]
pub fn match_route(path: &str) -> RouteMatch {
    ROUTE_TABLE[..CATCH_ALL_INDEX]
        .iter()
        .find_map(|entry| match_pattern(entry.pattern, path).map(|params| RouteMatch { entry, params }))
        .unwrap_or_else(|| RouteMatch { entry: &ROUTE_TABLE[CATCH_ALL_INDEX], params: Vec::new() })
}

/// Outcome of one navigation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Protected page while the session is still restoring; nothing renders.
    Pending,
    Render(RouteMatch),
    Redirect(Redirect),
}

/// Decide what happens when the browser sits at `path` with `session`.
#[must_use]
pub fn resolve(path: &str, session: &SessionState) -> Resolution {
    let matched = match_route(path);
    if let Target::RedirectTo(to) = matched.entry.target {
        return Resolution::Redirect(Redirect::replace(to));
    }
    if let Some(redirect) = session.redirect_for(path) {
        return Resolution::Redirect(redirect);
    }
    if matched.entry.requires_auth && !session.is_authenticated() {
        return Resolution::Pending;
    }
    Resolution::Render(matched)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("redirect loop starting at {start:?} after {hops} hops")]
    RedirectLoop { start: String, hops: usize },
}

/// Where a navigation ends up after following every redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    /// Every path visited, starting with the requested one.
    pub visited: Vec<String>,
    /// `Pending` or `Render` for the last visited path.
    pub resolution: Resolution,
}

impl Settled {
    #[must_use]
    pub fn final_path(&self) -> &str {
        self.visited.last().map_or(ROOT_PATH, String::as_str)
    }
}

/// Follow redirects from `path` until a page renders or waits on the session.
///
/// # Errors
///
/// Returns [`RouteError::RedirectLoop`] if more than [`MAX_REDIRECT_HOPS`]
/// redirects are needed.
pub fn settle(path: &str, session: &SessionState) -> Result<Settled, RouteError> {
    let mut visited = vec![path.to_owned()];
    let mut current = path.to_owned();
    for _ in 0..=MAX_REDIRECT_HOPS {
        match resolve(&current, session) {
            Resolution::Redirect(redirect) => {
                current = redirect.to.to_owned();
                visited.push(current.clone());
            }
            resolution => return Ok(Settled { visited, resolution }),
        }
    }
    Err(RouteError::RedirectLoop { start: path.to_owned(), hops: visited.len() - 1 })
}
