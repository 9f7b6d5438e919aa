//! Session provider and the guard wrapped around protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` sits inside `<Router>` so it can watch the current path
//! and navigate. It restores the session once on the client; during SSR the
//! restore effect never runs and the session stays in `Restoring`, so guarded
//! pages render empty on the server and fill in after hydration.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::layout::Layout;
use crate::net::api::AuthApi;
use crate::state::session::{RestoreOutcome, SessionStore};
use crate::util::auth::{install_session_guard, provide_session, use_session};
use crate::util::storage::KeyValueStore;

/// Owns the session for everything rendered inside it.
#[component]
pub fn SessionProvider(storage: Arc<dyn KeyValueStore>, api: Arc<dyn AuthApi>, children: Children) -> impl IntoView {
    let session = provide_session(SessionStore::new(storage, api));
    let location = use_location();
    install_session_guard(session, location.pathname, use_navigate());

    Effect::new(move || match session.restore() {
        RestoreOutcome::Restored => leptos::logging::log!("session restored"),
        RestoreOutcome::Corrupted => leptos::logging::warn!("stored session was corrupted and has been cleared"),
        RestoreOutcome::Empty | RestoreOutcome::Unavailable | RestoreOutcome::AlreadyRestored => {}
    });

    children()
}

/// Renders the shared layout and `children` only for a signed-in user.
///
/// While restoring, and while signed out, nothing renders; the guard effect
/// installed by `SessionProvider` moves signed-out visitors to `/login`.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show when=move || session.is_authenticated() fallback=|| ()>
            {
                let page = children();
                view! { <Layout>{page}</Layout> }
            }
        </Show>
    }
}
