//! Shared chrome for signed-in pages: navigation, current user, logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{ASSESSMENT_PATH, CUSTOMERS_PATH, DASHBOARD_PATH};
use crate::util::auth::use_session;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let user_name = move || {
        session
            .user()
            .map_or_else(String::new, |user| user.display_name().to_owned())
    };
    let on_logout = move |_| session.logout();

    view! {
        <div class="layout">
            <header class="layout__header">
                <nav class="layout__nav">
                    <A href=DASHBOARD_PATH>"Dashboard"</A>
                    <A href=ASSESSMENT_PATH>"Assessment"</A>
                    <A href=CUSTOMERS_PATH>"Customers"</A>
                </nav>
                <span class="layout__user">{user_name}</span>
                <button class="layout__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
