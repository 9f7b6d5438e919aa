//! Dashboard page: the signed-in landing route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{ASSESSMENT_PATH, CUSTOMERS_PATH};
use crate::util::auth::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .user()
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.display_name()))
    };

    view! {
        <section class="dashboard">
            <h1>{greeting}</h1>
            <div class="dashboard__actions">
                <A href=ASSESSMENT_PATH>"Start an assessment"</A>
                <A href=CUSTOMERS_PATH>"Manage customers"</A>
            </div>
        </section>
    }
}
