//! Root application component with routing and the session provider.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::{RequireSession, SessionProvider};
use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::pages::{
    assessment::AssessmentPage, customers::CustomersPage, dashboard::DashboardPage, login::LoginPage,
    register::RegisterPage, results::ResultsPage,
};
use crate::routes::{self, DASHBOARD_PATH};
use crate::util::auth::navigate_options;
use crate::util::storage::{KeyValueStore, LocalStorage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// `/` and unknown paths land on the dashboard, replacing history.
#[component]
fn ToDashboard() -> impl IntoView {
    view! { <Redirect path=DASHBOARD_PATH options=navigate_options(routes::Redirect::replace(DASHBOARD_PATH))/> }
}

/// Root application component.
///
/// Builds the session collaborators from config and sets up client-side
/// routing. Route paths mirror `routes::ROUTE_TABLE`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("config: {e}; using defaults");
        ClientConfig::default()
    });

    let storage: Arc<dyn KeyValueStore> = Arc::new(LocalStorage);
    let api: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(config));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <SessionProvider storage=storage api=api>
                <Routes fallback=|| view! { <ToDashboard/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireSession><DashboardPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("assessment")
                        view=|| view! { <RequireSession><AssessmentPage/></RequireSession> }
                    />
                    <Route
                        path=(StaticSegment("assessment"), StaticSegment("results"), ParamSegment("id"))
                        view=|| view! { <RequireSession><ResultsPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("customers")
                        view=|| view! { <RequireSession><CustomersPage/></RequireSession> }
                    />
                    <Route path=StaticSegment("") view=ToDashboard/>
                </Routes>
            </SessionProvider>
        </Router>
    }
}
