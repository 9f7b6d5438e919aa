//! Registration page. Sign-up has no API call of its own; the view points new
//! users back to sign-in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <p class="login-card__subtitle">
                    "Ask your portal administrator for an invitation, then sign in."
                </p>
                <A href=LOGIN_PATH>"Back to sign in"</A>
            </div>
        </div>
    }
}
