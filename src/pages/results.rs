//! Results for a single assessment, addressed by `/assessment/results/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let params = use_params_map();
    let assessment_id = move || params.get().get("id").unwrap_or_default();

    view! {
        <section class="results">
            <h1>"Assessment results"</h1>
            <p class="results__id">"Assessment " {assessment_id}</p>
        </section>
    }
}
