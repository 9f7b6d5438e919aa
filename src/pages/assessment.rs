use leptos::prelude::*;

#[component]
pub fn AssessmentPage() -> impl IntoView {
    view! {
        <section class="assessment">
            <h1>"Assessment"</h1>
        </section>
    }
}
