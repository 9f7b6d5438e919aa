use leptos::prelude::*;

#[component]
pub fn CustomersPage() -> impl IntoView {
    view! {
        <section class="customers">
            <h1>"Customers"</h1>
        </section>
    }
}
