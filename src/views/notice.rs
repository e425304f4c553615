use leptos::prelude::*;

/// Inline notice shown when a section fell back to default content.
#[component]
pub fn Notice(message: String) -> impl IntoView {
    view! { <p class="notice" role="status">{message}</p> }
}
