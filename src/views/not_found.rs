use leptos::prelude::*;

#[component]
pub fn NotFound(message: String) -> impl IntoView {
    view! {
        <main class="page page--not-found">
            <h1 class="page__title">{message}</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="button button--primary" href="/">"Back to home"</a>
        </main>
    }
}
