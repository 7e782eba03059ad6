use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{move || location.pathname.get()}</code></p>
            <A href="/">"Back to home"</A>
        </div>
    }
}
