//! Landing view

use leptos::*;

use crate::config::APP_TITLE;
use crate::services::use_backend;

#[component]
pub fn Home() -> impl IntoView {
    let server = use_backend()
        .map(|backend| backend.config().server_host().to_string())
        .unwrap_or_else(|| "not configured".to_string());

    view! {
        <div class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">
                "Backend server: " <code class="server-host">{server}</code>
            </p>
        </div>
    }
}
