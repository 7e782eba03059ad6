//! Parse App - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page application backed by a Parse server.
//!
//! # Startup
//!
//! ```text
//! BackendConfig::load()          page config block, then build environment
//!        │
//!        ▼
//! BackendClient::initialize()    Parse.initialize + Parse.serverURL
//!        │
//!        ▼
//! DomHost::mount("#app")         App (Router) rendered with BackendHandle in context
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and backend configuration sources
//! - [`error`] - Startup error types
//! - [`services`] - Parse SDK binding and backend client
//! - [`mount`] - Mount target and DOM host
//! - [`bootstrap`] - Ordered startup sequence
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod mount;
pub mod services;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use bootstrap::Bootstrap;
pub use components::*;
pub use config::*;
pub use error::{BootError, BootResult, ConfigError, ConfigResult, MountError};
pub use mount::{DomHost, MountHost, MountTarget};
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Configure the backend and mount [`App`] into `#app`.
///
/// Any failure is logged to the console and returned as a JS error; nothing
/// is rendered in that case.
pub fn run() -> Result<(), JsValue> {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_TITLE);

    let config = BackendConfig::load().map_err(|e| fatal(e.into()))?;

    Bootstrap::new(config, ParseSdk, DomHost)
        .run(|| view! { <App/> })
        .map_err(fatal)
}

fn fatal(error: BootError) -> JsValue {
    log::error!("❌ Startup failed: {}", error);
    error.into()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main class="container">
                <Routes>
                    <Route path="/" view=Home/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
        <Footer/>
    }
}
