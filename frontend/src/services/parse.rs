//! Parse JavaScript SDK binding.
//!
//! The SDK itself is loaded by `index.html`; `src/js/parse.js` exposes the two
//! calls the bootstrap needs.

use wasm_bindgen::prelude::*;

use crate::error::js_error_message;

/// Capability of the backend SDK used during startup.
///
/// Both calls mutate the SDK's process-wide state and perform no network I/O.
/// Errors carry the message of whatever the SDK threw.
pub trait BackendSdk {
    /// Set the application credentials.
    fn initialize(&self, application_id: &str, client_key: &str) -> Result<(), String>;

    /// Point the SDK at a server.
    fn set_server_url(&self, server_url: &str) -> Result<(), String>;
}

/// The Parse SDK loaded in the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseSdk;

impl BackendSdk for ParseSdk {
    fn initialize(&self, application_id: &str, client_key: &str) -> Result<(), String> {
        initialize_parse_js(application_id, client_key)
            .map_err(|e| format!("Parse.initialize failed: {}", js_error_message(&e)))
    }

    fn set_server_url(&self, server_url: &str) -> Result<(), String> {
        set_server_url_js(server_url)
            .map_err(|e| format!("Setting Parse.serverURL failed: {}", js_error_message(&e)))
    }
}

/// JavaScript functions from parse.js
#[wasm_bindgen(module = "/src/js/parse.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = "initializeParse")]
    fn initialize_parse_js(application_id: &str, client_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = "setParseServerURL")]
    fn set_server_url_js(server_url: &str) -> Result<(), JsValue>;
}
