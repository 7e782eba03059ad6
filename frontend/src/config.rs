//! Application configuration.
//!
//! Backend credentials are never compiled in as literals. They come from two
//! layered sources, the later one winning per key:
//!
//! 1. the build environment (`PARSE_APPLICATION_ID`, `PARSE_CLIENT_KEY`,
//!    `PARSE_SERVER_URL`), captured by `option_env!` when Trunk compiles;
//! 2. a `<script id="app-config" type="application/json">` block in the page,
//!    so a deployment can inject values at serve time.

use serde::Deserialize;
use std::fmt;
use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// CSS selector of the element the application is mounted into.
pub const MOUNT_SELECTOR: &str = "#app";

/// Parse server used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "https://parseapi.back4app.com";

/// Build environment key for the application id.
pub const APPLICATION_ID_KEY: &str = "PARSE_APPLICATION_ID";

/// Build environment key for the client key.
pub const CLIENT_KEY_KEY: &str = "PARSE_CLIENT_KEY";

/// Build environment key for the server URL.
pub const SERVER_URL_KEY: &str = "PARSE_SERVER_URL";

/// Id of the JSON configuration block injected in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Document title.
pub const APP_TITLE: &str = "Parse App";

const REDACTED: &str = "[REDACTED]";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Validated configuration of the backend client.
///
/// Built once at startup and shared read-only afterwards. The credentials
/// never show up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    application_id: String,
    client_key: String,
    server_url: String,
    server_host: String,
}

impl BackendConfig {
    /// Build a configuration from explicit values.
    ///
    /// Credentials must be non-blank and are kept exactly as given. The
    /// server URL is trimmed and must be an absolute `http` or `https` URL,
    /// the only transports a Parse server speaks; other absolute URLs are
    /// rejected with [`ConfigError::UnsupportedScheme`].
    pub fn new(
        application_id: impl Into<String>,
        client_key: impl Into<String>,
        server_url: impl Into<String>,
    ) -> ConfigResult<Self> {
        let application_id = non_blank(application_id.into(), APPLICATION_ID_KEY)?;
        let client_key = non_blank(client_key.into(), CLIENT_KEY_KEY)?;
        let server_url = non_blank(server_url.into(), SERVER_URL_KEY)?
            .trim()
            .to_string();

        let parsed = Url::parse(&server_url).map_err(|source| ConfigError::InvalidUrl {
            value: server_url.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        let server_host = parsed.host_str().unwrap_or_default().to_string();

        Ok(Self {
            application_id,
            client_key,
            server_url,
            server_host,
        })
    }

    /// Build a configuration by asking `lookup` for each key.
    ///
    /// The server URL falls back to [`DEFAULT_SERVER_URL`]; the credentials
    /// have no fallback.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let application_id =
            lookup(APPLICATION_ID_KEY).ok_or(ConfigError::Missing(APPLICATION_ID_KEY))?;
        let client_key = lookup(CLIENT_KEY_KEY).ok_or(ConfigError::Missing(CLIENT_KEY_KEY))?;
        let server_url = lookup(SERVER_URL_KEY).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Self::new(application_id, client_key, server_url)
    }

    /// Load the configuration from the page, then the build environment.
    pub fn load() -> ConfigResult<Self> {
        let document = DocumentConfig::from_document()?.unwrap_or_default();
        Self::from_lookup(|key| document.get(key).or_else(|| build_env(key)))
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    /// Server URL as configured, minus surrounding whitespace.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Host part of the server URL, safe to display.
    pub fn server_host(&self) -> &str {
        &self.server_host
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("application_id", &REDACTED)
            .field("client_key", &REDACTED)
            .field("server_url", &self.server_url)
            .finish()
    }
}

fn non_blank(value: String, key: &'static str) -> ConfigResult<String> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(key));
    }
    Ok(value)
}

/// Values captured from the environment at compile time.
fn build_env(key: &str) -> Option<String> {
    match key {
        APPLICATION_ID_KEY => option_env!("PARSE_APPLICATION_ID"),
        CLIENT_KEY_KEY => option_env!("PARSE_CLIENT_KEY"),
        SERVER_URL_KEY => option_env!("PARSE_SERVER_URL"),
        _ => None,
    }
    .map(str::to_string)
}

// =============================================================================
// Document Configuration
// =============================================================================

/// Configuration injected in the page as JSON. Every key is optional.
///
/// ```html
/// <script id="app-config" type="application/json">
///   {"applicationId": "...", "clientKey": "...", "serverURL": "https://..."}
/// </script>
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    pub application_id: Option<String>,
    pub client_key: Option<String>,
    #[serde(rename = "serverURL")]
    pub server_url: Option<String>,
}

impl DocumentConfig {
    /// Parse the JSON body of the configuration block.
    pub fn parse(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidDocumentConfig(e.to_string()))
    }

    /// Read the configuration block from the current document, if present.
    pub fn from_document() -> ConfigResult<Option<Self>> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(None);
        };
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };

        let text = element.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(None);
        }

        log::debug!("⚙️ Reading backend configuration from #{}", CONFIG_ELEMENT_ID);
        Self::parse(&text).map(Some)
    }

    /// Value for one of the build environment keys.
    ///
    /// Blank values count as absent so they never hide a build value.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            APPLICATION_ID_KEY => &self.application_id,
            CLIENT_KEY_KEY => &self.client_key,
            SERVER_URL_KEY => &self.server_url,
            _ => return None,
        };
        value.clone().filter(|v| !v.trim().is_empty())
    }
}

impl fmt::Debug for DocumentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = |value: &Option<String>| value.as_ref().map(|_| REDACTED);
        f.debug_struct("DocumentConfig")
            .field("application_id", &secret(&self.application_id))
            .field("client_key", &secret(&self.client_key))
            .field("server_url", &self.server_url)
            .finish()
    }
}
