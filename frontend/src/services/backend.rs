//! Backend client wrapper and the handle shared with the component tree.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::BackendConfig;
use crate::error::{BootError, BootResult, ConfigError};
use crate::services::parse::BackendSdk;

/// Applies a [`BackendConfig`] to an SDK exactly once.
///
/// Re-initializing with the same configuration is a no-op. Re-initializing
/// with a different one is rejected and leaves the SDK untouched.
pub struct BackendClient<S> {
    sdk: S,
    initialized: RefCell<Option<Rc<BackendConfig>>>,
}

impl<S: BackendSdk> BackendClient<S> {
    pub fn new(sdk: S) -> Self {
        Self {
            sdk,
            initialized: RefCell::new(None),
        }
    }

    /// Configure the SDK with credentials, then the server URL.
    pub fn initialize(&self, config: &Rc<BackendConfig>) -> BootResult<()> {
        if let Some(current) = self.initialized.borrow().as_ref() {
            if **current == **config {
                log::debug!("🔁 Backend client already initialized, skipping");
                return Ok(());
            }
            log::warn!("⚠️ Refusing to re-initialize backend client with other values");
            return Err(ConfigError::AlreadyInitialized.into());
        }

        self.sdk
            .initialize(config.application_id(), config.client_key())
            .map_err(BootError::Sdk)?;
        self.sdk
            .set_server_url(config.server_url())
            .map_err(BootError::Sdk)?;

        *self.initialized.borrow_mut() = Some(Rc::clone(config));
        log::info!("🔐 Backend client initialized for {}", config.server_url());
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.borrow().is_some()
    }

    /// Configuration the SDK was initialized with, if any.
    pub fn config(&self) -> Option<Rc<BackendConfig>> {
        self.initialized.borrow().clone()
    }
}

/// Read-only access to the backend configuration for components.
///
/// Provided as context by the bootstrap before the root view is built.
#[derive(Clone, Debug)]
pub struct BackendHandle(Rc<BackendConfig>);

impl BackendHandle {
    pub fn new(config: Rc<BackendConfig>) -> Self {
        Self(config)
    }

    pub fn config(&self) -> &BackendConfig {
        &self.0
    }
}

/// Backend handle from context, if the tree was mounted by the bootstrap.
pub fn use_backend() -> Option<BackendHandle> {
    use_context::<BackendHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeSdk, Journal};

    fn config(server_url: &str) -> Rc<BackendConfig> {
        Rc::new(BackendConfig::new("abc", "xyz", server_url).unwrap())
    }

    #[test]
    fn test_initialize_sets_credentials_then_server() {
        let journal = Journal::default();
        let client = BackendClient::new(FakeSdk::new(&journal));

        client.initialize(&config("https://example.com/api")).unwrap();

        assert_eq!(
            journal.entries(),
            vec!["initialize abc xyz", "server_url https://example.com/api"]
        );
        assert!(client.is_initialized());
        assert_eq!(
            client.config().unwrap().server_url(),
            "https://example.com/api"
        );
    }

    #[test]
    fn test_initialize_twice_with_same_values_is_noop() {
        let journal = Journal::default();
        let client = BackendClient::new(FakeSdk::new(&journal));

        client.initialize(&config("https://example.com/api")).unwrap();
        client.initialize(&config("https://example.com/api")).unwrap();

        assert_eq!(journal.entries().len(), 2);
    }

    #[test]
    fn test_initialize_with_other_values_rejected() {
        let journal = Journal::default();
        let client = BackendClient::new(FakeSdk::new(&journal));

        client.initialize(&config("https://example.com/api")).unwrap();
        let err = client
            .initialize(&config("https://other.example.com"))
            .unwrap_err();

        assert!(matches!(
            err,
            BootError::Config(ConfigError::AlreadyInitialized)
        ));
        assert_eq!(journal.entries().len(), 2);
        assert_eq!(
            client.config().unwrap().server_url(),
            "https://example.com/api"
        );
    }

    #[test]
    fn test_sdk_failure_leaves_client_uninitialized() {
        let journal = Journal::default();
        let client = BackendClient::new(FakeSdk::failing(&journal, "Parse SDK is not loaded"));

        let err = client.initialize(&config("https://example.com/api")).unwrap_err();

        match err {
            BootError::Sdk(message) => assert_eq!(message, "Parse SDK is not loaded"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!client.is_initialized());
    }
}
