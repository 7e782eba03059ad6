//! Startup sequence.
//!
//! The backend client is configured first, then the root view is mounted.
//! Mounted components may talk to the backend while they are built, so the
//! order is fixed. Either step failing stops startup.

use leptos::*;
use std::rc::Rc;

use crate::config::BackendConfig;
use crate::error::BootResult;
use crate::mount::{MountHost, MountTarget};
use crate::services::{BackendClient, BackendHandle, BackendSdk};

/// One-shot application startup. `run` consumes it.
pub struct Bootstrap<S, H> {
    config: Rc<BackendConfig>,
    client: BackendClient<S>,
    host: H,
    target: MountTarget,
}

impl<S: BackendSdk, H: MountHost> Bootstrap<S, H> {
    /// Startup against `host`, mounting into [`MountTarget::default`].
    pub fn new(config: BackendConfig, sdk: S, host: H) -> Self {
        Self {
            config: Rc::new(config),
            client: BackendClient::new(sdk),
            host,
            target: MountTarget::default(),
        }
    }

    pub fn with_target(mut self, target: MountTarget) -> Self {
        self.target = target;
        self
    }

    /// Initialize the backend client, then mount `root`.
    ///
    /// The root view is built with a [`BackendHandle`] in context.
    pub fn run<F, N>(self, root: F) -> BootResult<()>
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        log::info!(
            "🚀 Starting application (server: {}, target: {})",
            self.config.server_url(),
            self.target
        );

        self.client.initialize(&self.config)?;

        let handle = BackendHandle::new(Rc::clone(&self.config));
        self.host.mount(&self.target, move || {
            provide_context(handle);
            root()
        })?;

        log::info!("✅ Application mounted into {}", self.target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BootError, MountError};
    use crate::testing::{FakeHost, FakeSdk, Journal};

    fn config() -> BackendConfig {
        BackendConfig::new("abc", "xyz", "https://example.com/api").unwrap()
    }

    #[test]
    fn test_valid_run_initializes_then_mounts() {
        let journal = Journal::default();
        let bootstrap = Bootstrap::new(
            config(),
            FakeSdk::new(&journal),
            FakeHost::with_elements(&journal, &["#app"]),
        );

        bootstrap.run(|| ()).unwrap();

        assert_eq!(
            journal.entries(),
            vec![
                "initialize abc xyz",
                "server_url https://example.com/api",
                "mount #app",
            ]
        );
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let journal = Journal::default();
        let bootstrap = Bootstrap::new(
            config(),
            FakeSdk::new(&journal),
            FakeHost::with_elements(&journal, &["#other"]),
        );

        let err = bootstrap.run(|| ()).unwrap_err();

        match err {
            BootError::Mount(MountError::TargetNotFound(selector)) => assert_eq!(selector, "#app"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!journal.entries().iter().any(|e| e.starts_with("mount")));
    }

    #[test]
    fn test_custom_target() {
        let journal = Journal::default();
        let bootstrap = Bootstrap::new(
            config(),
            FakeSdk::new(&journal),
            FakeHost::with_elements(&journal, &["main > .root"]),
        )
        .with_target(MountTarget::new("main > .root").unwrap());

        bootstrap.run(|| ()).unwrap();

        assert_eq!(journal.entries().last().unwrap(), "mount main > .root");
    }

    #[test]
    fn test_sdk_failure_prevents_mount() {
        let journal = Journal::default();
        let bootstrap = Bootstrap::new(
            config(),
            FakeSdk::failing(&journal, "Parse SDK is not loaded"),
            FakeHost::with_elements(&journal, &["#app"]),
        );

        let err = bootstrap.run(|| ()).unwrap_err();

        assert!(matches!(err, BootError::Sdk(_)));
        assert!(journal.entries().is_empty());
    }
}
