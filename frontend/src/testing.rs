//! Recording fakes for the startup seams.

use leptos::IntoView;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::MountError;
use crate::mount::{MountHost, MountTarget};
use crate::services::BackendSdk;

/// Ordered record of calls shared between fakes.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

pub struct FakeSdk {
    journal: Journal,
    failure: Option<String>,
}

impl FakeSdk {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            failure: None,
        }
    }

    /// An SDK whose every call throws `message`.
    pub fn failing(journal: &Journal, message: &str) -> Self {
        Self {
            journal: journal.clone(),
            failure: Some(message.to_string()),
        }
    }
}

impl BackendSdk for FakeSdk {
    fn initialize(&self, application_id: &str, client_key: &str) -> Result<(), String> {
        if let Some(message) = &self.failure {
            return Err(message.clone());
        }
        self.journal
            .record(format!("initialize {} {}", application_id, client_key));
        Ok(())
    }

    fn set_server_url(&self, server_url: &str) -> Result<(), String> {
        if let Some(message) = &self.failure {
            return Err(message.clone());
        }
        self.journal.record(format!("server_url {}", server_url));
        Ok(())
    }
}

/// A document containing exactly the given selectors.
pub struct FakeHost {
    journal: Journal,
    elements: Vec<String>,
}

impl FakeHost {
    pub fn with_elements(journal: &Journal, elements: &[&str]) -> Self {
        Self {
            journal: journal.clone(),
            elements: elements.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MountHost for FakeHost {
    fn mount<F, N>(&self, target: &MountTarget, _root: F) -> Result<(), MountError>
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        if !self.elements.iter().any(|e| e == target.selector()) {
            return Err(MountError::TargetNotFound(target.to_string()));
        }
        self.journal.record(format!("mount {}", target));
        Ok(())
    }
}
