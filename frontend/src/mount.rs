//! Attaching the application to the document.

use leptos::*;
use std::fmt;
use wasm_bindgen::JsCast;

use crate::config::MOUNT_SELECTOR;
use crate::error::{js_error_message, MountError};

/// Selector of the element that will own the rendered application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountTarget(String);

impl MountTarget {
    pub fn new(selector: impl Into<String>) -> Result<Self, MountError> {
        let selector = selector.into().trim().to_string();
        if selector.is_empty() {
            return Err(MountError::EmptySelector);
        }
        Ok(Self(selector))
    }

    pub fn selector(&self) -> &str {
        &self.0
    }
}

impl Default for MountTarget {
    fn default() -> Self {
        Self(MOUNT_SELECTOR.to_string())
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something the root view can be mounted into.
///
/// A missing target is an error, never a silent no-op, and `root` must not
/// be rendered when mounting fails.
pub trait MountHost {
    fn mount<F, N>(&self, target: &MountTarget, root: F) -> Result<(), MountError>
    where
        F: FnOnce() -> N + 'static,
        N: IntoView;
}

/// The browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomHost;

impl MountHost for DomHost {
    fn mount<F, N>(&self, target: &MountTarget, root: F) -> Result<(), MountError>
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(MountError::NoDocument)?;

        let element = document
            .query_selector(target.selector())
            .map_err(|e| MountError::InvalidSelector {
                selector: target.to_string(),
                reason: js_error_message(&e),
            })?
            .ok_or_else(|| MountError::TargetNotFound(target.to_string()))?;

        let element = element
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| MountError::NotAnHtmlElement(target.to_string()))?;

        // The application owns the whole subtree.
        element.set_inner_html("");
        mount_to(element, root);

        log::debug!("🧩 Mounted root view into {}", target);
        Ok(())
    }
}
