//! Backend services.
//!
//! # Services
//!
//! - [`parse`] - Parse JavaScript SDK binding ([`BackendSdk`], [`ParseSdk`])
//! - [`backend`] - one-time client initialization and the shared [`BackendHandle`]
//!
//! # JavaScript Bindings
//!
//! - `src/js/parse.js` - wrapper over the Parse SDK global

pub mod backend;
pub mod parse;

pub use backend::*;
pub use parse::*;
