//! UI Components.
//!
//! # Layout Components
//! - [`Footer`] - Page footer
//!
//! # Views
//! - [`Home`] - Landing view showing the configured backend server
//! - [`NotFound`] - Fallback for unknown routes

mod footer;
mod home;
mod not_found;

pub use footer::*;
pub use home::*;
pub use not_found::*;
