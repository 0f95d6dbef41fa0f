//! Application module - handles the course form logic
//!
//! `form` holds the platform-independent submit handler; the platform
//! modules bind it to the browser DOM (WASM) or to the terminal (no-WASM).

pub mod form;
pub use form::{FormSubmissionHandler, Submission, SUCCESS_MESSAGE};

/// Notification shown once a course has been deleted
pub const DELETED_MESSAGE: &str = "删除成功!";

// Platform-specific modules
#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;
