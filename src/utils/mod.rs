//! Utility modules for web, DOM, and error containment.
//!
//! Provides:
//! - [`dom`] - Window access, focus management, Blob downloads
//! - [`ErrorHooks`] - Global error containment and safe fallback wrappers
//! - [`format_size`] - Human-readable byte sizes

pub mod dom;
mod errorhook;
mod format;

pub use errorhook::{ErrorHookConfig, ErrorHooks};
pub use format::format_size;
