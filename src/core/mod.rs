//! Core business logic for the encryption workbench.
//!
//! This module provides:
//! - [`ModeSelector`] mode-selection state machine (tab strip + mobile menu)
//! - [`ValidationState`] validation gate for encrypt/decrypt attempts
//! - [`cipher`] hex field validators and the AES-256 transforms
//! - [`error`] domain error types

pub mod cipher;
pub mod error;
mod selection;
mod validation;

pub use selection::ModeSelector;
pub use validation::ValidationState;
