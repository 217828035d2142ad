//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Mode`], [`MODES`] - AES operating modes and their canonical order
//! - [`OperationRequest`] - Snapshot handed to the validation gate
//! - [`LoadedImage`] - Uploaded file bytes and metadata

mod image;
mod mode;
mod operation;

pub use image::LoadedImage;
pub use mode::{MODES, Mode};
pub use operation::OperationRequest;
