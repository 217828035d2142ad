//! UI components built with Leptos.
//!
//! - [`Workspace`] - Main workbench layout (entry point)
//! - [`mode_tabs`] - Desktop tab strip adapter for the mode selector
//! - [`mode_menu`] - Mobile collapsible menu adapter for the mode selector
//! - [`fields`] - Key and IV/counter input fields
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod fields;
pub mod icons;
pub mod mode_menu;
pub mod mode_tabs;
pub mod workspace;

pub use workspace::Workspace;
