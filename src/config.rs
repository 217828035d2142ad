//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "cipherpix";

/// Tagline shown under the header.
pub const APP_TAGLINE: &str = "AES image encryption playground";

// =============================================================================
// Cipher Input Formats
// =============================================================================

/// Required length of the key field (64 hex chars = 32 bytes, AES-256).
pub const KEY_HEX_LEN: usize = 64;

/// Required length of the IV/counter field (32 hex chars = one AES block).
pub const IV_HEX_LEN: usize = 32;

// =============================================================================
// Responsive Presentation
// =============================================================================

/// Media query selecting the collapsible-menu presentation.
/// 768px is the common tablet/desktop threshold.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Media query for suppressing transition timing. Affects visuals only,
/// never state transitions.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
