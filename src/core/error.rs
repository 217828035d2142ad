//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ValidationError`] - Blocking reasons returned by the validation gate
//! - [`CipherError`] - Key/IV parsing and transform failures
//!
//! Validation failures are returned values, never panics; their `Display`
//! output is shown to the user verbatim.

use std::fmt;

/// Reason an encrypt/decrypt attempt is blocked by the validation gate.
///
/// Checks are evaluated in strict priority order (data availability, then
/// key, then IV/counter) and exactly one reason is ever surfaced per
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Encrypt requested with no uploaded image.
    NoImageLoaded,
    /// Decrypt requested with no prior encrypted output.
    NothingToDecrypt,
    /// Key field does not hold 64 hex characters.
    InvalidKey,
    /// IV/counter field does not hold 32 hex characters. The label names the
    /// field the way the active mode does ("counter" for CTR, else "IV").
    InvalidIv { label: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImageLoaded => write!(f, "Please upload an image before encrypting"),
            Self::NothingToDecrypt => {
                write!(f, "Please encrypt an image before attempting to decrypt")
            }
            Self::InvalidKey => write!(
                f,
                "Invalid encryption key. Please enter a valid 64-character hexadecimal key or generate a new one"
            ),
            Self::InvalidIv { label } => write!(
                f,
                "Invalid {}. Please enter a valid 32-character hexadecimal value or generate a new one",
                label
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Key/IV parsing and AES transform errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key text is not exactly 64 hex characters.
    MalformedKey,
    /// IV/counter text is not exactly 32 hex characters.
    MalformedIv,
    /// PKCS#7 unpadding failed on decrypt (wrong key/IV or corrupt data).
    BadPadding,
    /// Randomness source unavailable.
    RandomnessUnavailable,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedKey => write!(f, "Key must be 64 hexadecimal characters"),
            Self::MalformedIv => write!(f, "IV must be 32 hexadecimal characters"),
            Self::BadPadding => write!(
                f,
                "Decryption failed. The key or IV does not match the encrypted data"
            ),
            Self::RandomnessUnavailable => write!(f, "Secure randomness is not available"),
        }
    }
}

impl std::error::Error for CipherError {}
