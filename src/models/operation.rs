//! Ephemeral request value handed to the validation gate.

use super::Mode;

/// Snapshot of what the user is attempting, captured at the moment the
/// encrypt/decrypt button is pressed. Never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationRequest {
    /// `true` for encrypt, `false` for decrypt.
    pub is_encryption: bool,
    /// Whether an uploaded image is loaded.
    pub body_present: bool,
    /// Whether a previous encryption produced output to decrypt.
    pub encrypted_body_present: bool,
    /// Mode active at the time of the attempt.
    pub mode: Mode,
}
