//! Validation gate for encrypt/decrypt attempts.
//!
//! Field-level hex validators flip the two flags on every input event; the
//! gate itself is only consulted at the moment the user presses encrypt or
//! decrypt, not reactively on every keystroke.

use leptos::prelude::*;

use crate::core::error::ValidationError;
use crate::models::OperationRequest;

/// Key/IV validity flags set by the upstream field validators.
///
/// Both default to `true` so that failures are opt-in: fields the user has
/// not touched are never flagged as errors.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ValidationState {
    /// Whether the key field currently parses as a 64-char hex key.
    pub key_valid: RwSignal<bool>,
    /// Whether the IV/counter field currently parses as 32 hex chars.
    pub iv_valid: RwSignal<bool>,
}

impl ValidationState {
    /// Creates the state with both flags valid.
    pub fn new() -> Self {
        Self {
            key_valid: RwSignal::new(true),
            iv_valid: RwSignal::new(true),
        }
    }

    /// Records the key field's validity. Last write wins.
    pub fn set_key_valid(&self, valid: bool) {
        self.key_valid.set(valid);
    }

    /// Records the IV/counter field's validity. Last write wins.
    pub fn set_iv_valid(&self, valid: bool) {
        self.iv_valid.set(valid);
    }

    /// Restores both flags to `true`.
    ///
    /// Called when switching modes or clearing all input so stale error
    /// state from a previous mode does not leak into a new attempt.
    pub fn reset(&self) {
        self.key_valid.set(true);
        self.iv_valid.set(true);
    }

    /// Decides whether an encrypt/decrypt attempt may proceed.
    ///
    /// Checks run in strict priority order and the first failure wins:
    ///
    /// 1. Data availability (structural; nothing to operate on)
    /// 2. Key validity
    /// 3. IV/counter validity, skipped entirely for modes without an IV
    ///
    /// Returns `None` when the operation may proceed. Pure with respect to
    /// the request and the current flags; performs no mutation.
    pub fn validate_operation(&self, request: OperationRequest) -> Option<ValidationError> {
        if request.is_encryption && !request.body_present {
            return Some(ValidationError::NoImageLoaded);
        }
        if !request.is_encryption && !request.encrypted_body_present {
            return Some(ValidationError::NothingToDecrypt);
        }
        if !self.key_valid.get() {
            return Some(ValidationError::InvalidKey);
        }
        if request.mode.requires_iv() && !self.iv_valid.get() {
            return Some(ValidationError::InvalidIv {
                label: request.mode.iv_label(),
            });
        }
        None
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mode;

    fn request(is_encryption: bool, body: bool, encrypted: bool, mode: Mode) -> OperationRequest {
        OperationRequest {
            is_encryption,
            body_present: body,
            encrypted_body_present: encrypted,
            mode,
        }
    }

    #[test]
    fn test_all_green_returns_none() {
        let state = ValidationState::new();
        assert_eq!(
            state.validate_operation(request(true, true, false, Mode::Ecb)),
            None
        );
    }

    #[test]
    fn test_reset_clears_prior_flags() {
        let state = ValidationState::new();
        state.set_key_valid(false);
        state.set_iv_valid(false);
        state.reset();
        assert_eq!(
            state.validate_operation(request(true, true, true, Mode::Cbc)),
            None
        );
    }

    #[test]
    fn test_missing_body_blocks_encrypt() {
        let state = ValidationState::new();
        assert_eq!(
            state.validate_operation(request(true, false, true, Mode::Cbc)),
            Some(ValidationError::NoImageLoaded)
        );
        assert_eq!(
            ValidationError::NoImageLoaded.to_string(),
            "Please upload an image before encrypting"
        );
    }

    #[test]
    fn test_missing_ciphertext_blocks_decrypt_even_with_bad_fields() {
        let state = ValidationState::new();
        state.set_key_valid(false);
        state.set_iv_valid(false);
        let err = state
            .validate_operation(request(false, true, false, Mode::Cbc))
            .unwrap();
        assert_eq!(err, ValidationError::NothingToDecrypt);
        assert_eq!(
            err.to_string(),
            "Please encrypt an image before attempting to decrypt"
        );
    }

    #[test]
    fn test_data_availability_preempts_key() {
        let state = ValidationState::new();
        state.set_key_valid(false);
        assert_eq!(
            state.validate_operation(request(true, false, false, Mode::Cbc)),
            Some(ValidationError::NoImageLoaded)
        );
    }

    #[test]
    fn test_invalid_key_message_is_verbatim() {
        let state = ValidationState::new();
        state.set_key_valid(false);
        let err = state
            .validate_operation(request(true, true, false, Mode::Cbc))
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid encryption key. Please enter a valid 64-character hexadecimal key or generate a new one"
        );
    }

    #[test]
    fn test_key_preempts_iv() {
        let state = ValidationState::new();
        state.set_key_valid(false);
        state.set_iv_valid(false);
        assert_eq!(
            state.validate_operation(request(true, true, false, Mode::Cbc)),
            Some(ValidationError::InvalidKey)
        );
    }

    #[test]
    fn test_ecb_never_complains_about_iv() {
        let state = ValidationState::new();
        state.set_iv_valid(false);
        assert_eq!(
            state.validate_operation(request(true, true, false, Mode::Ecb)),
            None
        );
    }

    #[test]
    fn test_iv_label_follows_mode() {
        let state = ValidationState::new();
        state.set_iv_valid(false);

        let ctr = state
            .validate_operation(request(true, true, false, Mode::Ctr))
            .unwrap();
        assert!(ctr.to_string().contains("counter"));

        for mode in [Mode::Cbc, Mode::Cfb, Mode::Ofb] {
            let err = state
                .validate_operation(request(true, true, false, mode))
                .unwrap();
            assert!(err.to_string().contains("IV"));
            assert!(!err.to_string().contains("counter"));
        }
    }
}
