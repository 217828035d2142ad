//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the wiring
//! between the mode selector, the validation gate, and the AES transforms.

use leptos::prelude::*;

use crate::components::Workspace;
use crate::core::error::CipherError;
use crate::core::{ModeSelector, ValidationState, cipher};
use crate::models::{LoadedImage, Mode, OperationRequest};
use crate::utils::{ErrorHookConfig, ErrorHooks};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The context is the single stateful owner of the mode-selection contract
/// (`select_mode`, `handle_key_navigation`, `toggle_menu`, `close_menu`);
/// the desktop tab strip and the mobile menu are pure consumers, so the same
/// mode selected through either adapter produces identical state. It also
/// owns the validation gate and the image buffers the gate is asked about.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mode selection state machine (active mode + mobile menu visibility).
    pub selector: ModeSelector,

    /// Key/IV validity flags and the operation gate.
    pub validation: ValidationState,

    /// Raw text of the key field.
    pub key_text: RwSignal<String>,

    /// Raw text of the IV/counter field.
    pub iv_text: RwSignal<String>,

    /// Uploaded image, if any.
    pub plain_image: RwSignal<Option<LoadedImage>>,

    /// Output of the last encryption, if any.
    pub encrypted_image: RwSignal<Option<Vec<u8>>>,

    /// Output of the last decryption, if any.
    pub decrypted_image: RwSignal<Option<Vec<u8>>>,

    /// Blocking message currently shown to the user.
    pub banner: RwSignal<Option<String>>,

    /// Error containment handle for fallback wrappers.
    pub hooks: ErrorHooks,
}

impl AppContext {
    /// Creates the context with a freshly generated key and IV so the app
    /// starts in a runnable state.
    pub fn new(hooks: ErrorHooks) -> Self {
        let key = hooks.safe_sync(String::new(), cipher::random_key_hex);
        let iv = hooks.safe_sync(String::new(), cipher::random_iv_hex);
        Self {
            selector: ModeSelector::new(),
            validation: ValidationState::new(),
            key_text: RwSignal::new(key),
            iv_text: RwSignal::new(iv),
            plain_image: RwSignal::new(None),
            encrypted_image: RwSignal::new(None),
            decrypted_image: RwSignal::new(None),
            banner: RwSignal::new(None),
            hooks,
        }
    }

    // ------------------------------------------------------------------
    // Mode selection contract (consumed by both presentation adapters)
    // ------------------------------------------------------------------

    /// Activates `mode`, closing the mobile menu and resetting validation so
    /// stale error state from the previous mode does not leak through.
    pub fn select_mode(&self, mode: Mode) {
        self.selector.select_mode(mode);
        self.validation.reset();
        self.banner.set(None);
    }

    /// Keyboard navigation for the tab strip; returns `true` when the
    /// selection moved so the caller can move focus along with it.
    pub fn handle_key_navigation(&self, key: &str) -> bool {
        let current = self.selector.active_mode();
        if self.selector.handle_key_navigation(key) {
            if self.selector.active_mode() != current {
                self.validation.reset();
                self.banner.set(None);
            }
            true
        } else {
            false
        }
    }

    /// Flips the mobile menu.
    pub fn toggle_menu(&self) {
        self.selector.toggle_menu();
    }

    /// Dismisses the mobile menu (explicit close or outside pointer).
    pub fn close_menu(&self) {
        self.selector.close_menu();
    }

    // ------------------------------------------------------------------
    // Field input
    // ------------------------------------------------------------------

    /// Records a keystroke in the key field and revalidates it.
    pub fn set_key_input(&self, text: String) {
        self.validation.set_key_valid(cipher::is_valid_key(&text));
        self.key_text.set(text);
    }

    /// Records a keystroke in the IV/counter field and revalidates it.
    pub fn set_iv_input(&self, text: String) {
        self.validation.set_iv_valid(cipher::is_valid_iv(&text));
        self.iv_text.set(text);
    }

    /// Replaces the key with a freshly generated one.
    pub fn regenerate_key(&self) {
        let key = self.hooks.safe_sync(String::new(), cipher::random_key_hex);
        self.set_key_input(key);
    }

    /// Replaces the IV/counter with a freshly generated one.
    pub fn regenerate_iv(&self) {
        let iv = self.hooks.safe_sync(String::new(), cipher::random_iv_hex);
        self.set_iv_input(iv);
    }

    // ------------------------------------------------------------------
    // Buffers and operations
    // ------------------------------------------------------------------

    /// Installs a newly uploaded image, discarding previous outputs.
    pub fn load_image(&self, image: LoadedImage) {
        self.plain_image.set(Some(image));
        self.encrypted_image.set(None);
        self.decrypted_image.set(None);
        self.banner.set(None);
    }

    /// Clears all buffers and field text and restores validation defaults.
    pub fn clear_all(&self) {
        self.plain_image.set(None);
        self.encrypted_image.set(None);
        self.decrypted_image.set(None);
        self.banner.set(None);
        self.key_text.set(String::new());
        self.iv_text.set(String::new());
        self.validation.reset();
    }

    /// Attempts an encrypt (`true`) or decrypt (`false`) operation.
    ///
    /// Consults the validation gate first; a blocking reason is surfaced in
    /// the banner verbatim and aborts the attempt. Otherwise the transform
    /// runs synchronously and its output lands in the matching buffer.
    pub fn run_operation(&self, is_encryption: bool) {
        self.banner.set(None);
        let mode = self.selector.active_mode();
        let request = OperationRequest {
            is_encryption,
            body_present: self.plain_image.with(|i| i.is_some()),
            encrypted_body_present: self.encrypted_image.with(|e| e.is_some()),
            mode,
        };

        if let Some(reason) = self.validation.validate_operation(request) {
            self.banner.set(Some(reason.to_string()));
            return;
        }

        if let Err(err) = self.try_transform(is_encryption, mode) {
            self.banner.set(Some(err.to_string()));
        }
    }

    fn try_transform(&self, is_encryption: bool, mode: Mode) -> Result<(), CipherError> {
        let key = cipher::parse_key(&self.key_text.get())?;
        let iv = if mode.requires_iv() {
            cipher::parse_iv(&self.iv_text.get())?
        } else {
            [0u8; 16]
        };

        if is_encryption {
            // Presence was checked by the gate.
            let Some(image) = self.plain_image.get() else {
                return Ok(());
            };
            self.encrypted_image
                .set(Some(cipher::encrypt(mode, &key, &iv, &image.bytes)));
            self.decrypted_image.set(None);
        } else {
            let Some(data) = self.encrypted_image.get() else {
                return Ok(());
            };
            self.decrypted_image
                .set(Some(cipher::decrypt(mode, &key, &iv, &data)?));
        }
        Ok(())
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Installs the global error hooks (once, at startup)
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let hooks = ErrorHooks::new(ErrorHookConfig::default());
    hooks.install();

    let ctx = AppContext::new(hooks);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0d1117;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </div>
                </div>
            }
        >
            <Workspace />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MODES;

    fn ctx() -> AppContext {
        AppContext::new(ErrorHooks::new(ErrorHookConfig {
            development_mode: false,
        }))
    }

    fn sample_image() -> LoadedImage {
        LoadedImage::new("sample.png", "image/png", b"fake png bytes".to_vec())
    }

    #[test]
    fn test_starts_with_generated_inputs() {
        let ctx = ctx();
        assert!(cipher::is_valid_key(&ctx.key_text.get()));
        assert!(cipher::is_valid_iv(&ctx.iv_text.get()));
        assert_eq!(ctx.selector.active_mode(), Mode::default());
    }

    #[test]
    fn test_mode_switch_resets_validation() {
        let ctx = ctx();
        ctx.set_key_input("short string".to_string());
        assert!(!ctx.validation.key_valid.get());

        ctx.select_mode(Mode::Ctr);
        assert!(ctx.validation.key_valid.get());
        assert!(ctx.validation.iv_valid.get());
    }

    #[test]
    fn test_both_adapters_produce_identical_state() {
        // Tab-strip path: click handler calls select_mode directly.
        let desktop = ctx();
        desktop.select_mode(Mode::Ofb);

        // Mobile path: menu is open, selecting closes it.
        let mobile = ctx();
        mobile.toggle_menu();
        mobile.select_mode(Mode::Ofb);

        assert_eq!(desktop.selector.active_mode(), mobile.selector.active_mode());
        assert_eq!(desktop.selector.active_index(), mobile.selector.active_index());
        assert!(!mobile.selector.is_menu_open());
    }

    #[test]
    fn test_encrypt_then_decrypt_round_trip() {
        let ctx = ctx();
        let image = sample_image();
        ctx.load_image(image.clone());

        for mode in MODES {
            ctx.select_mode(mode);
            ctx.run_operation(true);
            assert_eq!(ctx.banner.get(), None);
            assert!(ctx.encrypted_image.with(|e| e.is_some()));

            ctx.run_operation(false);
            assert_eq!(ctx.banner.get(), None);
            assert_eq!(ctx.decrypted_image.get().unwrap(), image.bytes);
        }
    }

    #[test]
    fn test_gate_failure_surfaces_banner_verbatim() {
        let ctx = ctx();
        ctx.run_operation(true);
        assert_eq!(
            ctx.banner.get().as_deref(),
            Some("Please upload an image before encrypting")
        );

        ctx.run_operation(false);
        assert_eq!(
            ctx.banner.get().as_deref(),
            Some("Please encrypt an image before attempting to decrypt")
        );
    }

    #[test]
    fn test_invalid_key_blocks_encrypt() {
        let ctx = ctx();
        ctx.load_image(sample_image());
        ctx.set_key_input("short string".to_string());
        ctx.run_operation(true);
        assert_eq!(
            ctx.banner.get().as_deref(),
            Some(
                "Invalid encryption key. Please enter a valid 64-character hexadecimal key or generate a new one"
            )
        );
        assert!(ctx.encrypted_image.with(|e| e.is_none()));
    }

    #[test]
    fn test_ecb_ignores_invalid_iv() {
        let ctx = ctx();
        ctx.load_image(sample_image());
        ctx.select_mode(Mode::Ecb);
        ctx.set_iv_input("nope".to_string());
        ctx.run_operation(true);
        assert_eq!(ctx.banner.get(), None);
        assert!(ctx.encrypted_image.with(|e| e.is_some()));
    }

    #[test]
    fn test_clear_all_restores_defaults() {
        let ctx = ctx();
        ctx.load_image(sample_image());
        ctx.set_key_input("bad".to_string());
        ctx.run_operation(true);

        ctx.clear_all();
        assert!(ctx.plain_image.with(|i| i.is_none()));
        assert!(ctx.encrypted_image.with(|e| e.is_none()));
        assert_eq!(ctx.banner.get(), None);
        assert!(ctx.key_text.get().is_empty());
        assert!(ctx.validation.key_valid.get());
    }

    #[test]
    fn test_regenerate_marks_fields_valid() {
        let ctx = ctx();
        ctx.set_key_input("garbage".to_string());
        ctx.set_iv_input("garbage".to_string());

        ctx.regenerate_key();
        ctx.regenerate_iv();
        assert!(ctx.validation.key_valid.get());
        assert!(ctx.validation.iv_valid.get());
    }
}
