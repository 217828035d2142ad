//! Last-resort error containment.
//!
//! Installs process-wide `error` and `unhandledrejection` listeners that
//! suppress the browser's default error surfacing, logging only in
//! development builds. Also provides [`ErrorHooks::safe_sync`] and
//! [`ErrorHooks::safe_async`] which run a unit of work and substitute a
//! caller-provided fallback on failure.
//!
//! Whether logging happens is an explicit injected flag, not an ambient
//! environment check, so the wrappers stay testable off-browser.

use std::fmt;
use std::future::Future;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

/// Configuration for the global error hooks.
#[derive(Clone, Copy, Debug)]
pub struct ErrorHookConfig {
    /// Log contained failures to the console. Off in release builds.
    pub development_mode: bool,
}

impl Default for ErrorHookConfig {
    fn default() -> Self {
        Self {
            development_mode: cfg!(debug_assertions),
        }
    }
}

/// Handle to the installed error containment.
///
/// Created once in `main` and shared through context; `Copy` so components
/// can capture it freely in event handlers.
#[derive(Clone, Copy)]
pub struct ErrorHooks {
    development_mode: bool,
}

impl ErrorHooks {
    pub fn new(config: ErrorHookConfig) -> Self {
        Self {
            development_mode: config.development_mode,
        }
    }

    /// Registers the window-level `error` and `unhandledrejection` handlers.
    ///
    /// Call once at startup. Both handlers suppress default surfacing so an
    /// uncaught error never produces a browser-native dialog; no recovery is
    /// attempted beyond that.
    pub fn install(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let Some(window) = web_sys::window() else {
                return;
            };

            let hooks = *self;
            let on_error = Closure::wrap(Box::new(move |event: web_sys::ErrorEvent| {
                event.prevent_default();
                hooks.log("uncaught error", &event.message());
            }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
            let _ = window.add_event_listener_with_callback(
                "error",
                on_error.as_ref().unchecked_ref(),
            );
            on_error.forget();

            let hooks = *self;
            let on_rejection =
                Closure::wrap(Box::new(move |event: web_sys::PromiseRejectionEvent| {
                    event.prevent_default();
                    hooks.log("unhandled rejection", &format!("{:?}", event.reason()));
                }) as Box<dyn FnMut(web_sys::PromiseRejectionEvent)>);
            let _ = window.add_event_listener_with_callback(
                "unhandledrejection",
                on_rejection.as_ref().unchecked_ref(),
            );
            on_rejection.forget();
        }
    }

    /// Runs `work`, substituting `fallback` on failure.
    ///
    /// The failure is logged in development builds only.
    pub fn safe_sync<T, E, F>(&self, fallback: T, work: F) -> T
    where
        E: fmt::Debug,
        F: FnOnce() -> Result<T, E>,
    {
        match work() {
            Ok(value) => value,
            Err(err) => {
                self.log("contained failure", &format!("{:?}", err));
                fallback
            }
        }
    }

    /// Awaits `work`, substituting `fallback` on failure.
    ///
    /// The failure is logged in development builds only.
    pub async fn safe_async<T, E, F>(&self, fallback: T, work: F) -> T
    where
        E: fmt::Debug,
        F: Future<Output = Result<T, E>>,
    {
        match work.await {
            Ok(value) => value,
            Err(err) => {
                self.log("contained failure", &format!("{:?}", err));
                fallback
            }
        }
    }

    fn log(&self, context: &str, detail: &str) {
        if !self.development_mode {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!(
            "[cipherpix] {}: {}",
            context, detail
        )));
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("[cipherpix] {}: {}", context, detail);
    }
}

impl Default for ErrorHooks {
    fn default() -> Self {
        Self::new(ErrorHookConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent() -> ErrorHooks {
        ErrorHooks::new(ErrorHookConfig {
            development_mode: false,
        })
    }

    #[test]
    fn test_safe_sync_passes_through_success() {
        let result = silent().safe_sync(0, || Ok::<_, String>(41 + 1));
        assert_eq!(result, 42);
    }

    #[test]
    fn test_safe_sync_substitutes_fallback() {
        let result = silent().safe_sync(7, || Err::<i32, _>("boom"));
        assert_eq!(result, 7);
    }

    #[test]
    fn test_safe_sync_logs_in_development() {
        // Logging goes to stderr off-wasm; this just exercises the path.
        let hooks = ErrorHooks::new(ErrorHookConfig {
            development_mode: true,
        });
        let result = hooks.safe_sync(String::new(), || Err::<String, _>("expected failure"));
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_safe_async_substitutes_fallback() {
        let ok = silent().safe_async(0, async { Ok::<_, String>(5) }).await;
        assert_eq!(ok, 5);

        let fell_back = silent()
            .safe_async(vec![1u8], async { Err::<Vec<u8>, _>("boom") })
            .await;
        assert_eq!(fell_back, vec![1u8]);
    }
}
