//! `window.alert` / `window.confirm` dialogs.

use platform_host::AlertService;

#[derive(Debug, Clone, Copy, Default)]
/// Alert service backed by the browser's native modal dialogs.
pub struct WebAlertService;

impl AlertService for WebAlertService {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            false
        }
    }
}
