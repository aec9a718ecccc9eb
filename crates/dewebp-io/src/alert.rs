//! Blocking user alerts.

use tracing::warn;

/// Show a blocking `window.alert` with `message`.
///
/// Silently logs and returns when no window is available.
pub fn show(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!(message, "no window to show alert");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        warn!(error = ?e, "alert failed");
    }
}
