//! User-facing notifications for failed or partial mutations.

use crate::utils::dom;

/// Surface a single human-readable message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Blocking `window.alert()` notifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        dom::alert(message);
    }
}
