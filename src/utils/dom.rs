//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{File, FileList, HtmlAnchorElement, HtmlInputElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history and fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

// =============================================================================
// User Feedback
// =============================================================================

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Download `url` through a temporary `<a download>` element.
pub fn trigger_download(url: &str, filename: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(link) = document
        .create_element("a")
        .map(|el| el.unchecked_into::<HtmlAnchorElement>())
    else {
        return;
    };

    link.set_href(url);
    link.set_download(filename);
    if body.append_child(&link).is_ok() {
        link.click();
        let _ = body.remove_child(&link);
    }
}

// =============================================================================
// Files
// =============================================================================

/// Collect a `FileList` into owned handles, keeping the user's order.
pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Take the files selected in a file input and clear it so the same file
/// can be picked again.
pub fn take_input_files(input: &HtmlInputElement) -> Vec<File> {
    let files = files_from_list(input.files());
    input.set_value("");
    files
}
