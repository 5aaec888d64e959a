//! Non-fatal warnings with colored terminal output.
//!
//! Each distinct `(component, message)` pair is printed once per process
//! (or until [`clear_warnings`] is called), so a selector built in a loop
//! doesn't flood stderr.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Warnings already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Print a warning to stderr unless the same one was already printed.
///
/// # Example
/// ```
/// cssel_common::warning::warn_once("Selector", "unknown combinator '/deep/'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[cssel {component}] warning: {message}").yellow());
    }
}

/// Whether `warn_once` has already reported this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Forget every recorded warning.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("Test", "recorded message");
        assert!(has_warned("Test", "recorded message"));
        assert!(!has_warned("Other", "recorded message"));
    }

    #[test]
    fn test_unknown_message_not_recorded() {
        assert!(!has_warned("Test", "never emitted"));
    }
}
