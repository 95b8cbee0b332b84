//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used when a built tag drops something the caller put into it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are written to stderr at all.
static ENABLED: AtomicBool = AtomicBool::new(true);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // The set only ever holds complete strings, so a poisoned lock is still usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about something the caller probably didn't intend (prints once per unique message)
///
/// The warning is recorded even while output is disabled, so [`has_warned`]
/// stays accurate.
///
/// # Example
/// ```
/// use tagbuilder_common::warning::{has_warned, warn_once};
///
/// warn_once("CLI", "attribute 'id' on <div> is not rendered");
/// assert!(has_warned("CLI", "attribute 'id' on <div> is not rendered"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print && ENABLED.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[TagBuilder {component}] ⚠ {message}").yellow());
    }
}

/// Whether this exact warning has been issued since the last [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

/// Turn stderr output on or off. Warnings keep being recorded either way.
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}
