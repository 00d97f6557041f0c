//! Localization lookup capability.

/// Resolves user-facing copy from keyed string tables.
pub trait Localizer: Send + Sync {
    /// Return the string stored under `key` in `table`.
    ///
    /// Implementations return `key` itself when no entry exists, matching
    /// platform string-table behaviour.
    fn localized(&self, key: &str, table: &str) -> String;
}
