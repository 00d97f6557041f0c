//! Bundled string tables for presentation copy.
//!
//! Tables ship as JSON resources compiled into the crate, one file per
//! locale and table. They are parsed once on first lookup.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::domain::ports::Localizer;

/// Locale used when the requested locale has no bundled tables.
pub const DEFAULT_LOCALE: &str = "en";

/// Raw bundled resources as `(locale, table, json)`.
const BUNDLED_TABLES: &[(&str, &str, &str)] = &[
    (
        "en",
        "ImageComments",
        include_str!("../../resources/localization/en/ImageComments.json"),
    ),
    (
        "pt-BR",
        "ImageComments",
        include_str!("../../resources/localization/pt-BR/ImageComments.json"),
    ),
];

type StringTable = BTreeMap<String, String>;
/// String tables of one locale, keyed by table name.
type LocaleTables = BTreeMap<&'static str, StringTable>;

fn bundled_tables() -> &'static BTreeMap<&'static str, LocaleTables> {
    static TABLES: OnceLock<BTreeMap<&'static str, LocaleTables>> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut tables: BTreeMap<&'static str, LocaleTables> = BTreeMap::new();
        for &(locale, table, raw) in BUNDLED_TABLES {
            match serde_json::from_str::<StringTable>(raw) {
                Ok(strings) => {
                    tables.entry(locale).or_default().insert(table, strings);
                }
                Err(error) => {
                    warn!(locale, table, error = %error, "skipping malformed string table");
                }
            }
        }
        tables
    })
}

/// Return the locales that ship at least one string table.
pub fn bundled_locales() -> Vec<&'static str> {
    bundled_tables().keys().copied().collect()
}

/// [`Localizer`] backed by the string tables compiled into this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledLocalizer {
    locale: String,
}

impl BundledLocalizer {
    /// Build a localizer for `locale`, falling back to [`DEFAULT_LOCALE`]
    /// for lookups the locale does not cover.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    fn lookup(locale: &str, key: &str, table: &str) -> Option<String> {
        bundled_tables()
            .get(locale)?
            .get(table)?
            .get(key)
            .cloned()
    }
}

impl Default for BundledLocalizer {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Localizer for BundledLocalizer {
    fn localized(&self, key: &str, table: &str) -> String {
        Self::lookup(&self.locale, key, table)
            .or_else(|| Self::lookup(DEFAULT_LOCALE, key, table))
            .unwrap_or_else(|| key.to_owned())
    }
}
