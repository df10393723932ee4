#![forbid(unsafe_code)]

//! Key-based string catalog with locale fallback.
//!
//! Lookup tries the requested locale first, then each locale of the
//! fallback chain in order. Interpolation replaces `{name}` placeholders in
//! a single left-to-right pass: substituted values are never rescanned and
//! placeholders without a matching argument are left intact.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Errors from strict catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// No locale in the chain defines `key`.
    MissingKey {
        /// Requested locale.
        locale: String,
        /// Requested key.
        key: String,
    },
    /// A language name could not be recognized.
    UnknownLanguage(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { locale, key } => {
                write!(f, "missing translation key '{key}' for locale '{locale}'")
            }
            Self::UnknownLanguage(name) => write!(f, "unknown language '{name}'"),
        }
    }
}

impl std::error::Error for I18nError {}

/// Strings for one locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a key in this locale only.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when the table holds no strings.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Collection of locales with a fallback chain.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<String, LocaleStrings>,
    fallback_chain: Vec<String>,
}

impl StringCatalog {
    /// Empty catalog without fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the strings for `locale`.
    pub fn add_locale(&mut self, locale: &str, strings: LocaleStrings) {
        self.locales.insert(locale.to_string(), strings);
    }

    /// Locales consulted, in order, after the requested one misses.
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    /// Registered locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    /// Resolve `key` for `locale`, following the fallback chain.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        std::iter::once(locale)
            .chain(self.fallback_chain.iter().map(String::as_str))
            .filter_map(|code| self.locales.get(code))
            .find_map(|strings| strings.get(key))
    }

    /// Like [`get`](Self::get) but reports the miss.
    pub fn try_get(&self, locale: &str, key: &str) -> Result<&str, I18nError> {
        self.get(locale, key).ok_or_else(|| I18nError::MissingKey {
            locale: locale.to_string(),
            key: key.to_string(),
        })
    }

    /// Resolve and interpolate.
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|template| interpolate(template, args))
    }

    /// Resolve, interpolate, and fall back to the key itself when missing.
    ///
    /// UI code uses this so a missing translation shows up as a visible key
    /// rather than a blank label.
    pub fn text(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> String {
        self.format(locale, key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// Coverage of every registered locale against the union of all keys.
    pub fn coverage_report(&self) -> CoverageReport {
        let all_keys: BTreeSet<&str> =
            self.locales.values().flat_map(LocaleStrings::keys).collect();
        let total_keys = all_keys.len();
        let mut locales: Vec<LocaleCoverage> = self
            .locales
            .iter()
            .map(|(code, strings)| {
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|k| strings.get(k).is_none())
                    .map(|k| (*k).to_string())
                    .collect();
                let present = total_keys - missing.len();
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    present as f64 * 100.0 / total_keys as f64
                };
                LocaleCoverage {
                    locale: code.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));
        CoverageReport {
            total_keys,
            locales,
        }
    }
}

/// Per-locale coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    /// Locale code.
    pub locale: String,
    /// Keys defined by this locale.
    pub present: usize,
    /// Keys defined elsewhere but not here, sorted.
    pub missing: Vec<String>,
    /// `present / total * 100`, or 100 when there are no keys.
    pub coverage_percent: f64,
}

/// Coverage across all locales.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Size of the union of keys across locales.
    pub total_keys: usize,
    /// One entry per locale, sorted by code.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Coverage entry for `locale`.
    pub fn locale(&self, locale: &str) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|lc| lc.locale == locale)
    }
}

/// Replace `{name}` placeholders in one pass.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}
