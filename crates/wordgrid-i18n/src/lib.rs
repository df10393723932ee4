#![forbid(unsafe_code)]

//! Internationalization (i18n) for wordgrid.
//!
//! Provides externalized string storage with key-based lookup, a locale
//! fallback chain, `{name}` interpolation, a coverage report, the built-in
//! UI translations, and the mapping between wordlist languages and UI
//! locales.
//!
//! # Role in wordgrid
//! `wordgrid-i18n` isolates localization so widgets stay deterministic:
//! they receive already-resolved strings and never consult a locale.
//!
//! # How it fits in the system
//! The application builds one [`StringCatalog`] via [`builtin_catalog`] and
//! resolves every label through it for the active [`Language`]. It does not
//! depend on rendering or runtime.

pub mod builtin;
pub mod catalog;
pub mod language;

pub use builtin::{DEFAULT_LOCALE, builtin_catalog, keys};
pub use catalog::{
    CoverageReport, I18nError, LocaleCoverage, LocaleStrings, StringCatalog, interpolate,
};
pub use language::Language;
