#![forbid(unsafe_code)]

//! Wordlist languages and their UI locales.
//!
//! A [`Language`] names both a wordlist (`english.txt`, `japanese.txt`, ...)
//! and the UI locale used while that wordlist is active.

use std::fmt;
use std::str::FromStr;

use crate::catalog::I18nError;

/// A supported wordlist language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    Czech,
    Italian,
    Portuguese,
    Japanese,
    Korean,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    /// Every language, in picker order.
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Czech,
        Language::Italian,
        Language::Portuguese,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    /// Wordlist identifier, also the stored preference value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::Czech => "czech",
            Self::Italian => "italian",
            Self::Portuguese => "portuguese",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
        }
    }

    /// UI locale for this wordlist.
    #[must_use]
    pub const fn ui_locale(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Czech => "cs",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::ChineseSimplified => "zh-Hans",
            Self::ChineseTraditional => "zh-Hant",
        }
    }

    /// Name of the language in itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Español",
            Self::French => "Français",
            Self::Czech => "Čeština",
            Self::Italian => "Italiano",
            Self::Portuguese => "Português",
            Self::Japanese => "日本語",
            Self::Korean => "한국어",
            Self::ChineseSimplified => "简体中文",
            Self::ChineseTraditional => "繁體中文",
        }
    }

    /// Two-letter region badge shown in place of a flag.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::English => "UK",
            Self::Spanish => "ES",
            Self::French => "FR",
            Self::Czech => "CZ",
            Self::Italian => "IT",
            Self::Portuguese => "PT",
            Self::Japanese => "JP",
            Self::Korean => "KR",
            Self::ChineseSimplified => "CN",
            Self::ChineseTraditional => "TW",
        }
    }

    /// Map a locale tag (`en-US`, `zh-TW`, `pt_BR.UTF-8`) to a language.
    ///
    /// The full tag is matched first, then its primary subtag. Unknown tags
    /// map to English.
    #[must_use]
    pub fn detect(tag: &str) -> Language {
        let tag = tag.split(['.', '@']).next().unwrap_or_default().replace('_', "-");
        if let Some(lang) = Self::from_tag(&tag) {
            return lang;
        }
        let primary = tag.split('-').next().unwrap_or_default();
        Self::from_tag(primary).unwrap_or_default()
    }

    /// First usable locale tag among `LC_ALL`, `LC_MESSAGES`, and `LANG`.
    /// `C` and `POSIX` carry no language and are skipped.
    pub fn env_tag() -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
    }

    /// Detect from [`Language::env_tag`].
    pub fn from_env() -> Language {
        Self::env_tag()
            .map(|value| Self::detect(&value))
            .unwrap_or_default()
    }

    fn from_tag(tag: &str) -> Option<Language> {
        Some(match tag {
            "en" => Self::English,
            "es" => Self::Spanish,
            "fr" => Self::French,
            "it" => Self::Italian,
            "pt" => Self::Portuguese,
            "cs" => Self::Czech,
            "ja" => Self::Japanese,
            "ko" => Self::Korean,
            "zh" | "zh-Hans" | "zh-CN" | "zh-SG" => Self::ChineseSimplified,
            "zh-Hant" | "zh-TW" | "zh-HK" | "zh-MO" => Self::ChineseTraditional,
            _ => return None,
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| I18nError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "klingon".parse::<Language>(),
            Err(I18nError::UnknownLanguage("klingon".into()))
        );
    }

    #[test]
    fn ui_locales() {
        assert_eq!(Language::English.ui_locale(), "en");
        assert_eq!(Language::ChineseSimplified.ui_locale(), "zh-Hans");
        assert_eq!(Language::ChineseTraditional.ui_locale(), "zh-Hant");
    }

    #[test]
    fn detect_exact_tag_before_primary() {
        assert_eq!(Language::detect("zh-TW"), Language::ChineseTraditional);
        assert_eq!(Language::detect("zh-HK"), Language::ChineseTraditional);
        assert_eq!(Language::detect("zh-CN"), Language::ChineseSimplified);
        assert_eq!(Language::detect("zh"), Language::ChineseSimplified);
    }

    #[test]
    fn detect_primary_subtag() {
        assert_eq!(Language::detect("en-US"), Language::English);
        assert_eq!(Language::detect("fr-CA"), Language::French);
        assert_eq!(Language::detect("pt_BR.UTF-8"), Language::Portuguese);
    }

    #[test]
    fn detect_unknown_is_english() {
        assert_eq!(Language::detect("de-DE"), Language::English);
        assert_eq!(Language::detect(""), Language::English);
    }
}
