#![forbid(unsafe_code)]

//! Ordered wordlist with normalized exact and prefix lookup.
//!
//! Every comparison goes through [`normalize`]: leading and trailing
//! whitespace is trimmed and the result is lowercased. The query and the
//! stored entries are normalized identically, so `"  ABANDON "` finds
//! `"abandon"`.
//!
//! The index keeps the original spelling of every entry for display and a
//! pre-normalized shadow copy for matching.

use std::fmt;

/// Sentinel returned by [`WordlistIndex::get_word`] for a missing entry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Upper bound on the number of words a list may hold.
pub const MAX_WORDS: usize = 2048;

/// Default suggestion limit for prefix lookup.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Trim surrounding whitespace and lowercase.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Failure to turn raw text into a wordlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The text contained no words.
    Empty,
    /// The text contained more than [`MAX_WORDS`] words.
    TooManyWords {
        /// Number of words found.
        count: usize,
    },
    /// The source could not deliver the text.
    Source {
        /// Human-readable cause.
        message: String,
    },
}

impl LoadError {
    /// Wrap a source failure.
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "wordlist is empty"),
            Self::TooManyWords { count } => {
                write!(f, "wordlist has {count} words (maximum {MAX_WORDS})")
            }
            Self::Source { message } => write!(f, "wordlist source failed: {message}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// A prefix match together with its 1-based position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The word as stored in the list.
    pub word: String,
    /// 1-based position (equal to the bit value that selects it).
    pub position: usize,
}

/// Ordered wordlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordlistIndex {
    words: Vec<String>,
    normalized: Vec<String>,
}

impl WordlistIndex {
    /// An empty index. Every lookup misses until words are loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from words as given. Entries are trimmed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .collect();
        let normalized = words.iter().map(|w| normalize(w)).collect();
        Self { words, normalized }
    }

    /// Parse newline-delimited text.
    ///
    /// The whole text is trimmed, split on `\n`, each line trimmed and blank
    /// lines skipped. Lists that end up empty or longer than [`MAX_WORDS`]
    /// are rejected.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let words: Vec<&str> = text
            .trim()
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        if words.len() > MAX_WORDS {
            return Err(LoadError::TooManyWords { count: words.len() });
        }
        Ok(Self::from_words(words))
    }

    /// Replace the whole list.
    pub fn replace(&mut self, other: WordlistIndex) {
        *self = other;
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when nothing is loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The stored words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word at the 0-based `index`, if present.
    #[inline]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Word at the 0-based `index`, or [`NOT_AVAILABLE`].
    pub fn get_word(&self, index: usize) -> &str {
        self.word(index).unwrap_or(NOT_AVAILABLE)
    }

    /// 0-based index of the first entry equal to `word` after normalization.
    pub fn find_index(&self, word: &str) -> Option<usize> {
        let needle = normalize(word);
        if needle.is_empty() {
            return None;
        }
        self.normalized.iter().position(|w| *w == needle)
    }

    /// Whether `word` is in the list. Blank input is never in the list.
    pub fn is_word_in_wordlist(&self, word: &str) -> bool {
        self.find_index(word).is_some()
    }

    /// Up to `max_results` words starting with `prefix`, in list order.
    ///
    /// A blank prefix yields nothing.
    pub fn get_suggestions(&self, prefix: &str, max_results: usize) -> Vec<&str> {
        self.matching(prefix, max_results)
            .map(|i| self.words[i].as_str())
            .collect()
    }

    /// Like [`get_suggestions`](Self::get_suggestions) but with 1-based positions.
    pub fn suggest(&self, prefix: &str, max_results: usize) -> Vec<Suggestion> {
        self.matching(prefix, max_results)
            .map(|i| Suggestion {
                word: self.words[i].clone(),
                position: i + 1,
            })
            .collect()
    }

    fn matching(&self, prefix: &str, max_results: usize) -> impl Iterator<Item = usize> + '_ {
        let needle = normalize(prefix);
        let limit = if needle.is_empty() { 0 } else { max_results };
        self.normalized
            .iter()
            .enumerate()
            .filter(move |(_, w)| w.starts_with(needle.as_str()))
            .map(|(i, _)| i)
            .take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordlistIndex {
        WordlistIndex::from_words(["abandon", "ability", "able", "about", "above", "zoo"])
    }

    #[test]
    fn get_word_in_and_out_of_range() {
        let list = sample();
        assert_eq!(list.get_word(0), "abandon");
        assert_eq!(list.get_word(5), "zoo");
        assert_eq!(list.get_word(6), NOT_AVAILABLE);
        assert_eq!(WordlistIndex::new().get_word(0), NOT_AVAILABLE);
    }

    #[test]
    fn find_index_normalizes_query() {
        let list = sample();
        assert_eq!(list.find_index("ABANDON"), Some(0));
        assert_eq!(list.find_index("  able\t"), Some(2));
        assert_eq!(list.find_index("abl"), None);
        assert_eq!(list.find_index(""), None);
    }

    #[test]
    fn find_index_normalizes_entries() {
        let list = WordlistIndex::from_words(["  Mixed ", "UPPER"]);
        assert_eq!(list.find_index("mixed"), Some(0));
        assert_eq!(list.find_index("upper"), Some(1));
        assert_eq!(list.get_word(0), "Mixed");
    }

    #[test]
    fn blank_input_is_never_a_word() {
        let list = sample();
        assert!(!list.is_word_in_wordlist(""));
        assert!(!list.is_word_in_wordlist("   "));
        assert!(list.is_word_in_wordlist("Zoo"));
    }

    #[test]
    fn suggestions_preserve_order_and_limit() {
        let list = sample();
        assert_eq!(
            list.get_suggestions("ab", 10),
            vec!["abandon", "ability", "able", "about", "above"]
        );
        assert_eq!(list.get_suggestions("AB", 2), vec!["abandon", "ability"]);
        assert!(list.get_suggestions("ab", 0).is_empty());
    }

    #[test]
    fn suggestions_are_case_insensitive_both_ways() {
        let list = WordlistIndex::from_words(["ab1", "AB2", "xy"]);
        assert_eq!(list.get_suggestions("AB", 10), vec!["ab1", "AB2"]);
    }

    #[test]
    fn blank_prefix_has_no_suggestions() {
        let list = sample();
        assert!(list.get_suggestions("", 10).is_empty());
        assert!(list.get_suggestions("  ", 10).is_empty());
    }

    #[test]
    fn suggest_reports_one_based_positions() {
        let list = sample();
        let s = list.suggest("abo", 10);
        assert_eq!(
            s,
            vec![
                Suggestion { word: "about".into(), position: 4 },
                Suggestion { word: "above".into(), position: 5 },
            ]
        );
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let list = WordlistIndex::parse("\n abandon\r\nability \n\n able\n").unwrap();
        assert_eq!(list.words(), &["abandon", "ability", "able"]);
    }

    #[test]
    fn parse_rejects_empty_and_oversized() {
        assert_eq!(WordlistIndex::parse("  \n \n"), Err(LoadError::Empty));
        let big = (0..MAX_WORDS + 1).map(|i| format!("w{i}")).collect::<Vec<_>>().join("\n");
        assert_eq!(
            WordlistIndex::parse(&big),
            Err(LoadError::TooManyWords { count: MAX_WORDS + 1 })
        );
    }

    #[test]
    fn replace_is_wholesale() {
        let mut list = sample();
        list.replace(WordlistIndex::from_words(["uno", "dos"]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.find_index("abandon"), None);
    }

    #[test]
    fn load_error_display() {
        assert_eq!(LoadError::Empty.to_string(), "wordlist is empty");
        assert_eq!(
            LoadError::source("not found").to_string(),
            "wordlist source failed: not found"
        );
    }
}
