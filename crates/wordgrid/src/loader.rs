#![forbid(unsafe_code)]

//! Wordlist sources and load sequencing.
//!
//! A load fetches raw text from a [`WordlistSource`] and parses it into a
//! [`WordlistIndex`]. Loads run as background tasks, so two language
//! switches in quick succession can complete in either order. Each load is
//! stamped with a [`LoadTicket`] from a [`LoadSequencer`]; only the result
//! carrying the newest ticket is applied.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use wordgrid_core::{LoadError, WordlistIndex};
use wordgrid_i18n::Language;

/// Where wordlist text comes from.
pub trait WordlistSource: Send + Sync {
    /// Short description for logs.
    fn describe(&self) -> String;

    /// Raw newline-delimited text for `language`.
    fn fetch(&self, language: Language) -> Result<String, LoadError>;
}

/// Reads `<dir>/<language>.txt`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the list for `language`.
    pub fn path_for(&self, language: Language) -> PathBuf {
        self.dir.join(format!("{}.txt", language.code()))
    }

    /// Languages with a file present.
    pub fn available(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|&language| self.path_for(language).is_file())
            .collect()
    }
}

impl WordlistSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }

    fn fetch(&self, language: Language) -> Result<String, LoadError> {
        let path = self.path_for(language);
        fs::read_to_string(&path)
            .map_err(|err| LoadError::source(format!("{}: {err}", path.display())))
    }
}

/// Lists held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    lists: HashMap<Language, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the text for `language` (builder).
    #[must_use]
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.lists.insert(language, text.into());
        self
    }
}

impl WordlistSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory lists", self.lists.len())
    }

    fn fetch(&self, language: Language) -> Result<String, LoadError> {
        self.lists
            .get(&language)
            .cloned()
            .ok_or_else(|| LoadError::source(format!("no {language} wordlist")))
    }
}

/// Fetch and parse the list for `language`.
pub fn load_wordlist(
    source: &dyn WordlistSource,
    language: Language,
) -> Result<WordlistIndex, LoadError> {
    let _span = tracing::info_span!("wordlist.load", %language).entered();
    let text = source.fetch(language)?;
    let index = WordlistIndex::parse(&text)?;
    tracing::debug!(words = index.len(), "wordlist parsed");
    Ok(index)
}

/// Identifies one load request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out tickets and remembers the newest one.
#[derive(Debug, Clone, Default)]
pub struct LoadSequencer {
    issued: u64,
    pending: bool,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load. Every earlier ticket becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        self.pending = true;
        LoadTicket(self.issued)
    }

    /// Whether `ticket` belongs to the newest load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Record a finished load. Returns `false` for a stale ticket, whose
    /// result must be dropped.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = false;
        true
    }

    /// Whether the newest load has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of loads started.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
