use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tokio_rusqlite::Connection;

use crate::database::{self, dictionary};
use crate::dictionary::{Entry, LanguageCount};
use crate::{Error, Result};


/// Two-way mapping between the display labels shown in the language picker
/// and the raw language names stored in the entry rows. Built once per
/// session; a label the index does not know resolves to no filter at all.
pub struct LanguageIndex {
    labels: Vec<String>,
    by_label: HashMap<String, String>,
}

impl LanguageIndex {
    fn new(counts: Vec<LanguageCount>) -> LanguageIndex {
        let mut labels = Vec::with_capacity(counts.len());
        let mut by_label = HashMap::with_capacity(counts.len());

        for count in counts {
            let label = format!("{} ({})", count.language, count.entries);
            labels.push(label.clone());
            by_label.insert(label, count.language);
        }

        LanguageIndex { labels, by_label }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.by_label.get(label).map(String::as_str)
    }

    pub fn label_for(&self, language: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|label| self.by_label[label.as_str()] == language)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: Entry,
}

/// The entire contract a front end has to render. Nothing outside these four
/// cases can come out of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    EmptyQuery,
    Failed(String),
    NoMatch(String),
    Found {
        word: String,
        entries: Vec<RankedEntry>,
    },
}

#[derive(Clone)]
pub struct LookupService {
    conn: Connection,
    languages: Arc<LanguageIndex>,
}

impl LookupService {
    /// Opens the store and builds the language index. A store that cannot be
    /// opened or enumerated is unusable; the caller must abort startup.
    pub async fn connect(path: PathBuf) -> Result<LookupService> {
        let conn = database::open_store(path).await?;

        let counts = dictionary::list_languages(&conn)
            .await
            .map_err(|error| Error::StoreUnavailable(error.to_string()))?;

        let languages = LanguageIndex::new(counts);
        tracing::info!(
            "dictionary store opened with {} languages",
            languages.labels().len()
        );

        Ok(LookupService {
            conn,
            languages: Arc::new(languages),
        })
    }

    pub fn language_labels(&self) -> &[String] {
        self.languages.labels()
    }

    pub fn default_label(&self) -> Option<&str> {
        self.languages.label_for("English")
    }

    pub async fn search(&self, raw_word: &str, selected_label: Option<&str>) -> SearchOutcome {
        let word = raw_word.trim();
        if word.is_empty() {
            return SearchOutcome::EmptyQuery;
        }

        let language = selected_label
            .and_then(|label| self.languages.resolve(label))
            .map(str::to_owned);

        match dictionary::find_entries(&self.conn, word.to_owned(), language).await {
            Ok(entries) if entries.is_empty() => SearchOutcome::NoMatch(word.to_owned()),
            Ok(entries) => SearchOutcome::Found {
                word: word.to_owned(),
                entries: entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| RankedEntry {
                        rank: i + 1,
                        entry,
                    })
                    .collect(),
            },
            Err(error) => {
                tracing::warn!("lookup for {word:?} failed: {error}");
                SearchOutcome::Failed(error.to_string())
            }
        }
    }
}

impl fmt::Debug for LookupService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupService")
            .field("languages", &self.languages.labels().len())
            .finish_non_exhaustive()
    }
}
