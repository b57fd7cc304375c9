// Deal-note corpus: loaded once at startup, read-only afterwards.
// Lookup is an exact, case-insensitive match on company name. No fuzzy search.

pub mod deal_note;
pub mod handlers;
pub mod source;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};

use deal_note::fold_case;
pub use deal_note::DealNote;
pub use source::{DealNoteSource, DirectorySource, S3Source};

#[derive(Debug, Error)]
pub enum CorpusError {
    /// The source itself could not be read. The only condition that aborts a load.
    #[error("deal note source {source_name} is unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
}

/// In-memory collection of deal notes keyed by lowercased company name.
///
/// Shared across request handlers behind an `Arc` without locking: nothing
/// mutates it after construction.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    notes: Vec<DealNote>,
    by_key: HashMap<String, usize>,
}

impl CorpusIndex {
    /// Reads every record from `source`. Malformed records are logged and skipped.
    pub async fn load(source: &dyn DealNoteSource) -> Result<Self, CorpusError> {
        let records = source.fetch_records().await?;
        let total = records.len();

        let notes = records.into_iter().filter_map(|record| {
            match DealNote::from_slice(&record.body) {
                Ok(note) => Some(note),
                Err(e) => {
                    warn!("Skipping malformed deal note {}: {e}", record.origin);
                    None
                }
            }
        });
        let index = Self::from_notes(notes);

        info!(
            "Loaded {} deal notes from {} ({} records read)",
            index.len(),
            source.describe(),
            total
        );
        Ok(index)
    }

    /// Builds an index in iteration order. When two notes share a company key
    /// the first one wins and the later one is dropped.
    pub fn from_notes(notes: impl IntoIterator<Item = DealNote>) -> Self {
        let mut index = Self::default();
        for note in notes {
            let key = note.key();
            if index.by_key.contains_key(&key) {
                warn!("Duplicate deal note for '{}' ignored", note.company());
                continue;
            }
            index.by_key.insert(key, index.notes.len());
            index.notes.push(note);
        }
        index
    }

    pub fn find(&self, company_name: &str) -> Option<&DealNote> {
        self.by_key
            .get(&fold_case(company_name))
            .map(|&i| &self.notes[i])
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes in load order.
    pub fn iter(&self) -> impl Iterator<Item = &DealNote> {
        self.notes.iter()
    }

    #[allow(dead_code)]
    pub fn companies(&self) -> Vec<&str> {
        self.notes.iter().map(DealNote::company).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::source::RawRecord;
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct StaticSource(Vec<RawRecord>);

    #[async_trait]
    impl DealNoteSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn fetch_records(&self) -> Result<Vec<RawRecord>, CorpusError> {
            Ok(self.0.clone())
        }
    }

    struct DownSource;

    #[async_trait]
    impl DealNoteSource for DownSource {
        fn describe(&self) -> String {
            "down".to_string()
        }

        async fn fetch_records(&self) -> Result<Vec<RawRecord>, CorpusError> {
            Err(CorpusError::Unavailable {
                source_name: self.describe(),
                reason: "connection refused".to_string(),
            })
        }
    }

    fn record(origin: &str, body: &str) -> RawRecord {
        RawRecord {
            origin: origin.to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    fn note(value: serde_json::Value) -> DealNote {
        DealNote::from_value(value).unwrap()
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let index = CorpusIndex::from_notes([
            note(json!({"company": "Hexafun", "sector": "gaming"})),
            note(json!({"company": "Naario"})),
        ]);

        for company in index.companies() {
            let exact = index.find(company).unwrap();
            assert_eq!(index.find(&company.to_uppercase()).unwrap(), exact);
            assert_eq!(index.find(&company.to_lowercase()).unwrap(), exact);
        }
        assert_eq!(index.find("HEXAFUN").unwrap().sector(), Some("gaming"));
    }

    #[test]
    fn test_find_matches_uppercase_expansion_of_non_ascii_name() {
        let index = CorpusIndex::from_notes([note(json!({"company": "Straße Labs"}))]);
        let exact = index.find("Straße Labs").unwrap();

        assert_eq!(index.find("STRASSE LABS").unwrap(), exact);
        assert_eq!(index.find(&"Straße Labs".to_uppercase()).unwrap(), exact);
        assert_eq!(index.find("straße labs").unwrap(), exact);
        assert!(index.find("Strasse").is_none());
    }

    #[test]
    fn test_find_has_no_partial_or_fuzzy_match() {
        let index = CorpusIndex::from_notes([note(json!({"company": "Hexafun"}))]);
        assert!(index.find("unknown-co").is_none());
        assert!(index.find("Hexa").is_none());
        assert!(index.find(" Hexafun").is_none());
        assert!(index.find("").is_none());
    }

    #[test]
    fn test_first_loaded_duplicate_wins() {
        let index = CorpusIndex::from_notes([
            note(json!({"company": "Hexafun", "sector": "first"})),
            note(json!({"company": "HEXAFUN", "sector": "second"})),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.find("hexafun").unwrap().sector(), Some("first"));
    }

    #[tokio::test]
    async fn test_load_skips_malformed_records() {
        let source = StaticSource(vec![
            record("a.json", r#"{"company": "Alpha"}"#),
            record("b.json", r#"{"company": "#),
            record("c.json", r#"{"sector": "no company"}"#),
            record("d.json", r#"[1, 2, 3]"#),
            record("e.json", r#"{"dealNote": {"company": "Echo"}}"#),
        ]);

        let index = CorpusIndex::load(&source).await.unwrap();
        assert_eq!(index.companies(), vec!["Alpha", "Echo"]);
    }

    #[tokio::test]
    async fn test_load_propagates_unavailable_source() {
        let err = CorpusIndex::load(&DownSource).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("hexafun.json"),
            r#"{"company": "Hexafun", "founders": {"vesting": "4 years"}}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "not json").unwrap();

        let index = CorpusIndex::load(&DirectorySource::new(dir.path()))
            .await
            .unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.find("hexafun").is_some());
    }
}
