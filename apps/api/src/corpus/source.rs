//! Document sources the corpus is loaded from.
//!
//! A source only enumerates raw records. Parsing happens in `CorpusIndex::load`
//! so that a malformed record can be skipped while an unreachable source fails
//! the whole load.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;
use tracing::{info, warn};

use super::CorpusError;

/// One unparsed record and where it came from (file path or object key).
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub origin: String,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait DealNoteSource: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;

    async fn fetch_records(&self) -> Result<Vec<RawRecord>, CorpusError>;
}

fn is_json_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".json")
}

// ────────────────────────────────────────────────────────────────────────────
// Local directory
// ────────────────────────────────────────────────────────────────────────────

/// Every `*.json` file directly inside a directory, in file-name order.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DealNoteSource for DirectorySource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<RawRecord>, CorpusError> {
        let unavailable = |reason: String| CorpusError::Unavailable {
            source_name: self.describe(),
            reason,
        };

        let mut read_dir = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let mut paths = Vec::new();
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| unavailable(e.to_string()))?
        {
            let path = entry.path();
            let is_json = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_json_name);
            if is_json && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            warn!("No JSON files found in '{}'", self.describe());
        }

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            match tokio::fs::read(&path).await {
                Ok(body) => records.push(RawRecord {
                    origin: path.display().to_string(),
                    body,
                }),
                Err(e) => warn!("Skipping unreadable deal note {}: {e}", path.display()),
            }
        }

        Ok(records)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// S3 / MinIO
// ────────────────────────────────────────────────────────────────────────────

/// Every `*.json` object under a key prefix, in listing (lexicographic) order.
pub struct S3Source {
    client: S3Client,
    bucket: String,
    prefix: String,
}

impl S3Source {
    pub fn new(client: S3Client, bucket: String, prefix: String) -> Self {
        Self {
            client,
            bucket,
            prefix,
        }
    }

    async fn list_keys(&self) -> Result<Vec<String>, CorpusError> {
        let mut keys = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let page = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(&self.prefix)
                .set_continuation_token(continuation.take())
                .send()
                .await
                .map_err(|e| CorpusError::Unavailable {
                    source_name: self.describe(),
                    reason: DisplayErrorContext(e).to_string(),
                })?;

            keys.extend(
                page.contents()
                    .iter()
                    .filter_map(|o| o.key())
                    .filter(|k| is_json_name(k))
                    .map(String::from),
            );

            match (page.is_truncated(), page.next_continuation_token()) {
                (Some(true), Some(token)) => continuation = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(keys)
    }
}

#[async_trait]
impl DealNoteSource for S3Source {
    fn describe(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.prefix)
    }

    async fn fetch_records(&self) -> Result<Vec<RawRecord>, CorpusError> {
        let keys = self.list_keys().await?;
        info!("Found {} deal note objects under {}", keys.len(), self.describe());

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let object = match self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(&key)
                .send()
                .await
            {
                Ok(o) => o,
                Err(e) => {
                    warn!("Skipping deal note s3://{}/{key}: {}", self.bucket, DisplayErrorContext(e));
                    continue;
                }
            };

            match object.body.collect().await {
                Ok(bytes) => records.push(RawRecord {
                    origin: format!("s3://{}/{key}", self.bucket),
                    body: bytes.into_bytes().to_vec(),
                }),
                Err(e) => warn!("Skipping deal note s3://{}/{key}: {e}", self.bucket),
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_name_matching() {
        assert!(is_json_name("hexafun.json"));
        assert!(is_json_name("deal-notes/NAARIO.JSON"));
        assert!(!is_json_name("readme.md"));
        assert!(!is_json_name("notes.json.bak"));
    }

    #[tokio::test]
    async fn test_directory_source_reads_json_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"company": "B"}"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"company": "A"}"#).unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "not a note").unwrap();

        let records = DirectorySource::new(dir.path()).fetch_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].origin.ends_with("a.json"));
        assert!(records[1].origin.ends_with("b.json"));
    }

    #[tokio::test]
    async fn test_directory_source_missing_dir_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = DirectorySource::new(&missing).fetch_records().await.unwrap_err();
        assert!(matches!(err, CorpusError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_directory_source_empty_dir_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let records = DirectorySource::new(dir.path()).fetch_records().await.unwrap();
        assert!(records.is_empty());
    }
}
