//! Pitch deck ingestion: fetch a PDF from object storage and extract its text.
//!
//! PDF extraction is CPU-bound and runs inside `tokio::task::spawn_blocking`.

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PitchDeckError {
    #[error("invalid object URI '{0}': expected s3://bucket/key")]
    InvalidUri(String),

    #[error("failed to download pitch deck: {0}")]
    Storage(String),

    #[error("failed to extract text from pitch deck: {0}")]
    Extraction(String),
}

/// A parsed `s3://bucket/key` location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUri {
    pub bucket: String,
    pub key: String,
}

impl ObjectUri {
    pub fn parse(uri: &str) -> Result<Self, PitchDeckError> {
        let invalid = || PitchDeckError::InvalidUri(uri.to_string());
        let rest = uri.strip_prefix("s3://").ok_or_else(invalid)?;
        let (bucket, key) = rest.split_once('/').ok_or_else(invalid)?;
        if bucket.is_empty() || key.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

pub async fn fetch_pitch_deck(s3: &S3Client, uri: &ObjectUri) -> Result<Bytes, PitchDeckError> {
    let object = s3
        .get_object()
        .bucket(&uri.bucket)
        .key(&uri.key)
        .send()
        .await
        .map_err(|e| PitchDeckError::Storage(DisplayErrorContext(e).to_string()))?;

    let body = object
        .body
        .collect()
        .await
        .map_err(|e| PitchDeckError::Storage(e.to_string()))?
        .into_bytes();

    info!(
        "Downloaded pitch deck s3://{}/{} ({} bytes)",
        uri.bucket,
        uri.key,
        body.len()
    );
    Ok(body)
}

/// Extracts the text of every page. May return an empty string for image-only decks.
pub async fn extract_pdf_text(pdf: Bytes) -> Result<String, PitchDeckError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| PitchDeckError::Extraction(format!("spawn_blocking failed: {e}")))?
        .map_err(|e| PitchDeckError::Extraction(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_uri() {
        let uri = ObjectUri::parse("s3://decks/startups/multipl/pitch.pdf").unwrap();
        assert_eq!(uri.bucket, "decks");
        assert_eq!(uri.key, "startups/multipl/pitch.pdf");
    }

    #[test]
    fn test_parse_object_uri_rejects_malformed() {
        for bad in ["gs://bucket/key", "s3://bucket", "s3:///key", "s3://bucket/", "pitch.pdf"] {
            assert!(
                matches!(ObjectUri::parse(bad), Err(PitchDeckError::InvalidUri(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_extract_rejects_non_pdf_bytes() {
        let result = extract_pdf_text(Bytes::from_static(b"definitely not a pdf")).await;
        assert!(matches!(result, Err(PitchDeckError::Extraction(_))));
    }
}
