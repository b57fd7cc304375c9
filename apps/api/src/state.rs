use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use crate::bots::deep_dive::DeepDiveBot;
use crate::bots::screener::Screener;
use crate::corpus::CorpusIndex;
use crate::llm_client::TextGenerator;
use crate::questionnaire::chain::ExtractionChain;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; shared without locking.
    pub corpus: Arc<CorpusIndex>,
    pub deep_dive: Arc<DeepDiveBot>,
    pub screener: Arc<Screener>,
    pub chain: Arc<ExtractionChain>,
    /// Pitch-deck downloads.
    pub s3: S3Client,
}

impl AppState {
    /// Wires every component to the same generator handle.
    pub fn new(corpus: CorpusIndex, generator: Arc<dyn TextGenerator>, s3: S3Client) -> Self {
        Self {
            corpus: Arc::new(corpus),
            deep_dive: Arc::new(DeepDiveBot::new(generator.clone())),
            screener: Arc::new(Screener::new(generator.clone())),
            chain: Arc::new(ExtractionChain::new(generator)),
            s3,
        }
    }
}
