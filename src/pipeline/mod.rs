// src/pipeline/mod.rs
// Four-stage emotion analysis: emotion -> scores -> keywords -> reflection

pub mod emotion;
pub mod keywords;
pub mod reflection;
pub mod scores;
pub mod state;

pub use state::{AnalysisRecord, EmotionLabel, Keywords, Scores, Submission};

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

use crate::llm::LlmClient;

/// Runs the stages in fixed order against one completion client.
///
/// Stages absorb their own failures, so `run` always yields a complete
/// record.
pub struct AnalysisPipeline {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl AnalysisPipeline {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(provider = self.client.provider_name(), model = %self.model))]
    pub async fn run(&self, user_input: impl Into<String>) -> AnalysisRecord {
        let start = Instant::now();
        let client = self.client.as_ref();

        let state = Submission::new(user_input);
        let state = emotion::extract_emotion(client, &self.model, state).await;
        let state = scores::generate_scores(client, &self.model, state).await;
        let state = keywords::extract_keywords(client, &self.model, state).await;
        let record = reflection::generate_reflection(client, &self.model, state).await;

        info!(
            emotion = %record.emotion,
            duration_ms = start.elapsed().as_millis() as u64,
            "Analysis complete"
        );
        record
    }
}
