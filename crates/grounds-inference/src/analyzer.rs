//! Note analysis through the language model, with heuristic fallback.
//!
//! Unparseable model output and provider rate limiting are both answered with
//! [`fallback_analysis`] on the original note. Callers receive a normal
//! [`NoteAnalysis`] either way; only [`AnalysisOutcome::source`] and the logs
//! record which path produced it. Any other provider failure is returned as
//! an error. Nothing is retried.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument, warn};

use grounds_core::{fallback_analysis, GenerationBackend, NoteAnalysis, Result};

use crate::prompt::build_analysis_prompt;
use crate::response::parse_model_output;

/// Which path produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    /// The model returned a readable JSON object.
    Model,
    /// The model answered, but no JSON object could be read from it.
    FallbackUnparseable,
    /// The provider refused the call for quota reasons.
    FallbackRateLimited,
}

impl AnalysisSource {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::Model)
    }
}

/// An analysis together with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub analysis: NoteAnalysis,
    pub source: AnalysisSource,
}

/// Analyzes notes with a generation backend.
#[derive(Clone)]
pub struct NoteAnalyzer {
    backend: Arc<dyn GenerationBackend>,
}

impl NoteAnalyzer {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Model name of the underlying backend.
    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    /// Analyze a note, returning only the canonical result.
    pub async fn analyze(&self, text: &str) -> Result<NoteAnalysis> {
        self.analyze_with_source(text).await.map(|o| o.analysis)
    }

    /// Analyze a note and report which path produced the result.
    #[instrument(skip(self, text), fields(
        subsystem = "inference",
        component = "note_analyzer",
        op = "analyze_note",
        model = %self.backend.model_name(),
        text_len = text.len(),
    ))]
    pub async fn analyze_with_source(&self, text: &str) -> Result<AnalysisOutcome> {
        let start = Instant::now();
        let prompt = build_analysis_prompt(text);

        let raw = match self.backend.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) if e.is_rate_limited() => {
                warn!(
                    fallback_reason = "rate_limited",
                    error = %e,
                    "Provider rate limited, using heuristic analysis"
                );
                return Ok(AnalysisOutcome {
                    analysis: fallback_analysis(text),
                    source: AnalysisSource::FallbackRateLimited,
                });
            }
            Err(e) => return Err(e),
        };

        let outcome = match parse_model_output(&raw) {
            Some(analysis) => AnalysisOutcome {
                analysis,
                source: AnalysisSource::Model,
            },
            None => {
                warn!(
                    fallback_reason = "unparseable_output",
                    response = %raw,
                    "Failed to parse model output as JSON, using heuristic analysis"
                );
                AnalysisOutcome {
                    analysis: fallback_analysis(text),
                    source: AnalysisSource::FallbackUnparseable,
                }
            }
        };

        debug!(
            source = ?outcome.source,
            sentiment = %outcome.analysis.sentiment,
            tag_count = outcome.analysis.tags.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Note analysis complete"
        );
        Ok(outcome)
    }
}
