//! Deepfake analysis request handling.

pub mod model;

use crate::error::{CoreError, CoreResult};
use crate::scorer::Scorer;
use model::{AnalysisRequest, AnalysisResponse};
use tracing::debug;

/// Message returned when the scorer flags the media.
pub const DEEPFAKE_MESSAGE: &str = "Deepfake detected.";

/// Message returned when the scorer clears the media.
pub const AUTHENTIC_MESSAGE: &str = "Media appears authentic.";

/// Validation message for an empty filename.
pub const FILENAME_REQUIRED: &str = "Filename is required";

/// Human-readable verdict for a classification.
pub fn verdict_message(is_deepfake: bool) -> &'static str {
    if is_deepfake {
        DEEPFAKE_MESSAGE
    } else {
        AUTHENTIC_MESSAGE
    }
}

/// Validate a request, score it once and build the response.
pub fn analyze(scorer: &dyn Scorer, request: &AnalysisRequest) -> CoreResult<AnalysisResponse> {
    if request.filename.is_empty() {
        return Err(CoreError::validation(FILENAME_REQUIRED));
    }

    let result = scorer.predict(request);

    debug!(
        filename = %request.filename,
        content_type = %request.content_type(),
        is_deepfake = result.is_deepfake,
        confidence = result.confidence,
        processing_time_ms = result.processing_time_ms,
        "Scored media"
    );

    Ok(AnalysisResponse {
        filename: request.filename.clone(),
        is_deepfake: result.is_deepfake,
        confidence: result.confidence,
        model_version: result.model_version,
        message: verdict_message(result.is_deepfake).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::{MockScorer, MOCK_MODEL_VERSION};
    use model::AnalysisResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scorer with a fixed verdict that counts its calls.
    struct FixedScorer {
        is_deepfake: bool,
        calls: AtomicUsize,
    }

    impl FixedScorer {
        fn new(is_deepfake: bool) -> Self {
            Self {
                is_deepfake,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Scorer for FixedScorer {
        fn predict(&self, _request: &AnalysisRequest) -> AnalysisResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            AnalysisResult {
                is_deepfake: self.is_deepfake,
                confidence: 0.75,
                model_version: "fixed".to_string(),
                processing_time_ms: 100,
            }
        }

        fn model_version(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_empty_filename_rejected_before_scoring() {
        let scorer = FixedScorer::new(true);
        let err = analyze(&scorer, &AnalysisRequest::new("")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), FILENAME_REQUIRED);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_scores_exactly_once_and_maps_result() {
        let scorer = FixedScorer::new(true);
        let response = analyze(&scorer, &AnalysisRequest::new("clip.mp4")).unwrap();
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(response.filename, "clip.mp4");
        assert!(response.is_deepfake);
        assert_eq!(response.confidence, 0.75);
        assert_eq!(response.model_version, "fixed");
        assert_eq!(response.message, DEEPFAKE_MESSAGE);
    }

    #[test]
    fn test_authentic_message() {
        let scorer = FixedScorer::new(false);
        let response = analyze(&scorer, &AnalysisRequest::new("photo.jpg")).unwrap();
        assert_eq!(response.message, AUTHENTIC_MESSAGE);
    }

    #[test]
    fn test_whitespace_filename_is_accepted() {
        let scorer = FixedScorer::new(false);
        let response = analyze(&scorer, &AnalysisRequest::new(" ")).unwrap();
        assert_eq!(response.filename, " ");
    }

    #[test]
    fn test_mock_scorer_responses_hold_invariants() {
        let scorer = MockScorer::new();
        for i in 0..200 {
            let filename = format!("sample_{i}.jpg");
            let response = analyze(&scorer, &AnalysisRequest::new(&filename)).unwrap();
            assert_eq!(response.filename, filename);
            assert!((0.60..=0.99).contains(&response.confidence));
            assert_eq!(response.model_version, MOCK_MODEL_VERSION);
            assert_eq!(response.message, verdict_message(response.is_deepfake));
        }
    }
}
