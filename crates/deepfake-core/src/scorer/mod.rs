//! Scoring capability.
//!
//! The handler only sees the [`Scorer`] trait, so a real classifier can
//! replace [`MockScorer`] without touching request handling or routing.

use crate::analysis::model::{AnalysisRequest, AnalysisResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Version tag reported by the mock scorer.
pub const MOCK_MODEL_VERSION: &str = "v1.0.0-mock";

/// Range the mock confidence is drawn from.
pub const CONFIDENCE_RANGE: RangeInclusive<f64> = 0.60..=0.99;

/// Range the advisory processing time is drawn from.
pub const PROCESSING_TIME_MS_RANGE: RangeInclusive<u64> = 50..=200;

/// Decimal places kept on the confidence score.
pub const CONFIDENCE_PLACES: i32 = 4;

/// A classifier that labels media as deepfake or authentic.
///
/// Implementations must not fail; input constraints are enforced by the caller.
pub trait Scorer: Send + Sync {
    fn predict(&self, request: &AnalysisRequest) -> AnalysisResult;

    fn model_version(&self) -> &str;
}

/// Random stand-in for a real model.
pub struct MockScorer {
    seeded: Option<Mutex<StdRng>>,
}

impl MockScorer {
    /// Create a scorer drawing from the thread-local RNG.
    pub fn new() -> Self {
        // Stands in for loading model weights.
        info!(model_version = MOCK_MODEL_VERSION, "Mock scorer loaded");
        Self { seeded: None }
    }

    /// Create a reproducible scorer from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        info!(model_version = MOCK_MODEL_VERSION, seed, "Seeded mock scorer loaded");
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.is_some()
    }
}

impl Default for MockScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for MockScorer {
    fn predict(&self, _request: &AnalysisRequest) -> AnalysisResult {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                draw(&mut *rng)
            }
            None => draw(&mut rand::rng()),
        }
    }

    fn model_version(&self) -> &str {
        MOCK_MODEL_VERSION
    }
}

fn draw<R: Rng>(rng: &mut R) -> AnalysisResult {
    let confidence = rng.random_range(CONFIDENCE_RANGE);
    AnalysisResult {
        is_deepfake: rng.random_bool(0.5),
        confidence: round_to(confidence, CONFIDENCE_PLACES),
        model_version: MOCK_MODEL_VERSION.to_string(),
        processing_time_ms: rng.random_range(PROCESSING_TIME_MS_RANGE),
    }
}

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
