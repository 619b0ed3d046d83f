//! Randomized placeholder report generator.
//!
//! There is no affect analysis behind this adapter. The emotion is drawn
//! uniformly, and any stress signal sends the tier to a uniform draw
//! between Stressed and MissionRisk. Seed it for reproducible demos.

use std::sync::Mutex;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::domain::questionnaire::AnswerSet;
use crate::domain::report::{
    Emotion, Report, RiskTier, StressSignals, DEFAULT_SLEEP_QUALITY_THRESHOLD,
};
use crate::ports::ReportGenerator;

/// Placeholder `ReportGenerator` backed by a seedable RNG.
#[derive(Debug)]
pub struct RandomReportGenerator {
    rng: Mutex<ChaCha8Rng>,
    sleep_quality_threshold: i64,
}

impl RandomReportGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Generator with a fixed seed (for testing and demos).
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uses `seed` when given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
            sleep_quality_threshold: DEFAULT_SLEEP_QUALITY_THRESHOLD,
        }
    }

    pub fn with_sleep_quality_threshold(mut self, threshold: i64) -> Self {
        self.sleep_quality_threshold = threshold;
        self
    }
}

impl Default for RandomReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for RandomReportGenerator {
    fn generate(&self, answers: &AnswerSet) -> Report {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let emotions = Emotion::all();
        let emotion = emotions[rng.gen_range(0..emotions.len())];

        let signals = StressSignals::evaluate(answers, emotion, self.sleep_quality_threshold);
        let risk_tier = if signals.any() {
            RiskTier::ELEVATED[rng.gen_range(0..RiskTier::ELEVATED.len())]
        } else {
            RiskTier::Normal
        };

        tracing::debug!(
            %emotion,
            %risk_tier,
            answered = answers.len(),
            ?signals,
            "generated placeholder report"
        );
        Report::new(emotion, risk_tier)
    }
}
