use crate::classifier::category::Category;
use crate::classifier::interface::{
    Classification, ClassificationResult, ClassifyError, ImageClassifier,
};
use crate::classifier::sample::{sample_pixels, PixelSample};
use crate::classifier::signals::SignalCounters;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

// Per-category scale factors applied to the per-sample signal averages.
const CARDBOARD_SCALE: f32 = 4.0;
const PAPER_SCALE: f32 = 3.5;
const GLASS_SCALE: f32 = 3.0;
const METAL_SCALE: f32 = 3.0;
const PLASTIC_SCALE: f32 = 3.0;
const TRASH_SCALE: f32 = 3.0;

// Cross-signal shares: metal borrows from reflective, plastic from tints.
const METAL_REFLECTIVE_SHARE: f32 = 0.5;
const PLASTIC_BLUE_TINT_SHARE: f32 = 0.3;
const PLASTIC_GREEN_TINT_SHARE: f32 = 0.2;

/// A category that matched nothing still appears in the ranking.
const RAW_SCORE_FLOOR: f32 = 0.1;

// Presentation jitter: each confidence is scaled by a factor drawn from
// [JITTER_FACTOR_MIN, JITTER_FACTOR_MIN + JITTER_FACTOR_SPAN), then clamped.
const JITTER_FACTOR_MIN: f32 = 0.9;
const JITTER_FACTOR_SPAN: f32 = 0.2;
const CONFIDENCE_CLAMP_MIN: f32 = 0.01;
const CONFIDENCE_CLAMP_MAX: f32 = 0.99;

const TOP_RESULT_BOOST: f32 = 1.2;
const TOP_RESULT_CAP: f32 = 0.95;

/// Where the jitter factors come from. Tests swap the thread RNG for a
/// seeded one, or turn jitter off to assert on pre-jitter ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jitter {
    Natural,
    Seeded(u64),
    Disabled,
}

/// Rule-based color-statistics classifier. There is no model here: six
/// fixed categories are scored from accumulated color signal counters.
pub struct ClassifierHeuristic {
    jitter: Jitter,
}

impl ClassifierHeuristic {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    /// Score an already-sampled pixel stream.
    ///
    /// An empty stream yields a uniform ranking with no jitter; there is
    /// nothing to divide by and nothing worth perturbing.
    pub fn score_samples(
        &self,
        samples: &[PixelSample],
    ) -> Result<ClassificationResult, ClassifyError> {
        if samples.is_empty() {
            return Ok(uniform_result());
        }

        let mut counters = SignalCounters::new();
        for sample in samples {
            counters.observe(sample);
        }

        let sample_count = samples.len() as f32;
        let mut results: Vec<Classification> = Category::ALL
            .iter()
            .map(|&category| {
                let raw = raw_score(category, &counters, sample_count);
                Classification {
                    category,
                    confidence: if raw > 0.0 { raw } else { RAW_SCORE_FLOOR },
                }
            })
            .collect();

        normalize(&mut results);
        self.apply_jitter(&mut results)?;

        results.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap());

        if let Some(top) = results.first_mut() {
            top.confidence = (top.confidence * TOP_RESULT_BOOST).min(TOP_RESULT_CAP);
        }
        normalize(&mut results);

        Ok(results)
    }

    fn apply_jitter(&self, results: &mut [Classification]) -> Result<(), ClassifyError> {
        let mut rng: Box<dyn RngCore> = match self.jitter {
            Jitter::Disabled => return Ok(()),
            Jitter::Natural => Box::new(rand::rng()),
            Jitter::Seeded(seed) => Box::new(StdRng::seed_from_u64(seed)),
        };

        let factors = Uniform::new(JITTER_FACTOR_MIN, JITTER_FACTOR_MIN + JITTER_FACTOR_SPAN)
            .map_err(|e| ClassifyError::Internal(e.to_string()))?;

        for result in results {
            result.confidence =
                clamp_confidence(result.confidence * factors.sample(&mut *rng));
        }

        Ok(())
    }
}

impl ImageClassifier for ClassifierHeuristic {
    fn classify(&self, image: &image::DynamicImage) -> Result<ClassificationResult, ClassifyError> {
        let samples = sample_pixels(image)?;
        self.score_samples(&samples)
    }
}

fn raw_score(category: Category, counters: &SignalCounters, sample_count: f32) -> f32 {
    let per_sample = |weight: f32| weight / sample_count;

    match category {
        Category::Cardboard => per_sample(counters.brown) * CARDBOARD_SCALE,
        Category::Paper => per_sample(counters.white) * PAPER_SCALE,
        Category::Glass => {
            per_sample(counters.reflective + counters.green_tint + counters.blue_tint)
                * GLASS_SCALE
        }
        Category::Metal => {
            per_sample(counters.metallic_gray + counters.reflective * METAL_REFLECTIVE_SHARE)
                * METAL_SCALE
        }
        Category::Plastic => {
            per_sample(
                counters.colorful
                    + counters.blue_tint * PLASTIC_BLUE_TINT_SHARE
                    + counters.green_tint * PLASTIC_GREEN_TINT_SHARE,
            ) * PLASTIC_SCALE
        }
        Category::Trash => per_sample(counters.dark) * TRASH_SCALE,
    }
}

fn normalize(results: &mut [Classification]) {
    let total: f32 = results.iter().map(|r| r.confidence).sum();
    if total > 0.0 {
        for result in results {
            result.confidence /= total;
        }
    } else {
        let uniform = 1.0 / results.len() as f32;
        for result in results {
            result.confidence = uniform;
        }
    }
}

fn clamp_confidence(confidence: f32) -> f32 {
    confidence.clamp(CONFIDENCE_CLAMP_MIN, CONFIDENCE_CLAMP_MAX)
}

fn uniform_result() -> ClassificationResult {
    let uniform = 1.0 / Category::ALL.len() as f32;
    Category::ALL
        .iter()
        .map(|&category| Classification {
            category,
            confidence: uniform,
        })
        .collect()
}
