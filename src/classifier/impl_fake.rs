use crate::classifier::category::Category;
use crate::classifier::interface::{
    Classification, ClassificationResult, ClassifyError, ImageClassifier,
};
use rand::distr::{Distribution, Uniform};

/// Ignores the image and ranks a random category first. Keeps app wiring
/// testable without scoring real pixels.
pub struct ClassifierFake {}

impl ClassifierFake {
    pub fn new() -> Self {
        Self {}
    }
}

impl ImageClassifier for ClassifierFake {
    fn classify(
        &self,
        _image: &image::DynamicImage,
    ) -> Result<ClassificationResult, ClassifyError> {
        let mut rng = rand::rng();

        let index_dist = Uniform::new(0, Category::ALL.len())
            .map_err(|e| ClassifyError::Internal(e.to_string()))?;
        let winner = index_dist.sample(&mut rng);

        // Winner takes 0.7, the rest split the remainder evenly.
        let rest = 0.3 / (Category::ALL.len() - 1) as f32;
        let mut results: Vec<Classification> = Category::ALL
            .iter()
            .enumerate()
            .map(|(index, &category)| Classification {
                category,
                confidence: if index == winner { 0.7 } else { rest },
            })
            .collect();

        results.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap());

        Ok(results)
    }
}
