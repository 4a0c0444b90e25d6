use crate::classifier::category::Category;
use crate::classifier::impl_heuristic::{ClassifierHeuristic, Jitter};
use crate::classifier::interface::ClassifyError;
use crate::classifier::test::fixture::{mixed_image, solid_image, Fixture};
use image::DynamicImage;
use std::collections::HashSet;

const SUM_TOLERANCE: f32 = 1e-6;

#[test]
fn confidences_sum_to_one() {
    let f = Fixture::new(Jitter::Natural);
    let image = mixed_image(64, 64);

    let result = f.classifier.classify(&image).unwrap();

    assert_eq!(result.len(), 6);
    let total: f32 = result.iter().map(|c| c.confidence).sum();
    assert!((total - 1.0).abs() < SUM_TOLERANCE, "sum was {}", total);
}

#[test]
fn result_covers_each_category_once() {
    let f = Fixture::new(Jitter::Natural);
    let image = solid_image(32, 32, [120, 180, 90]);

    let result = f.classifier.classify(&image).unwrap();

    let categories: HashSet<Category> = result.iter().map(|c| c.category).collect();
    assert_eq!(categories.len(), Category::ALL.len());
}

#[test]
fn result_is_sorted_descending() {
    let f = Fixture::new(Jitter::Natural);
    let image = mixed_image(48, 48);

    let result = f.classifier.classify(&image).unwrap();

    for pair in result.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn all_black_image_ranks_trash_first() {
    let f = Fixture::new(Jitter::Disabled);
    let image = solid_image(32, 32, [0, 0, 0]);

    let result = f.classifier.classify(&image).unwrap();

    assert_eq!(result[0].category, Category::Trash);
}

#[test]
fn all_white_image_ranks_paper_first() {
    let f = Fixture::new(Jitter::Disabled);
    let image = solid_image(32, 32, [255, 255, 255]);

    let result = f.classifier.classify(&image).unwrap();

    assert_eq!(result[0].category, Category::Paper);
}

#[test]
fn brown_image_ranks_cardboard_first() {
    let f = Fixture::new(Jitter::Disabled);
    let image = solid_image(32, 32, [150, 100, 50]);

    let result = f.classifier.classify(&image).unwrap();

    assert_eq!(result[0].category, Category::Cardboard);
}

#[test]
fn gray_image_ranks_metal_first() {
    let f = Fixture::new(Jitter::Disabled);
    let image = solid_image(32, 32, [150, 150, 150]);

    let result = f.classifier.classify(&image).unwrap();

    assert_eq!(result[0].category, Category::Metal);
}

#[test]
fn empty_sample_stream_is_uniform() {
    let classifier = ClassifierHeuristic::new(Jitter::Natural);

    let result = classifier.score_samples(&[]).unwrap();

    assert_eq!(result.len(), 6);
    for (classification, &category) in result.iter().zip(Category::ALL.iter()) {
        assert_eq!(classification.category, category);
        assert!((classification.confidence - 1.0 / 6.0).abs() < SUM_TOLERANCE);
    }
}

#[test]
fn seeded_jitter_is_deterministic() {
    let f = Fixture::new(Jitter::Seeded(42));
    let image = mixed_image(40, 40);

    let first = f.classifier.classify(&image).unwrap();
    let second = f.classifier.classify(&image).unwrap();

    assert_eq!(first, second);
}

#[test]
fn zero_dimension_image_is_rejected() {
    let f = Fixture::new(Jitter::Natural);
    let image = DynamicImage::new_rgb8(0, 0);

    let result = f.classifier.classify(&image);

    assert!(matches!(result, Err(ClassifyError::InvalidImage(_))));
}
