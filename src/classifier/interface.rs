use crate::classifier::category::Category;
use image::DynamicImage;
use std::fmt;

/// One category's confidence. Confidences across a full result sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub confidence: f32,
}

/// Ranked result: all six categories, descending by confidence.
pub type ClassificationResult = Vec<Classification>;

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// The input image is unusable (zero dimensions, undecodable raster).
    InvalidImage(String),
    /// The pipeline itself failed. Not the user's fault.
    Internal(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InvalidImage(reason) => {
                write!(f, "The image could not be used: {}", reason)
            }
            ClassifyError::Internal(reason) => {
                write!(f, "Internal processing error: {}", reason)
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &DynamicImage) -> Result<ClassificationResult, ClassifyError>;
}
