use crate::classification::error::ClassifyError;
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// A loaded, reusable image model.
pub trait ImageClassifier {
    /// Ranked label/confidence pairs for one image, highest confidence first.
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifyError>;
}
