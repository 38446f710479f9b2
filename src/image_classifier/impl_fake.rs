use crate::classification::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use rand::seq::SliceRandom;
use std::sync::Arc;

const FAKE_LABELS: [&str; 10] = [
    "hotdog, hot dog, red hot",
    "pizza, pizza pie",
    "bagel, beigel",
    "cheeseburger",
    "French loaf",
    "burrito",
    "pretzel",
    "guacamole",
    "ice cream, icecream",
    "plate",
];

enum Behavior {
    Random,
    Fixed(Vec<Classification>),
    Fail(ClassifyError),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Behavior,
}

#[allow(dead_code)]
impl ImageClassifierFake {
    /// Random food labels with random, descending confidences.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            behavior: Behavior::Random,
        }
    }

    /// Always returns `classifications`, in the given order.
    pub fn with_classifications(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> Self {
        Self {
            behavior: Behavior::Fixed(classifications),
            ..Self::new(logger)
        }
    }

    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, error: ClassifyError) -> Self {
        Self {
            behavior: Behavior::Fail(error),
            ..Self::new(logger)
        }
    }

    fn random_classifications(&self) -> Result<Vec<Classification>, ClassifyError> {
        let mut rng = rand::rng();

        let mut labels = FAKE_LABELS.to_vec();
        labels.shuffle(&mut rng);

        let score_dist = Uniform::new(0.0f32, 1.0f32)
            .map_err(|e| ClassifyError::InferenceFailure(e.to_string()))?;

        let mut scores: Vec<f32> = labels.iter().map(|_| score_dist.sample(&mut rng)).collect();
        scores.sort_by(|a, b| b.total_cmp(a));

        let total: f32 = scores.iter().sum::<f32>().max(f32::EPSILON);

        Ok(labels
            .into_iter()
            .zip(scores)
            .map(|(label, score)| Classification::new(label, score / total))
            .collect())
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifyError> {
        let _ = self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ));

        match &self.behavior {
            Behavior::Random => self.random_classifications(),
            Behavior::Fixed(classifications) => Ok(classifications.clone()),
            Behavior::Fail(error) => Err(error.clone()),
        }
    }
}
