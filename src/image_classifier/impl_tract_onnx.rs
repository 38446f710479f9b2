use crate::classification::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::center_crop_to_tensor;
use crate::image_classifier::tract::labels::{into_probabilities, rank, read_labels};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

/// ImageNet-style classifier (e.g. MobileNetV2) running on tract.
pub struct ImageClassifierTractOnnx {
    model: TypedRunnableModel<TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let logger = logger.with_namespace("tract_onnx");

        let labels = read_labels(&config.labels_path)?;

        let model = load_model(&config).map_err(|e| {
            ClassifyError::ModelUnavailable(format!(
                "{}: {}",
                config.onnx_model_path.display(),
                e
            ))
        })?;

        let _ = logger.info(&format!(
            "Loaded {} with {} labels",
            config.onnx_model_path.display(),
            labels.len()
        ));

        Ok(Self {
            model,
            labels,
            config,
            logger,
        })
    }
}

fn load_model(config: &ModelConfig) -> TractResult<TypedRunnableModel<TypedModel>> {
    let (height, width) = config.input_shape;

    tract_onnx::onnx()
        .model_for_path(&config.onnx_model_path)?
        .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
        .into_optimized()?
        .into_runnable()
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifyError> {
        let (height, width) = self.config.input_shape;

        let input = center_crop_to_tensor(image, width, height)?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifyError::InferenceFailure(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::InferenceFailure("model has no outputs".to_string()))?;

        let scores: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::InferenceFailure(e.to_string()))?
            .iter()
            .copied()
            .collect();

        let classifications = rank(&into_probabilities(scores), &self.labels)?;

        if let Some(top) = classifications.first() {
            let _ = self.logger.info(&format!(
                "Top classification: {} ({:.3})",
                top.label, top.confidence
            ));
        }

        Ok(classifications)
    }
}
