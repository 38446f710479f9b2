use crate::classification::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::inference_adapter::handle::ClassifyHandle;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

pub type ClassifyOutcome = Result<Vec<Classification>, ClassifyError>;

/// Runs a loaded classifier off the caller's thread.
///
/// The model is loaded once, when the adapter is built. A failed load is kept
/// and handed back as `ModelUnavailable` on every call.
#[derive(Clone)]
pub struct InferenceAdapter {
    classifier: Result<Arc<dyn ImageClassifier + Send + Sync>, ClassifyError>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceAdapter {
    pub fn new(
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            classifier: Ok(classifier),
            logger: logger.with_namespace("inference_adapter"),
        }
    }

    pub fn load<C, F>(logger: Arc<dyn Logger + Send + Sync>, load: F) -> Self
    where
        C: ImageClassifier + Send + Sync + 'static,
        F: FnOnce() -> Result<C, ClassifyError>,
    {
        let logger = logger.with_namespace("inference_adapter");

        let classifier = match load() {
            Ok(classifier) => Ok(Arc::new(classifier) as Arc<dyn ImageClassifier + Send + Sync>),
            Err(error) => {
                let reason = match error {
                    ClassifyError::ModelUnavailable(reason) => reason,
                    other => other.to_string(),
                };
                let _ = logger.error(&format!("Failed to load model: {}", reason));
                Err(ClassifyError::ModelUnavailable(reason))
            }
        };

        Self { classifier, logger }
    }

    pub fn is_available(&self) -> bool {
        self.classifier.is_ok()
    }

    /// Classifies on the current thread. Never returns an empty success.
    pub fn classify_blocking(&self, image: &DynamicImage) -> ClassifyOutcome {
        let classifier = self.classifier.as_ref().map_err(|e| e.clone())?;

        if image.width() == 0 || image.height() == 0 {
            return Err(ClassifyError::InvalidImage(format!(
                "image is {}x{}",
                image.width(),
                image.height()
            )));
        }

        let classifications = classifier.classify(image)?;

        if classifications.is_empty() {
            return Err(ClassifyError::InferenceFailure(
                "model returned no classifications".to_string(),
            ));
        }

        Ok(classifications)
    }

    /// Classifies on a worker thread and calls `on_complete` exactly once,
    /// unless the returned handle is cancelled first.
    pub fn classify<F>(&self, image: Arc<DynamicImage>, on_complete: F) -> ClassifyHandle
    where
        F: FnOnce(ClassifyOutcome) + Send + 'static,
    {
        let handle = ClassifyHandle::new();
        let worker_handle = handle.clone();
        let adapter = self.clone();

        std::thread::spawn(move || {
            let _ = adapter.logger.info(&format!(
                "Classifying {}x{} image",
                image.width(),
                image.height()
            ));

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                adapter.classify_blocking(&image)
            }))
            .unwrap_or_else(|_| {
                Err(ClassifyError::InferenceFailure(
                    "classifier panicked".to_string(),
                ))
            });

            match &outcome {
                Ok(classifications) => {
                    let _ = adapter.logger.info(&format!(
                        "Classified into {} labels",
                        classifications.len()
                    ));
                }
                Err(error) => {
                    let _ = adapter.logger.error(&format!("Classification failed: {}", error));
                }
            }

            if worker_handle.is_cancelled() {
                let _ = adapter.logger.info("Classification cancelled, dropping result");
                return;
            }

            on_complete(outcome);
        });

        handle
    }

    /// Same as `classify`, completing through a one-shot channel.
    #[allow(dead_code)]
    pub fn classify_to_channel(
        &self,
        image: Arc<DynamicImage>,
    ) -> (ClassifyHandle, Receiver<ClassifyOutcome>) {
        let (sender, receiver) = channel();

        let handle = self.classify(image, move |outcome| {
            let _ = sender.send(outcome);
        });

        (handle, receiver)
    }
}
