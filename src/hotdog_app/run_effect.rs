use crate::classification::decision::HotdogDetector;
use crate::hotdog_app::core::{Effect, Msg};
use crate::image_source::interface::ImageSource;
use crate::inference_adapter::adapter::InferenceAdapter;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_source: Arc<dyn ImageSource + Send + Sync>,
    inference_adapter: InferenceAdapter,
    detector: HotdogDetector,
    msg_sender: Sender<Msg>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        inference_adapter: InferenceAdapter,
        detector: HotdogDetector,
        msg_sender: Sender<Msg>,
    ) -> Self {
        Self {
            logger,
            image_source,
            inference_adapter,
            detector,
            msg_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::LoadImage {
                request_id,
                location,
            } => {
                let loaded = self.image_source.load(&location).map(Arc::new);
                let _ = self
                    .msg_sender
                    .send(Msg::ImageLoadDone { request_id, loaded });
            }
            Effect::Classify { request_id, image } => {
                let detector = self.detector.clone();
                let msg_sender = self.msg_sender.clone();

                self.inference_adapter.classify(image, move |outcome| {
                    let outcome =
                        outcome.and_then(|classifications| detector.decide(&classifications));
                    let _ = msg_sender.send(Msg::ClassifyDone {
                        request_id,
                        outcome,
                    });
                });
            }
        }
    }
}
