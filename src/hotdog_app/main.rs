use crate::config::Config;
use crate::hotdog_app::core::{init, transition, Effect, Model, Msg};
use crate::hotdog_app::render::Render;
use crate::hotdog_app::run_effect::RunEffect;
use crate::image_source::interface::ImageSource;
use crate::inference_adapter::adapter::InferenceAdapter;
use crate::library::logger::interface::Logger;
use crate::result_display::interface::ResultDisplay;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

pub struct HotdogApp {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    render: Render,
    run_effect: RunEffect,
    msg_sender: Sender<Msg>,
    msg_receiver: Receiver<Msg>,
}

impl HotdogApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        inference_adapter: InferenceAdapter,
        result_display: Arc<Mutex<dyn ResultDisplay + Send + Sync>>,
    ) -> Self {
        let logger = logger.with_namespace("app");
        let (msg_sender, msg_receiver) = channel();

        let run_effect = RunEffect::new(
            logger.clone(),
            image_source,
            inference_adapter,
            config.detector.clone(),
            msg_sender.clone(),
        );

        Self {
            config,
            logger,
            render: Render::new(result_display),
            run_effect,
            msg_sender,
            msg_receiver,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }

    /// Classifies `locations` one at a time, rendering every state change.
    /// Returns the final model once nothing is left in flight.
    pub fn run(&self, locations: Vec<String>) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        let (mut model, effects) = init(self.config.demo_mode);

        self.render.render(&model)?;
        self.spawn_effects(effects);

        let mut pending = locations.into_iter();

        loop {
            if !model.is_processing() {
                match pending.next() {
                    Some(location) => self.msg_sender.send(Msg::ImagePicked { location })?,
                    None => return Ok(model),
                }
            }

            let msg = self.msg_receiver.recv()?;

            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nmsg:\n\t{}",
                model,
                msg.to_display_string(),
            ));

            let (new_model, effects) = transition(model, msg);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model,
                effects
                    .iter()
                    .map(Effect::to_display_string)
                    .collect::<Vec<_>>()
            ));

            model = new_model;

            self.render.render(&model)?;
            self.spawn_effects(effects);
        }
    }
}
