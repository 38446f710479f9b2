use clap::Parser;
use cli::{Args, DisplayKind};
use hotdog_app::core::RequestState;
use hotdog_app::main::HotdogApp;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_source::impl_file::ImageSourceFile;
use inference_adapter::adapter::InferenceAdapter;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use result_display::impl_console::ResultDisplayConsole;
use result_display::impl_gui::ResultDisplayGui;
use result_display::interface::ResultDisplay;
use std::sync::{Arc, Mutex};

mod classification;
mod cli;
mod config;
mod demo_mode;
mod hotdog_app;
mod image_classifier;
mod image_source;
mod inference_adapter;
mod library;
mod result_display;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let config = args.to_config();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let inference_adapter = if args.fake_classifier {
        InferenceAdapter::new(
            Arc::new(ImageClassifierFake::new(logger.clone())),
            logger.clone(),
        )
    } else {
        InferenceAdapter::load(logger.clone(), || {
            ImageClassifierTractOnnx::new(config.model.clone(), logger.clone())
        })
    };

    let image_source = Arc::new(ImageSourceFile::new(logger.clone()));

    let result_display: Arc<Mutex<dyn ResultDisplay + Send + Sync>> = match args.display {
        DisplayKind::Console => Arc::new(Mutex::new(ResultDisplayConsole::new())),
        DisplayKind::Gui => Arc::new(Mutex::new(ResultDisplayGui::new())),
    };

    result_display
        .lock()
        .map_err(|e| e.to_string())?
        .init()?;

    let app = HotdogApp::new(
        config,
        logger.clone(),
        image_source,
        inference_adapter,
        result_display.clone(),
    );

    let model = app.run(args.images.clone())?;

    if let RequestState::Failed { reason } = &model.state {
        let _ = logger.error(&format!("Last image could not be classified: {}", reason));
    }

    result_display
        .lock()
        .map_err(|e| e.to_string())?
        .finish()?;

    Ok(())
}
