use crate::config::Config;
use crate::demo_mode::DemoMode;
use chrono::{FixedOffset, Offset, Utc};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DisplayKind {
    #[default]
    Console,
    Gui,
}

/// Tells you whether your photos are hot dogs.
#[derive(Debug, Parser)]
#[command(name = "hotdog", version)]
pub struct Args {
    /// Images to classify, one after another.
    pub images: Vec<String>,

    /// Show a fixed result instead of classifying.
    #[arg(long, value_enum, default_value_t = DemoMode::None)]
    pub demo: DemoMode,

    /// ONNX image classifier.
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Label file matching the model's outputs.
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Square input size the model expects.
    #[arg(long, default_value_t = 224)]
    pub input_size: u32,

    #[arg(long, value_enum, default_value_t = DisplayKind::Console)]
    pub display: DisplayKind,

    /// Use random labels instead of a real model.
    #[arg(long)]
    pub fake_classifier: bool,

    /// Log timestamps in this UTC offset, in hours.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i32).range(-23..=23))]
    pub utc_offset: i32,
}

impl Args {
    pub fn to_config(&self) -> Config {
        let mut config = Config {
            demo_mode: self.demo,
            logger_timezone: FixedOffset::east_opt(self.utc_offset * 3600)
                .unwrap_or_else(|| Utc.fix()),
            ..Config::default()
        };

        if let Some(model) = &self.model {
            config.model.onnx_model_path = model.clone();
        }
        if let Some(labels) = &self.labels {
            config.model.labels_path = labels.clone();
        }
        config.model.input_shape = (self.input_size, self.input_size);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hotdog", "lunch.jpg"]).unwrap();
        let config = args.to_config();

        assert_eq!(args.images, vec!["lunch.jpg".to_string()]);
        assert_eq!(args.display, DisplayKind::Console);
        assert!(!args.fake_classifier);
        assert_eq!(config.demo_mode, DemoMode::None);
        assert_eq!(config.model.input_shape, (224, 224));
        assert_eq!(config.logger_timezone, Utc.fix());
    }

    #[test]
    fn test_demo_and_model_overrides() {
        let args = Args::try_parse_from([
            "hotdog",
            "--demo",
            "not-hotdog",
            "--model",
            "/models/squeezenet.onnx",
            "--labels",
            "/models/synset.txt",
            "--input-size",
            "227",
            "--utc-offset=-7",
        ])
        .unwrap();
        let config = args.to_config();

        assert_eq!(config.demo_mode, DemoMode::NotHotdog);
        assert_eq!(
            config.model.onnx_model_path,
            PathBuf::from("/models/squeezenet.onnx")
        );
        assert_eq!(config.model.labels_path, PathBuf::from("/models/synset.txt"));
        assert_eq!(config.model.input_shape, (227, 227));
        assert_eq!(
            config.logger_timezone,
            FixedOffset::west_opt(7 * 3600).unwrap()
        );
    }

    #[test]
    fn test_rejects_unknown_demo() {
        assert!(Args::try_parse_from(["hotdog", "--demo", "taco"]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        assert!(Args::try_parse_from(["hotdog", "--utc-offset", "30"]).is_err());
    }
}
