use crate::classification::decision::HotdogDetector;
use crate::demo_mode::DemoMode;
use crate::image_classifier::models::model_config::ModelConfig;
use chrono::{Offset, Utc};

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub model: ModelConfig,
    pub detector: HotdogDetector,
    pub demo_mode: DemoMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: Utc.fix(),
            model: ModelConfig::default(),
            detector: HotdogDetector::default(),
            demo_mode: DemoMode::None,
        }
    }
}
