use crate::result_display::interface::{ResultDisplay, ResultView};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Remembers every rendered view.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct ResultDisplayFake {
    frames: Arc<Mutex<Vec<ResultView>>>,
}

#[allow(dead_code)]
impl ResultDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<ResultView> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }
}

impl ResultDisplay for ResultDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &ResultView) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames
            .lock()
            .map_err(|e| e.to_string())?
            .push(view.clone());
        Ok(())
    }
}
