use crate::hotdog_app::core::{Model, RequestState};
use crate::result_display::interface::{ResultDisplay, ResultView};
use std::sync::{Arc, Mutex};

pub fn view(model: &Model) -> ResultView {
    match &model.state {
        RequestState::Idle => ResultView::Placeholder,
        RequestState::Processing { .. } => ResultView::Analyzing,
        RequestState::Succeeded { result } => ResultView::Verdict(result.clone()),
        RequestState::Failed { reason } => ResultView::Failed(reason.to_string()),
    }
}

#[derive(Clone)]
pub struct Render {
    result_display: Arc<Mutex<dyn ResultDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(result_display: Arc<Mutex<dyn ResultDisplay + Send + Sync>>) -> Self {
        Self { result_display }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut result_display = self.result_display.lock().map_err(|e| e.to_string())?;

        result_display.render(&view(model))
    }
}
