use crate::classification::result::ClassificationResult;
use std::error::Error;

/// What the presentation layer shows for the current request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Placeholder,
    Analyzing,
    Verdict(ClassificationResult),
    Failed(String),
}

impl ResultView {
    /// Text lines, top to bottom. Every display renders these.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ResultView::Placeholder => vec!["Take or choose a photo".to_string()],
            ResultView::Analyzing => vec!["Analyzing...".to_string()],
            ResultView::Verdict(result) => {
                let mut lines = vec![format!(
                    "{} {}",
                    result.headline(),
                    result.confidence_text()
                )];
                if let Some(label) = result.top_label() {
                    lines.push(format!("Looks like: {}", label));
                }
                lines
            }
            ResultView::Failed(reason) => {
                vec!["Could not classify".to_string(), reason.clone()]
            }
        }
    }
}

pub trait ResultDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn render(&mut self, view: &ResultView) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Blocks until the display is done, e.g. its window was closed.
    fn finish(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
