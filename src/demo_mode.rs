use crate::classification::result::ClassificationResult;

/// Fixture results that bypass the classifier entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoMode {
    #[default]
    None,
    Empty,
    Hotdog,
    NotHotdog,
}

impl DemoMode {
    pub fn fixture_result(&self) -> Option<ClassificationResult> {
        match self {
            DemoMode::None | DemoMode::Empty => None,
            DemoMode::Hotdog => Some(ClassificationResult::hotdog(0.95)),
            DemoMode::NotHotdog => Some(ClassificationResult::not_hotdog("pizza", 0.88)),
        }
    }

    /// Real classification only runs outside of demos.
    pub fn classifies(&self) -> bool {
        matches!(self, DemoMode::None)
    }
}
