use std::fmt;

/// Verdict for a single classification request.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationResult {
    Hotdog { confidence: f32 },
    NotHotdog { top_label: String, confidence: f32 },
}

impl ClassificationResult {
    pub fn hotdog(confidence: f32) -> Self {
        ClassificationResult::Hotdog {
            confidence: clamp_confidence(confidence),
        }
    }

    pub fn not_hotdog(top_label: impl Into<String>, confidence: f32) -> Self {
        ClassificationResult::NotHotdog {
            top_label: top_label.into(),
            confidence: clamp_confidence(confidence),
        }
    }

    pub fn is_hotdog(&self) -> bool {
        matches!(self, ClassificationResult::Hotdog { .. })
    }

    pub fn confidence(&self) -> f32 {
        match self {
            ClassificationResult::Hotdog { confidence } => *confidence,
            ClassificationResult::NotHotdog { confidence, .. } => *confidence,
        }
    }

    pub fn top_label(&self) -> Option<&str> {
        match self {
            ClassificationResult::Hotdog { .. } => None,
            ClassificationResult::NotHotdog { top_label, .. } => Some(top_label),
        }
    }

    pub fn headline(&self) -> &'static str {
        if self.is_hotdog() {
            "HOTDOG!"
        } else {
            "NOT HOTDOG!"
        }
    }

    /// Confidence as a whole percentage, e.g. "91%".
    pub fn confidence_text(&self) -> String {
        format!("{:.0}%", self.confidence() * 100.0)
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top_label() {
            Some(label) => write!(
                f,
                "{} {} ({})",
                self.headline(),
                self.confidence_text(),
                label
            ),
            None => write!(f, "{} {}", self.headline(), self.confidence_text()),
        }
    }
}

fn clamp_confidence(confidence: f32) -> f32 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}
