use crate::classification::error::ClassifyError;
use crate::classification::result::ClassificationResult;
use crate::image_classifier::interface::Classification;

pub const HOTDOG_SYNONYMS: [&str; 3] = ["hotdog", "hot dog", "red hot"];

pub const TOP_K: usize = 5;

/// Turns a ranked classification list into a hot dog verdict.
///
/// Only the first `top_k` entries are inspected. The first of those (in rank
/// order, not by confidence) whose label contains a synonym wins.
#[derive(Debug, Clone, PartialEq)]
pub struct HotdogDetector {
    synonyms: Vec<String>,
    top_k: usize,
}

impl Default for HotdogDetector {
    fn default() -> Self {
        Self::new(HOTDOG_SYNONYMS, TOP_K)
    }
}

impl HotdogDetector {
    pub fn new<I, S>(synonyms: I, top_k: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            synonyms: synonyms
                .into_iter()
                .map(|synonym| synonym.as_ref().to_lowercase())
                .collect(),
            top_k: top_k.max(1),
        }
    }

    #[allow(dead_code)]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn matches(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.synonyms
            .iter()
            .any(|synonym| label.contains(synonym.as_str()))
    }

    pub fn decide(
        &self,
        classifications: &[Classification],
    ) -> Result<ClassificationResult, ClassifyError> {
        let top = &classifications[..classifications.len().min(self.top_k)];

        let first = top.first().ok_or(ClassifyError::NoClassifications)?;

        match top.iter().find(|c| self.matches(&c.label)) {
            Some(hotdog) => Ok(ClassificationResult::hotdog(hotdog.confidence)),
            None => Ok(ClassificationResult::not_hotdog(
                primary_label(&first.label),
                first.confidence,
            )),
        }
    }
}

/// The first entry of a comma separated synonym label.
pub fn primary_label(label: &str) -> &str {
    label.split(", ").next().unwrap_or(label)
}

#[allow(dead_code)]
pub fn decide(classifications: &[Classification]) -> Result<ClassificationResult, ClassifyError> {
    HotdogDetector::default().decide(classifications)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(entries: &[(&str, f32)]) -> Vec<Classification> {
        entries
            .iter()
            .map(|(label, confidence)| Classification::new(*label, *confidence))
            .collect()
    }

    #[test]
    fn test_hotdog_on_top() {
        let classifications = ranked(&[
            ("hotdog, hot dog, red hot", 0.91),
            ("bagel, beigel", 0.05),
            ("French loaf", 0.02),
            ("cheeseburger", 0.01),
            ("pretzel", 0.01),
        ]);

        assert_eq!(
            decide(&classifications),
            Ok(ClassificationResult::hotdog(0.91))
        );
    }

    #[test]
    fn test_first_match_in_rank_order_wins() {
        let classifications = ranked(&[
            ("pizza, pizza pie", 0.88),
            ("hotdog, hot dog, red hot", 0.02),
            ("bagel, beigel", 0.01),
        ]);

        assert_eq!(
            decide(&classifications),
            Ok(ClassificationResult::hotdog(0.02))
        );
    }

    #[test]
    fn test_first_match_beats_later_higher_confidence_match() {
        // Unsorted input: rank order is what counts.
        let classifications = ranked(&[
            ("pizza, pizza pie", 0.50),
            ("red hot chili", 0.10),
            ("hotdog, hot dog, red hot", 0.30),
        ]);

        assert_eq!(
            decide(&classifications),
            Ok(ClassificationResult::hotdog(0.10))
        );
    }

    #[test]
    fn test_not_hotdog() {
        let classifications = ranked(&[
            ("pizza, pizza pie", 0.88),
            ("bagel", 0.05),
            ("taco", 0.03),
            ("sushi", 0.02),
            ("burrito", 0.01),
        ]);

        assert_eq!(
            decide(&classifications),
            Ok(ClassificationResult::not_hotdog("pizza", 0.88))
        );
    }

    #[test]
    fn test_match_outside_top_five_is_ignored() {
        let classifications = ranked(&[
            ("pizza, pizza pie", 0.60),
            ("bagel", 0.10),
            ("taco", 0.08),
            ("sushi", 0.07),
            ("burrito", 0.06),
            ("hotdog, hot dog, red hot", 0.05),
        ]);

        assert_eq!(
            decide(&classifications),
            Ok(ClassificationResult::not_hotdog("pizza", 0.60))
        );
    }

    #[test]
    fn test_match_at_rank_five_counts() {
        let classifications = ranked(&[
            ("pizza", 0.5),
            ("bagel", 0.2),
            ("taco", 0.1),
            ("sushi", 0.1),
            ("Hot Dog Bun", 0.05),
        ]);

        assert_eq!(
            decide(&classifications),
            Ok(ClassificationResult::hotdog(0.05))
        );
    }

    #[test]
    fn test_shorter_than_top_five() {
        let classifications = ranked(&[("cheeseburger", 0.7)]);

        assert_eq!(
            decide(&classifications),
            Ok(ClassificationResult::not_hotdog("cheeseburger", 0.7))
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(decide(&[]), Err(ClassifyError::NoClassifications));
    }

    #[test]
    fn test_deterministic() {
        let classifications = ranked(&[("pizza, pizza pie", 0.88), ("bagel", 0.05)]);

        assert_eq!(decide(&classifications), decide(&classifications));
    }

    #[test]
    fn test_substring_matching() {
        let detector = HotdogDetector::default();

        assert!(detector.matches("Hot Dog Bun"));
        assert!(detector.matches("hotdogs galore"));
        assert!(detector.matches("RED HOT"));
        assert!(detector.matches("hotdog, hot dog, red hot"));
        assert!(!detector.matches("cold dog"));
        assert!(!detector.matches("hot pot"));
    }

    #[test]
    fn test_primary_label() {
        assert_eq!(primary_label("pizza, pizza pie"), "pizza");
        assert_eq!(primary_label("cheeseburger"), "cheeseburger");
        assert_eq!(primary_label("a,b"), "a,b");
        assert_eq!(primary_label(""), "");
    }

    #[test]
    fn test_custom_detector() {
        let detector = HotdogDetector::new(["Bratwurst"], 2);
        let classifications = ranked(&[
            ("pizza", 0.5),
            ("bagel", 0.3),
            ("bratwurst sandwich", 0.1),
        ]);

        assert_eq!(
            detector.decide(&classifications),
            Ok(ClassificationResult::not_hotdog("pizza", 0.5))
        );
        assert!(detector.matches("BRATWURST"));
    }

    #[test]
    fn test_top_k_is_at_least_one() {
        let detector = HotdogDetector::new(HOTDOG_SYNONYMS, 0);

        assert_eq!(detector.top_k(), 1);
        assert_eq!(
            detector.decide(&ranked(&[("hotdog", 0.4)])),
            Ok(ClassificationResult::hotdog(0.4))
        );
    }
}
