use crate::classification::error::ClassifyError;
use crate::image_classifier::interface::Classification;
use std::path::Path;

/// Reads one label per line. Lines in synset form ("n07697537 hotdog, hot dog,
/// red hot") lose their WordNet id.
pub fn read_labels(path: &Path) -> Result<Vec<String>, ClassifyError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ClassifyError::ModelUnavailable(format!("labels {}: {}", path.display(), e))
    })?;

    let labels = parse_labels(&contents);

    if labels.is_empty() {
        return Err(ClassifyError::ModelUnavailable(format!(
            "labels {}: no labels",
            path.display()
        )));
    }

    Ok(labels)
}

pub fn parse_labels(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_synset_id(line).to_string())
        .collect()
}

fn strip_synset_id(line: &str) -> &str {
    match line.split_once(' ') {
        Some((id, rest))
            if id.len() == 9
                && id.starts_with('n')
                && id[1..].chars().all(|c| c.is_ascii_digit()) =>
        {
            rest.trim_start()
        }
        _ => line,
    }
}

/// Leaves scores that already form a probability distribution alone and runs
/// logits through a softmax.
pub fn into_probabilities(scores: Vec<f32>) -> Vec<f32> {
    let sum: f32 = scores.iter().sum();
    let is_distribution =
        scores.iter().all(|s| (0.0..=1.0).contains(s)) && (sum - 1.0).abs() < 0.01;

    if is_distribution {
        return scores;
    }

    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f32 = exps.iter().sum();

    exps.into_iter().map(|e| e / total).collect()
}

/// Pairs scores with labels, highest first. A model with one extra leading
/// "background" output gets that output dropped. Any NaN or infinite score
/// fails the whole prediction.
pub fn rank(probabilities: &[f32], labels: &[String]) -> Result<Vec<Classification>, ClassifyError> {
    if probabilities.iter().any(|p| !p.is_finite()) {
        return Err(ClassifyError::InferenceFailure(
            "model produced non-finite scores".to_string(),
        ));
    }

    let offset = match probabilities.len() {
        n if n == labels.len() => 0,
        n if n == labels.len() + 1 => 1,
        n => {
            return Err(ClassifyError::InferenceFailure(format!(
                "model produced {} scores for {} labels",
                n,
                labels.len()
            )))
        }
    };

    let mut classifications: Vec<Classification> = probabilities[offset..]
        .iter()
        .zip(labels)
        .map(|(confidence, label)| Classification::new(label.clone(), *confidence))
        .collect();

    classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    Ok(classifications)
}
