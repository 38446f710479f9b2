use crate::classification::error::ClassifyError;
use crate::classification::result::ClassificationResult;
use crate::demo_mode::DemoMode;
use crate::hotdog_app::core::RequestState;
use crate::hotdog_app::tests::fixture::Fixture;
use crate::image_classifier::interface::Classification;
use crate::result_display::interface::ResultView;

fn lunch() -> Vec<Classification> {
    vec![
        Classification::new("pizza, pizza pie", 0.88),
        Classification::new("hotdog, hot dog, red hot", 0.02),
        Classification::new("bagel, beigel", 0.01),
    ]
}

#[test]
fn test_run_classifies_image() {
    let f = Fixture::new(vec![
        Classification::new("hotdog, hot dog, red hot", 0.91),
        Classification::new("bagel, beigel", 0.05),
    ]);

    let model = f.app.run(vec!["lunch.jpg".to_string()]).unwrap();

    assert_eq!(
        model.state,
        RequestState::Succeeded {
            result: ClassificationResult::hotdog(0.91)
        }
    );
    assert_eq!(
        f.result_display.frames(),
        vec![
            ResultView::Placeholder,
            ResultView::Analyzing,
            ResultView::Analyzing,
            ResultView::Verdict(ClassificationResult::hotdog(0.91)),
        ]
    );
}

#[test]
fn test_run_uses_first_match_in_top_five() {
    let f = Fixture::new(lunch());

    let model = f.app.run(vec!["lunch.jpg".to_string()]).unwrap();

    assert_eq!(
        model.state,
        RequestState::Succeeded {
            result: ClassificationResult::hotdog(0.02)
        }
    );
}

#[test]
fn test_run_not_hotdog() {
    let f = Fixture::new(vec![
        Classification::new("pizza, pizza pie", 0.88),
        Classification::new("bagel", 0.05),
        Classification::new("taco", 0.03),
        Classification::new("sushi", 0.02),
        Classification::new("burrito", 0.01),
    ]);

    let model = f.app.run(vec!["lunch.jpg".to_string()]).unwrap();

    assert_eq!(
        model.state,
        RequestState::Succeeded {
            result: ClassificationResult::not_hotdog("pizza", 0.88)
        }
    );
}

#[test]
fn test_run_several_images_in_order() {
    let f = Fixture::new(lunch());

    let model = f
        .app
        .run(vec!["first.jpg".to_string(), "second.jpg".to_string()])
        .unwrap();

    assert_eq!(model.next_request_id, 2);
    let verdicts = f
        .result_display
        .frames()
        .into_iter()
        .filter(|frame| matches!(frame, ResultView::Verdict(_)))
        .count();
    assert_eq!(verdicts, 2);
}

#[test]
fn test_run_invalid_image_fails() {
    let f = Fixture::with_frame_size(lunch(), (0, 0));

    let model = f.app.run(vec!["blank.jpg".to_string()]).unwrap();

    assert!(matches!(
        model.state,
        RequestState::Failed {
            reason: ClassifyError::InvalidImage(_)
        }
    ));
    assert!(matches!(
        f.result_display.frames().last(),
        Some(ResultView::Failed(_))
    ));
}

#[test]
fn test_run_empty_model_output_fails() {
    let f = Fixture::new(vec![]);

    let model = f.app.run(vec!["lunch.jpg".to_string()]).unwrap();

    assert!(matches!(
        model.state,
        RequestState::Failed {
            reason: ClassifyError::InferenceFailure(_)
        }
    ));
}

#[test]
fn test_run_demo_bypasses_classifier() {
    let f = Fixture::with_demo(DemoMode::Hotdog);

    let model = f.app.run(vec!["lunch.jpg".to_string()]).unwrap();

    assert_eq!(
        model.state,
        RequestState::Succeeded {
            result: ClassificationResult::hotdog(0.95)
        }
    );
    // Rendered once at start and again for the ignored pick.
    assert_eq!(
        f.result_display.frames(),
        vec![
            ResultView::Verdict(ClassificationResult::hotdog(0.95)),
            ResultView::Verdict(ClassificationResult::hotdog(0.95)),
        ]
    );
    assert!(!f
        .logger
        .lines()
        .iter()
        .any(|line| line.contains("classifier:fake")));
}

#[test]
fn test_run_demo_empty_shows_placeholder() {
    let f = Fixture::with_demo(DemoMode::Empty);

    let model = f.app.run(vec![]).unwrap();

    assert_eq!(model.state, RequestState::Idle);
    assert_eq!(f.result_display.frames(), vec![ResultView::Placeholder]);
    assert_eq!(f.config.demo_mode, DemoMode::Empty);
}
