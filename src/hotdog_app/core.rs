use crate::classification::error::ClassifyError;
use crate::classification::result::ClassificationResult;
use crate::demo_mode::DemoMode;
use image::DynamicImage;
use std::sync::Arc;

pub type RequestId = u64;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Processing {
        request_id: RequestId,
    },
    Succeeded {
        result: ClassificationResult,
    },
    Failed {
        reason: ClassifyError,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub demo_mode: DemoMode,
    pub next_request_id: RequestId,
    pub state: RequestState,
}

impl Model {
    pub fn is_processing(&self) -> bool {
        matches!(self.state, RequestState::Processing { .. })
    }

    fn is_current(&self, request_id: RequestId) -> bool {
        matches!(
            self.state,
            RequestState::Processing { request_id: current, .. } if current == request_id
        )
    }
}

#[derive(Debug)]
pub enum Msg {
    ImagePicked {
        location: String,
    },
    ImageLoadDone {
        request_id: RequestId,
        loaded: Result<Arc<DynamicImage>, ClassifyError>,
    },
    ClassifyDone {
        request_id: RequestId,
        outcome: Result<ClassificationResult, ClassifyError>,
    },
    #[allow(dead_code)]
    ResultInjected(ClassificationResult),
    #[allow(dead_code)]
    Cleared,
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::ImageLoadDone {
                request_id,
                loaded: Ok(image),
            } => format!(
                "ImageLoadDone {{ request_id: {}, loaded: Ok({}x{}) }}",
                request_id,
                image.width(),
                image.height()
            ),
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Effect {
    LoadImage {
        request_id: RequestId,
        location: String,
    },
    Classify {
        request_id: RequestId,
        image: Arc<DynamicImage>,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Classify { request_id, image } => format!(
                "Classify {{ request_id: {}, image: {}x{} }}",
                request_id,
                image.width(),
                image.height()
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init(demo_mode: DemoMode) -> (Model, Vec<Effect>) {
    let state = match demo_mode.fixture_result() {
        Some(result) => RequestState::Succeeded { result },
        None => RequestState::Idle,
    };

    (
        Model {
            demo_mode,
            next_request_id: 0,
            state,
        },
        vec![],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::ImagePicked { .. } if !model.demo_mode.classifies() => (model, vec![]),

        // A newer pick supersedes whatever is in flight; its completion will
        // no longer match the current request id.
        Msg::ImagePicked { location } => {
            let request_id = model.next_request_id;
            (
                Model {
                    next_request_id: request_id + 1,
                    state: RequestState::Processing { request_id },
                    ..model
                },
                vec![Effect::LoadImage {
                    request_id,
                    location,
                }],
            )
        }

        Msg::ImageLoadDone { request_id, .. } | Msg::ClassifyDone { request_id, .. }
            if !model.is_current(request_id) =>
        {
            (model, vec![])
        }

        Msg::ImageLoadDone {
            request_id,
            loaded: Ok(image),
        } => (model, vec![Effect::Classify { request_id, image }]),

        Msg::ImageLoadDone {
            loaded: Err(reason),
            ..
        }
        | Msg::ClassifyDone {
            outcome: Err(reason),
            ..
        } => (
            Model {
                state: RequestState::Failed { reason },
                ..model
            },
            vec![],
        ),

        Msg::ClassifyDone {
            outcome: Ok(result),
            ..
        }
        | Msg::ResultInjected(result) => (
            Model {
                state: RequestState::Succeeded { result },
                ..model
            },
            vec![],
        ),

        Msg::Cleared => (
            Model {
                state: RequestState::Idle,
                ..model
            },
            vec![],
        ),
    }
}
