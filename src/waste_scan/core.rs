use crate::classifier::interface::{ClassificationResult, ClassifyError};
use crate::config::Config;
use crate::device_picker::interface::DevicePickerEvent;
use image::DynamicImage;
use std::path::PathBuf;
use std::time::Instant;

/// Issued once per pick, monotonically increasing. Results carry the token
/// of the request that produced them; anything but the latest is stale.
pub type RequestToken = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub latest_request: RequestToken,
    pub phase: Phase,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    WaitingForImage,
    Decoding {
        request: RequestToken,
        path: PathBuf,
        started: Instant,
    },
    Classifying {
        request: RequestToken,
        started: Instant,
    },
    ShowingResult {
        result: ClassificationResult,
    },
    ShowingError {
        message: String,
    },
}

#[derive(Debug)]
pub enum Event {
    PickerEvent(DevicePickerEvent),
    DecodeDone(
        RequestToken,
        Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>>,
    ),
    ClassifyDone(RequestToken, Result<ClassificationResult, ClassifyError>),
    Tick(Instant),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::DecodeDone(request, Ok(_)) => {
                format!("DecodeDone({}, Ok(image))", request)
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Effect {
    SubscribePickerEvents,
    SubscribeTick,
    DecodeImage {
        request: RequestToken,
        path: PathBuf,
    },
    ClassifyImage {
        request: RequestToken,
        image: DynamicImage,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyImage { request, .. } => format!("ClassifyImage({})", request),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model {
            latest_request: 0,
            phase: Phase::WaitingForImage,
        },
        vec![Effect::SubscribePickerEvents, Effect::SubscribeTick],
    )
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match (model.phase.clone(), event) {
        // A new pick supersedes whatever is in flight. The fresh token is
        // the only one whose results will be accepted from here on.
        (_, Event::PickerEvent(DevicePickerEvent::ImagePicked(path))) => {
            let request = model.latest_request + 1;
            (
                Model {
                    latest_request: request,
                    phase: Phase::Decoding {
                        request,
                        path: path.clone(),
                        started: Instant::now(),
                    },
                },
                vec![Effect::DecodeImage { request, path }],
            )
        }

        (_, Event::PickerEvent(DevicePickerEvent::PickRejected(message))) => (
            Model {
                phase: Phase::ShowingError { message },
                ..model
            },
            vec![],
        ),

        (_, Event::PickerEvent(DevicePickerEvent::Connected)) => (model, vec![]),

        (_, Event::PickerEvent(DevicePickerEvent::Disconnected)) => (
            Model {
                phase: Phase::WaitingForImage,
                ..model
            },
            vec![],
        ),

        (Phase::Decoding { .. }, Event::DecodeDone(done_request, result)) => {
            if done_request != model.latest_request {
                // Stale decode from a superseded pick.
                return (model, vec![]);
            }

            match result {
                Ok(image) => (
                    Model {
                        phase: Phase::Classifying {
                            request: done_request,
                            started: Instant::now(),
                        },
                        ..model
                    },
                    vec![Effect::ClassifyImage {
                        request: done_request,
                        image,
                    }],
                ),
                Err(error) => (
                    Model {
                        phase: Phase::ShowingError {
                            message: format!(
                                "Could not load that image ({}). Try a JPG or PNG.",
                                error
                            ),
                        },
                        ..model
                    },
                    vec![],
                ),
            }
        }

        (Phase::Classifying { .. }, Event::ClassifyDone(done_request, result)) => {
            if done_request != model.latest_request {
                // Stale result from a superseded pick.
                return (model, vec![]);
            }

            match result {
                Ok(result) => (
                    Model {
                        phase: Phase::ShowingResult { result },
                        ..model
                    },
                    vec![],
                ),
                Err(error) => (
                    Model {
                        phase: Phase::ShowingError {
                            message: error.to_string(),
                        },
                        ..model
                    },
                    vec![],
                ),
            }
        }

        (
            Phase::Decoding { started, .. } | Phase::Classifying { started, .. },
            Event::Tick(now),
        ) => {
            if now.duration_since(started) >= config.classify_timeout {
                (
                    Model {
                        phase: Phase::ShowingError {
                            message: "Classification timed out. Please try again.".to_string(),
                        },
                        ..model
                    },
                    vec![],
                )
            } else {
                (model, vec![])
            }
        }

        // Everything else, including results whose phase has already moved
        // on, changes nothing.
        _ => (model, vec![]),
    }
}
