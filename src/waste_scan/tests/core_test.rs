#[cfg(test)]
mod core_test {
    use crate::classifier::category::Category;
    use crate::classifier::interface::{Classification, ClassifyError};
    use crate::config::Config;
    use crate::device_picker::interface::DevicePickerEvent;
    use crate::waste_scan::core::{init, transition, Effect, Event, Model, Phase};
    use image::DynamicImage;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn ranked_result() -> Vec<Classification> {
        let confidences = [
            (Category::Plastic, 0.40),
            (Category::Metal, 0.20),
            (Category::Glass, 0.15),
            (Category::Paper, 0.12),
            (Category::Cardboard, 0.08),
            (Category::Trash, 0.05),
        ];
        confidences
            .iter()
            .map(|&(category, confidence)| Classification {
                category,
                confidence,
            })
            .collect()
    }

    fn pick(path: &str) -> Event {
        Event::PickerEvent(DevicePickerEvent::ImagePicked(PathBuf::from(path)))
    }

    #[test]
    fn test_init() {
        let (model, effects) = init();

        assert_eq!(model.latest_request, 0);
        assert!(matches!(model.phase, Phase::WaitingForImage));
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::SubscribePickerEvents));
        assert!(matches!(effects[1], Effect::SubscribeTick));
    }

    #[test]
    fn test_pick_starts_decode() {
        let config = Config::default();
        let (model, _) = init();

        let (model, effects) = transition(&config, model, pick("bottle.png"));

        assert_eq!(model.latest_request, 1);
        assert!(matches!(model.phase, Phase::Decoding { request: 1, .. }));
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::DecodeImage { request: 1, .. }));
    }

    #[test]
    fn test_decode_success_starts_classification() {
        let config = Config::default();
        let (model, _) = init();
        let (model, _) = transition(&config, model, pick("bottle.png"));

        let image = DynamicImage::new_rgb8(4, 4);
        let (model, effects) = transition(&config, model, Event::DecodeDone(1, Ok(image)));

        assert!(matches!(model.phase, Phase::Classifying { request: 1, .. }));
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            Effect::ClassifyImage { request: 1, .. }
        ));
    }

    #[test]
    fn test_classify_done_shows_result() {
        let config = Config::default();
        let (model, _) = init();
        let (model, _) = transition(&config, model, pick("bottle.png"));
        let (model, _) = transition(
            &config,
            model,
            Event::DecodeDone(1, Ok(DynamicImage::new_rgb8(4, 4))),
        );

        let (model, effects) =
            transition(&config, model, Event::ClassifyDone(1, Ok(ranked_result())));

        assert!(effects.is_empty());
        match &model.phase {
            Phase::ShowingResult { result } => {
                assert_eq!(result[0].category, Category::Plastic);
            }
            _ => panic!("Unexpected phase"),
        }
    }

    #[test]
    fn test_stale_classify_result_is_discarded() {
        let config = Config::default();
        let (model, _) = init();
        let (model, _) = transition(&config, model, pick("bottle.png"));
        let (model, _) = transition(
            &config,
            model,
            Event::DecodeDone(1, Ok(DynamicImage::new_rgb8(4, 4))),
        );

        // A second pick supersedes the classification still in flight.
        let (model, _) = transition(&config, model, pick("can.jpg"));
        assert_eq!(model.latest_request, 2);

        let (model, effects) =
            transition(&config, model, Event::ClassifyDone(1, Ok(ranked_result())));

        assert!(effects.is_empty());
        assert!(matches!(model.phase, Phase::Decoding { request: 2, .. }));
    }

    #[test]
    fn test_stale_decode_result_is_discarded() {
        let config = Config::default();
        let (model, _) = init();
        let (model, _) = transition(&config, model, pick("bottle.png"));
        let (model, _) = transition(&config, model, pick("can.jpg"));

        let (model, effects) = transition(
            &config,
            model,
            Event::DecodeDone(1, Ok(DynamicImage::new_rgb8(4, 4))),
        );

        assert!(effects.is_empty());
        assert!(matches!(model.phase, Phase::Decoding { request: 2, .. }));
    }

    #[test]
    fn test_decode_failure_shows_error() {
        let config = Config::default();
        let (model, _) = init();
        let (model, _) = transition(&config, model, pick("bottle.png"));

        let (model, effects) =
            transition(&config, model, Event::DecodeDone(1, Err("corrupt file".into())));

        assert!(effects.is_empty());
        match &model.phase {
            Phase::ShowingError { message } => {
                assert!(message.contains("Could not load"));
            }
            _ => panic!("Unexpected phase"),
        }
    }

    #[test]
    fn test_classify_failure_distinguishes_bad_input() {
        let config = Config::default();
        let classifying = Model {
            latest_request: 1,
            phase: Phase::Classifying {
                request: 1,
                started: Instant::now(),
            },
        };

        let (model, _) = transition(
            &config,
            classifying.clone(),
            Event::ClassifyDone(
                1,
                Err(ClassifyError::InvalidImage("zero dimensions".to_string())),
            ),
        );
        match &model.phase {
            Phase::ShowingError { message } => {
                assert!(message.contains("could not be used"));
            }
            _ => panic!("Unexpected phase"),
        }

        let (model, _) = transition(
            &config,
            classifying,
            Event::ClassifyDone(1, Err(ClassifyError::Internal("rng failed".to_string()))),
        );
        match &model.phase {
            Phase::ShowingError { message } => {
                assert!(message.contains("Internal processing error"));
            }
            _ => panic!("Unexpected phase"),
        }
    }

    #[test]
    fn test_slow_classification_times_out() {
        let config = Config::default();
        let started = Instant::now();
        let model = Model {
            latest_request: 1,
            phase: Phase::Classifying {
                request: 1,
                started,
            },
        };

        let (model, effects) = transition(
            &config,
            model,
            Event::Tick(started + config.classify_timeout + Duration::from_millis(1)),
        );

        assert!(effects.is_empty());
        match &model.phase {
            Phase::ShowingError { message } => {
                assert!(message.contains("timed out"));
            }
            _ => panic!("Unexpected phase"),
        }
    }

    #[test]
    fn test_quick_tick_does_not_time_out() {
        let config = Config::default();
        let started = Instant::now();
        let model = Model {
            latest_request: 1,
            phase: Phase::Classifying {
                request: 1,
                started,
            },
        };

        let (model, effects) =
            transition(&config, model, Event::Tick(started + Duration::from_millis(1)));

        assert!(effects.is_empty());
        assert!(matches!(model.phase, Phase::Classifying { .. }));
    }

    #[test]
    fn test_pick_rejection_shows_message() {
        let config = Config::default();
        let (model, _) = init();

        let (model, effects) = transition(
            &config,
            model,
            Event::PickerEvent(DevicePickerEvent::PickRejected(
                "Image file is too large (max 10MB)".to_string(),
            )),
        );

        assert!(effects.is_empty());
        match &model.phase {
            Phase::ShowingError { message } => {
                assert!(message.contains("too large"));
            }
            _ => panic!("Unexpected phase"),
        }
    }

    #[test]
    fn test_tick_while_waiting_is_ignored() {
        let config = Config::default();
        let (model, _) = init();

        let (model, effects) = transition(&config, model, Event::Tick(Instant::now()));

        assert!(effects.is_empty());
        assert!(matches!(model.phase, Phase::WaitingForImage));
    }

    #[test]
    fn test_picker_disconnect_returns_to_waiting() {
        let config = Config::default();
        let model = Model {
            latest_request: 3,
            phase: Phase::ShowingResult {
                result: ranked_result(),
            },
        };

        let (model, effects) = transition(
            &config,
            model,
            Event::PickerEvent(DevicePickerEvent::Disconnected),
        );

        assert!(effects.is_empty());
        assert!(matches!(model.phase, Phase::WaitingForImage));
        assert_eq!(model.latest_request, 3);
    }
}
