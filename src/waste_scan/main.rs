use crate::classifier::interface::ImageClassifier;
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::device_picker::interface::DevicePicker;
use crate::library::logger::interface::Logger;
use crate::waste_scan::core::{init, transition, Effect, Event, Model, Phase};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct WasteScan {
    pub model: Arc<Mutex<Model>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_picker: Arc<dyn DevicePicker + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl WasteScan {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_picker: Arc<dyn DevicePicker + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let initial = init();

        Self {
            config,
            logger,
            device_picker,
            device_display,
            image_classifier,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            model: Arc::new(Mutex::new(initial.0)),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let effect_clone = effect.clone();
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect_clone));
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display.lock().unwrap().init()?;

        let initial = init();
        *self.model.lock().unwrap() = initial.0.clone();
        self.render(&initial.0)?;
        self.spawn_effects(initial.1);

        let mut current_model = initial.0;

        loop {
            let event = self.event_receiver.lock().unwrap().recv()?;

            if !matches!(event, Event::Tick(_)) {
                let _ = self
                    .logger
                    .info(&format!("event: {}", event.to_display_string()));
            }

            let (new_model, effects) = transition(&self.config, current_model.clone(), event);
            let phase_changed = new_model.phase != current_model.phase;

            if phase_changed {
                if let Phase::ShowingError { message } = &new_model.phase {
                    let _ = self.logger.error(message);
                }
            }

            current_model = new_model.clone();
            *self.model.lock().unwrap() = new_model;

            if phase_changed {
                self.render(&current_model)?;
            }

            self.spawn_effects(effects);
        }
    }
}
