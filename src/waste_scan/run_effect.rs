use super::main::WasteScan;
use crate::waste_scan::core::{Effect, Event};
use std::time::Instant;

impl WasteScan {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribePickerEvents => {
                let events = self.device_picker.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if self.event_sender.send(Event::PickerEvent(event)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if self.event_sender.send(Event::Tick(Instant::now())).is_err() {
                    break;
                }
            },
            Effect::DecodeImage { request, path } => {
                let decoded = self.device_picker.load(&path);
                let _ = self.event_sender.send(Event::DecodeDone(request, decoded));
            }
            Effect::ClassifyImage { request, image } => {
                let result = self.image_classifier.classify(&image);
                let _ = self
                    .event_sender
                    .send(Event::ClassifyDone(request, result));
            }
        }
    }
}
