use crate::device_picker::interface::{DevicePicker, DevicePickerEvent};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Emits a scripted sequence of picks and loads a flat test image.
pub struct DevicePickerFake {
    logger: Arc<dyn Logger + Send + Sync>,
    picks: Vec<PathBuf>,
}

impl DevicePickerFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_picks(logger, vec![])
    }

    pub fn with_picks(logger: Arc<dyn Logger + Send + Sync>, picks: Vec<PathBuf>) -> Self {
        Self {
            logger: logger.with_namespace("picker").with_namespace("fake"),
            picks,
        }
    }
}

impl DevicePicker for DevicePickerFake {
    fn events(&self) -> Receiver<DevicePickerEvent> {
        let (tx, rx) = channel();
        let picks = self.picks.clone();

        std::thread::spawn(move || {
            let _ = tx.send(DevicePickerEvent::Connected);
            for pick in picks {
                if tx.send(DevicePickerEvent::ImagePicked(pick)).is_err() {
                    break;
                }
            }
        });

        rx
    }

    fn load(
        &self,
        path: &Path,
    ) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Loading {}", path.display()))?;
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(64, 64, Rgb([200, 80, 40])));
        Ok(image)
    }
}
