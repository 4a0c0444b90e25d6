use crate::device_picker::interface::{DevicePicker, DevicePickerEvent};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Reads image paths from stdin, one per line.
pub struct DevicePickerConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DevicePickerConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("picker"),
        }
    }
}

impl DevicePicker for DevicePickerConsole {
    fn events(&self) -> Receiver<DevicePickerEvent> {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let _ = tx.send(DevicePickerEvent::Connected);

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let path = PathBuf::from(trimmed);
                let event = match validate_pick(&path) {
                    Ok(()) => DevicePickerEvent::ImagePicked(path),
                    Err(reason) => DevicePickerEvent::PickRejected(reason),
                };
                if tx.send(event).is_err() {
                    break;
                }
            }

            let _ = tx.send(DevicePickerEvent::Disconnected);
        });

        rx
    }

    fn load(
        &self,
        path: &Path,
    ) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Loading {}", path.display()))?;
        let image = image::open(path)?;
        Ok(image)
    }
}

fn validate_pick(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Err(format!("No such file: {}", path.display()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match extension {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err("Please pick an image file (JPG or PNG recommended)".to_string()),
    }

    match fs::metadata(path) {
        Ok(metadata) if metadata.len() > MAX_IMAGE_BYTES => {
            Err("Image file is too large (max 10MB)".to_string())
        }
        Ok(_) => Ok(()),
        Err(e) => Err(format!("Could not read {}: {}", path.display(), e)),
    }
}
