use image::DynamicImage;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum DevicePickerEvent {
    Connected,
    Disconnected,
    /// The user picked a file that passed the picker's own validation.
    ImagePicked(PathBuf),
    /// The pick was refused before decoding; the reason is user-facing.
    PickRejected(String),
}

pub trait DevicePicker: Send + Sync {
    fn events(&self) -> std::sync::mpsc::Receiver<DevicePickerEvent>;
    fn load(&self, path: &Path)
        -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>>;
}
