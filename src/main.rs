use classifier::impl_heuristic::{ClassifierHeuristic, Jitter};
use config::{Config, DisplayKind};
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_picker::impl_console::DevicePickerConsole;
use library::logger::impl_console::LoggerConsole;
use std::sync::{Arc, Mutex};
use waste_scan::main::WasteScan;

mod classifier;
mod config;
mod device_display;
mod device_picker;
mod library;
mod waste_scan;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_picker = Arc::new(DevicePickerConsole::new(logger.clone()));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = match config.display {
        DisplayKind::Console => Arc::new(Mutex::new(DeviceDisplayConsole::new())),
        DisplayKind::Gui => Arc::new(Mutex::new(DeviceDisplayGui::new())),
    };

    let image_classifier = Arc::new(ClassifierHeuristic::new(Jitter::Natural));

    let app = WasteScan::new(
        config,
        logger,
        device_picker,
        device_display,
        image_classifier,
    );

    app.run()?;

    Ok(())
}
