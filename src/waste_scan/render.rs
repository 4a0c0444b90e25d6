use super::main::WasteScan;
use crate::waste_scan::core::{Model, Phase};

impl WasteScan {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut display = self.device_display.lock().unwrap();

        display.clear()?;

        match &model.phase {
            Phase::WaitingForImage => {
                display.write_line(0, "Waste Scan")?;
                display.write_line(1, "Type an image path and press Enter.")?;
            }
            Phase::Decoding { .. } => {
                display.write_line(0, "Loading image...")?;
            }
            Phase::Classifying { .. } => {
                display.write_line(0, "Analyzing...")?;
            }
            Phase::ShowingResult { result } => {
                if let Some(top) = result.first() {
                    display.write_line(
                        0,
                        &format!(
                            "{} ({:.0}%)",
                            top.category.display_name(),
                            top.confidence * 100.0
                        ),
                    )?;
                    if let Some(guidance) = self.config.guidance_for(top.category) {
                        display.write_line(1, guidance)?;
                    }
                    display.write_line(3, "Type another path to classify again.")?;
                }
            }
            Phase::ShowingError { message } => {
                display.write_line(0, "Error")?;
                display.write_line(1, message)?;
                display.write_line(3, "Type another path to try again.")?;
            }
        }

        Ok(())
    }
}
