use crate::device_display::interface::{DeviceDisplay, PANEL_LINES};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records written lines so tests can assert on what the user would see.
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            lines: Arc::new(Mutex::new(vec![String::new(); PANEL_LINES as usize])),
        }
    }

    pub fn lines(&self) -> Arc<Mutex<Vec<String>>> {
        self.lines.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("init")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut lines = self.lines.lock().unwrap();
        for line in lines.iter_mut() {
            line.clear();
        }
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= PANEL_LINES {
            return Err("Invalid line number".into());
        }

        self.logger.info(&format!("write_line({}, {})", line, text))?;
        self.lines.lock().unwrap()[line as usize] = text.to_string();
        Ok(())
    }
}
