use crate::device_display::interface::{DeviceDisplay, PANEL_LINES, PANEL_WIDTH};
use std::error::Error;

pub struct DeviceDisplayConsole {
    lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new(); PANEL_LINES as usize],
        }
    }

    fn render_panel(&self) {
        println!("┌{}┐", "─".repeat(PANEL_WIDTH));
        for line in &self.lines {
            println!("│{:<width$}│", line, width = PANEL_WIDTH);
        }
        println!("└{}┘", "─".repeat(PANEL_WIDTH));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_panel();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        for line in &mut self.lines {
            line.clear();
        }
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= PANEL_LINES {
            return Err("Invalid line number".into());
        }

        self.lines[line as usize] = text.chars().take(PANEL_WIDTH).collect();
        self.render_panel();
        Ok(())
    }
}
