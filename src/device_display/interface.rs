use std::error::Error;

/// Number of text lines on the status panel.
pub const PANEL_LINES: u8 = 4;

/// Characters per panel line; longer text is truncated.
pub const PANEL_WIDTH: usize = 48;

/// Line-oriented status panel the app renders into.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Blank every line.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based). Errors on an out-of-range line.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
