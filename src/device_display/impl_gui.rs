use crate::device_display::interface::{DeviceDisplay, PANEL_LINES, PANEL_WIDTH};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
struct PanelWindow {
    lines: Arc<Mutex<Vec<String>>>,
}

impl eframe::App for PanelWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let lines = self.lines.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                let border_color = egui::Color32::from_rgb(100, 100, 100);
                let bg_color = egui::Color32::from_rgb(230, 245, 230);

                let rect = ui.available_rect_before_wrap();
                ui.painter().rect_filled(rect, 0.0, bg_color);
                ui.painter()
                    .rect_stroke(rect, 0.0, egui::Stroke::new(2.0, border_color));

                for line in &lines {
                    ui.label(
                        egui::RichText::new(line.clone())
                            .monospace()
                            .color(egui::Color32::BLACK)
                            .size(18.0),
                    );
                }
            });
        });

        // Repaint so writes from the app thread show up without input.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    lines: Arc<Mutex<Vec<String>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(vec![String::new(); PANEL_LINES as usize])),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = self.lines.clone();

        // The window blocks its own thread until closed.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([520.0, 220.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = PanelWindow { lines };

            let _ = eframe::run_native("Waste Scan", options, Box::new(|_cc| Box::new(window)));
        });

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

        let mut lines = self.lines.lock().unwrap();
        lines[line as usize] = text.chars().take(PANEL_WIDTH).collect();
        Ok(())
    }
}
