use crate::result_display::interface::{ResultDisplay, ResultView};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

#[derive(Clone)]
struct ResultWindow {
    view: Arc<Mutex<ResultView>>,
}

impl ResultWindow {
    fn accent(view: &ResultView) -> egui::Color32 {
        match view {
            ResultView::Verdict(result) if result.is_hotdog() => {
                egui::Color32::from_rgb(46, 160, 67)
            }
            ResultView::Verdict(_) | ResultView::Failed(_) => egui::Color32::from_rgb(210, 50, 45),
            _ => egui::Color32::GRAY,
        }
    }
}

impl eframe::App for ResultWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = match self.view.lock() {
            Ok(view) => view.clone(),
            Err(_) => return,
        };
        let accent = Self::accent(&view);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading(egui::RichText::new("Hot Dog?").size(32.0).strong());
                ui.add_space(16.0);

                for (index, line) in view.lines().iter().enumerate() {
                    let text = egui::RichText::new(line);
                    let text = if index == 0 {
                        text.size(26.0).strong().color(accent)
                    } else {
                        text.size(16.0)
                    };
                    ui.label(text);
                }
            });
        });

        // Results arrive from other threads.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct ResultDisplayGui {
    view: Arc<Mutex<ResultView>>,
    window: Option<JoinHandle<()>>,
}

impl ResultDisplayGui {
    pub fn new() -> Self {
        Self {
            view: Arc::new(Mutex::new(ResultView::Placeholder)),
            window: None,
        }
    }
}

impl ResultDisplay for ResultDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let view = self.view.clone();

        self.window = Some(thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([420.0, 240.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = ResultWindow { view };

            let _ = eframe::run_native("Hot Dog?", options, Box::new(|_cc| Box::new(window)));
        }));

        Ok(())
    }

    fn render(&mut self, view: &ResultView) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.view.lock().map_err(|e| e.to_string())? = view.clone();
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(window) = self.window.take() {
            window
                .join()
                .map_err(|_| "result window thread panicked".to_string())?;
        }
        Ok(())
    }
}
