use chrono::Utc;
use egui::RichText;

use crate::types::Destination;

/// Callout window for the selected destination.
pub struct WidgetDestination {
    pub selected: Destination,
    accepted_at: String,
}

impl WidgetDestination {
    pub fn new(selected: Destination) -> Self {
        Self {
            selected,
            accepted_at: Utc::now().format("%H:%M:%S").to_string(),
        }
    }

    /// Returns false once the driver closes the callout.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;

        egui::Window::new(self.selected.title.clone())
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(egui::Color32::WHITE);

                ui.label(RichText::new(self.selected.subtitle.clone()).size(16.0));
                ui.label(RichText::new(format!("Accepted at {}", self.accepted_at)).size(14.0));
            });

        open
    }
}
