use std::time::{Duration, Instant};

use egui::{Color32, RichText};

use dispatch_sim::PickupRequest;

// How long the prompt stays on screen before dismissing itself.
const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// What the driver did with the prompt this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptAction {
    Pending,
    Accepted,
    Dismissed,
}

/// The modal confirmation window for an incoming pickup request.
pub struct WidgetRequestPrompt {
    pub request: PickupRequest,
    shown_at: Instant,
}

impl WidgetRequestPrompt {
    pub fn new(request: PickupRequest) -> Self {
        Self {
            request,
            shown_at: Instant::now(),
        }
    }

    /// Time left before the prompt dismisses itself.
    fn remaining(&self, now: Instant) -> Duration {
        AUTO_DISMISS.saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    fn expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Shows the prompt and reports what the driver did with it.
    pub fn show(&mut self, ctx: &egui::Context) -> PromptAction {
        let now = Instant::now();
        if self.expired(now) {
            return PromptAction::Dismissed;
        }

        let mut action = PromptAction::Pending;

        egui::Window::new("Pickup Request")
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(Color32::WHITE);

                ui.label(
                    RichText::new(format!("{} needs a ride", self.request.rider))
                        .strong()
                        .size(18.0),
                );
                ui.label(
                    RichText::new(format!(
                        "Requested at {}",
                        self.request.requested_at.format("%H:%M:%S")
                    ))
                    .size(14.0),
                );

                ui.add_space(10.0);
                ui.label(format!(
                    "Dismissing in {} s",
                    self.remaining(now).as_secs_f32().ceil()
                ));
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button(RichText::new("Accept").strong()).clicked() {
                        action = PromptAction::Accepted;
                    }
                    if ui.button("Dismiss").clicked() {
                        action = PromptAction::Dismissed;
                    }
                });
            });

        action
    }
}
