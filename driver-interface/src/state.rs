use egui::Color32;

use crate::style::BrandPalette;
use crate::types::Destination;

/// Tracks whether the driver is currently taking trips.
///
/// The flag flips only on the toggle button and is reset whenever the
/// screen is recreated; it is never persisted.
pub struct DrivingState {
    active: bool,
}

impl DrivingState {
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Flips driving mode and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Label of the toggle button under the current mode.
    pub fn button_label(&self) -> &'static str {
        if self.active {
            "Done for the day"
        } else {
            "Start Driving Mode"
        }
    }

    /// Fill color of the toggle button under the current mode.
    pub fn button_fill(&self, palette: &BrandPalette) -> Color32 {
        if self.active {
            palette.alert
        } else {
            palette.primary
        }
    }
}

impl Default for DrivingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the destination whose callout is open.
pub struct SelectionState {
    pub destination: Option<Destination>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { destination: None }
    }

    /// If the provided destination is already selected, it will be
    /// deselected. Otherwise, it will be selected.
    pub fn toggle_destination_selection(&mut self, destination: &Destination) {
        if let Some(selected) = &self.destination {
            if *selected == *destination {
                self.destination = None;
            } else {
                self.destination = Some(destination.clone());
            }
        } else {
            self.destination = Some(destination.clone());
        }
    }

    pub fn select(&mut self, destination: &Destination) {
        self.destination = Some(destination.clone());
    }

    pub fn clear(&mut self) {
        self.destination = None;
    }
}
