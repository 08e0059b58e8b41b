use std::{cell::RefCell, rc::Rc};

use egui::{include_image, Image, Rect, Response, Vec2};
use walkers::{Plugin, Projector};

use crate::state::SelectionState;
use crate::types::Destination;

/// Draws the destination markers and lets the driver toggle their callouts
/// by clicking them.
pub struct Destinations<'a> {
    destinations: &'a [Destination],
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> Destinations<'a> {
    pub fn new(
        destinations: &'a [Destination],
        selection_state: Rc<RefCell<SelectionState>>,
    ) -> Self {
        Self {
            destinations,
            selection_state,
        }
    }
}

impl Plugin for Destinations<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for destination in self.destinations {
            destination.draw(ui, projector, &mut self.selection_state.borrow_mut());
        }
    }
}

impl Destination {
    fn draw(
        &self,
        ui: &mut egui::Ui,
        projector: &Projector,
        selection_state: &mut SelectionState,
    ) {
        let screen_position = projector.project(self.coordinate.position());

        let symbol_size = Vec2::new(30.0, 30.0);

        // The pin tip sits on the projected point, so the image rect hangs
        // above it.
        let rect = {
            let min_pos = screen_position.to_pos2() - Vec2::new(symbol_size.x / 2.0, symbol_size.y);
            Rect::from_min_size(min_pos, symbol_size)
        };

        let clickable_area = Rect::from_center_size(screen_position.to_pos2(), symbol_size);

        let response = ui.allocate_rect(clickable_area, egui::Sense::click());

        let image = if response.hovered() {
            Image::new(include_image!("../../location-pin-selected.svg"))
        } else {
            Image::new(include_image!("../../location-pin-solid.svg"))
        }
        .fit_to_exact_size(symbol_size);

        ui.put(rect, image);

        if response.clicked() {
            selection_state.toggle_destination_selection(self);
        }
    }
}
