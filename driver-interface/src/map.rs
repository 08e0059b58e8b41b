use std::{cell::RefCell, rc::Rc, time::Duration};

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, Tiles};

use dispatch_sim::DispatchSimulator;
use logger::Logger;

use crate::controller::ScreenController;
use crate::display::MapView;
use crate::location::GpsSimulator;
use crate::plugins;
use crate::state::SelectionState;
use crate::style::{BrandPalette, RouteStyle};
use crate::types::Coordinate;
use crate::widgets::{PromptAction, WidgetDestination, WidgetRequestPrompt};

// Buenos Aires, where the simulated driver starts the day.
const INITIAL_LAT: f64 = -34.603722;
const INITIAL_LON: f64 = -58.381592;
const REPAINT_TICK_MS: u64 = 250;

/// The driver-facing screen: the map, the driving-mode toggle and the
/// pickup-request flow.
pub struct DriverApp {
    tiles: Box<dyn Tiles>,
    controller: ScreenController<MapView, GpsSimulator>,
    selection_state: Rc<RefCell<SelectionState>>,
    dispatch: DispatchSimulator,
    palette: BrandPalette,
    route_style: RouteStyle,
    request_prompt: Option<WidgetRequestPrompt>,
    destination_widget: Option<WidgetDestination>,
}

impl DriverApp {
    /// Creates the screen, wiring the map view, the simulated GPS and the
    /// simulated dispatch backend together.
    pub fn new(egui_ctx: Context, logger: Logger) -> Self {
        install_image_loaders(&egui_ctx);

        let selection_state = Rc::new(RefCell::new(SelectionState::new()));
        let map_view = MapView::new(selection_state.clone());
        let location = GpsSimulator::new(Coordinate::new(INITIAL_LAT, INITIAL_LON));
        let palette = BrandPalette::default();

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            controller: ScreenController::new(map_view, location, logger),
            selection_state,
            dispatch: DispatchSimulator::new(),
            palette,
            route_style: RouteStyle::for_palette(&palette),
            request_prompt: None,
            destination_widget: None,
        }
    }
}

impl eframe::App for DriverApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_location();

        // Keep repainting while the prompt counts down and fixes arrive.
        ctx.request_repaint_after(Duration::from_millis(REPAINT_TICK_MS));

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let my_position = self
                    .controller
                    .current_location()
                    .unwrap_or(Coordinate::new(INITIAL_LAT, INITIAL_LON))
                    .position();

                let selection_state = self.selection_state.clone();
                let route_style = self.route_style;
                let tiles = self.tiles.as_mut();
                let (memory, destinations, routes) = self.controller.map_mut().scene();

                let map = Map::new(Some(tiles), memory, my_position)
                    .with_plugin(plugins::Routes::new(routes, route_style))
                    .with_plugin(plugins::Destinations::new(destinations, selection_state));

                ui.add(map);

                let mut turned_on = false;
                egui::Area::new("driving_mode_button".into())
                    .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                    .show(ctx, |ui| {
                        let button_size = [180.0, 60.0];
                        let button = egui::Button::new(
                            egui::RichText::new(self.controller.driving().button_label())
                                .strong(),
                        )
                        .fill(self.controller.driving().button_fill(&self.palette))
                        .rounding(10.0);

                        if ui.add_sized(button_size, button).clicked() {
                            turned_on = self.controller.toggle_driving_mode();
                        }
                    });

                // Turning the mode on is what makes a request come in.
                if turned_on {
                    self.request_prompt =
                        Some(WidgetRequestPrompt::new(self.dispatch.next_request()));
                }

                let action = match &mut self.request_prompt {
                    Some(prompt) => prompt.show(ctx),
                    None => PromptAction::Pending,
                };

                match action {
                    PromptAction::Accepted => {
                        if let Some(prompt) = self.request_prompt.take() {
                            // A missing fix is already logged by the controller.
                            let _ = self
                                .controller
                                .accept_request(&prompt.request, &mut rand::thread_rng());
                        }
                    }
                    PromptAction::Dismissed => self.request_prompt = None,
                    PromptAction::Pending => {}
                }

                let selected_destination = self.selection_state.borrow().destination.clone();
                if let Some(destination) = selected_destination {
                    if let Some(widget) = &mut self.destination_widget {
                        if widget.selected == destination {
                            if !widget.show(ctx) {
                                self.selection_state.borrow_mut().clear();
                                self.destination_widget = None;
                            }
                        } else {
                            self.destination_widget = Some(WidgetDestination::new(destination));
                        }
                    } else {
                        self.destination_widget = Some(WidgetDestination::new(destination));
                    }
                } else {
                    self.destination_widget = None;
                }

                {
                    use crate::windows::*;
                    zoom(ui, self.controller.map_mut().memory_mut());
                }
            });
    }
}
