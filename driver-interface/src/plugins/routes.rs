use egui::Response;
use walkers::{Plugin, Projector};

use crate::style::RouteStyle;
use crate::types::RouteLine;

/// Draws route overlays as straight lines between their endpoints, with the
/// stroke the caller configured.
pub struct Routes<'a> {
    routes: &'a [RouteLine],
    style: RouteStyle,
}

impl<'a> Routes<'a> {
    pub fn new(routes: &'a [RouteLine], style: RouteStyle) -> Self {
        Self { routes, style }
    }
}

impl Plugin for Routes<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for route in self.routes {
            let start = projector.project(route.start.position()).to_pos2();
            let end = projector.project(route.end.position()).to_pos2();

            ui.painter().line_segment([start, end], self.style.stroke());
        }
    }
}
