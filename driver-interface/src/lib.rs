use std::path::Path;

use logger::Logger;

mod controller;
mod display;
mod location;
mod map;
mod plugins;
mod state;
mod style;
mod types;
mod widgets;
mod windows;

pub use controller::{ControllerError, ScreenController};
pub use display::{MapDisplay, MapView};
pub use location::{AccessStatus, GpsSimulator, LocationSource};
pub use map::DriverApp;
pub use state::{DrivingState, SelectionState};
pub use style::{BrandPalette, RouteStyle};
pub use types::{Coordinate, Destination, Region, RouteLine};

const LOG_DIR: &str = "logs";

pub fn run() -> Result<(), eframe::Error> {
    eframe::run_native(
        "Rustic Rides - Driver",
        Default::default(),
        Box::new(|cc| {
            let logger = Logger::new(Path::new(LOG_DIR), "driver_console")?;
            Ok(Box::new(DriverApp::new(cc.egui_ctx.clone(), logger)))
        }),
    )
}
