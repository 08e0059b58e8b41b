use std::fmt;

use rand::Rng;

use dispatch_sim::{fake_destination, PickupRequest};
use logger::{Color, Logger};

use crate::display::MapDisplay;
use crate::location::{AccessStatus, LocationSource};
use crate::state::DrivingState;
use crate::types::{Coordinate, Destination, Region, RouteLine};

// Span, in degrees on each axis, of the region applied around the first fix.
const FIRST_FIX_SPAN: f64 = 0.1;

const DESTINATION_TITLE: &str = "Destination";

/// Errors surfaced by the screen controller.
#[derive(Debug)]
pub enum ControllerError {
    /// A request was accepted before any GPS fix arrived.
    NoLocationFix,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::NoLocationFix => {
                write!(f, "No location fix available to accept the request")
            }
        }
    }
}

impl std::error::Error for ControllerError {}

/// The screen's one component with logic: owns the driving-mode flag, the
/// map surface and the location source, and turns accepted pickup requests
/// into map content.
pub struct ScreenController<M: MapDisplay, L: LocationSource> {
    map: M,
    location: L,
    driving: DrivingState,
    awaiting_fix: bool,
    logger: Logger,
}

impl<M: MapDisplay, L: LocationSource> ScreenController<M, L> {
    /// Creates the controller and activates the location source. A denied
    /// authorization is logged and the screen runs without re-centering.
    pub fn new(map: M, mut location: L, logger: Logger) -> Self {
        let awaiting_fix = match location.request_authorization() {
            AccessStatus::Granted => {
                location.start_updates();
                true
            }
            AccessStatus::Denied => {
                let _ = logger.warn("Location access denied, map will not follow the driver", true);
                false
            }
        };

        Self {
            map,
            location,
            driving: DrivingState::new(),
            awaiting_fix,
            logger,
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn driving(&self) -> &DrivingState {
        &self.driving
    }

    pub fn current_location(&self) -> Option<Coordinate> {
        self.location.current_location()
    }

    /// Flips driving mode and returns the new value.
    pub fn toggle_driving_mode(&mut self) -> bool {
        let active = self.driving.toggle();
        let message = if active {
            "Driving mode on"
        } else {
            "Driving mode off"
        };
        let _ = self.logger.info(message, Color::Cyan, false);

        active
    }

    /// Drains pending fixes. The most recent fix of the first non-empty
    /// batch centers the map once; continuous updates are then stopped.
    pub fn poll_location(&mut self) {
        if !self.awaiting_fix {
            return;
        }

        let fixes = self.location.poll();
        let Some(fix) = fixes.last().copied() else {
            return;
        };

        let region = Region::new(fix, FIRST_FIX_SPAN, FIRST_FIX_SPAN);
        let fitted = self.map.fit_region(region);
        self.map.set_region(fitted);

        self.location.stop_updates();
        self.awaiting_fix = false;

        let _ = self
            .logger
            .info(&format!("Centered on first fix at {}", fix), Color::Green, false);
    }

    /// Runs the request-acceptance flow: clear the map, pin a fake drop-off
    /// near the driver, open its callout, draw the route and zoom so both
    /// endpoints fit.
    pub fn accept_request<R: Rng>(
        &mut self,
        request: &PickupRequest,
        rng: &mut R,
    ) -> Result<(), ControllerError> {
        let Some(current) = self.location.current_location() else {
            let _ = self.logger.error(
                &format!("No location fix, dropping request from {}", request.rider),
                true,
            );
            return Err(ControllerError::NoLocationFix);
        };

        self.map.clear_destinations();
        self.map.clear_routes();

        let (lat, lon) = fake_destination(Some((current.lat, current.lon)), rng);
        let dropoff = Coordinate::new(lat, lon);

        let destination = Destination::new(dropoff, DESTINATION_TITLE);
        self.map.add_destination(destination.clone());
        self.map.select_destination(&destination);

        self.map.add_route(RouteLine::new(current, dropoff));

        let fitted = self.map.fit_region(Region::fit_bounds(current, dropoff));
        self.map.set_region(fitted);

        let _ = self.logger.info(
            &format!("{} riding to {}", request.rider, destination.subtitle),
            Color::Green,
            true,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::env;

    #[derive(Default)]
    struct MockDisplay {
        destinations: Vec<Destination>,
        routes: Vec<RouteLine>,
        selected: Option<Destination>,
        region: Option<Region>,
    }

    impl MapDisplay for MockDisplay {
        fn set_region(&mut self, region: Region) {
            self.region = Some(region);
        }

        fn fit_region(&self, region: Region) -> Region {
            region
        }

        fn add_destination(&mut self, destination: Destination) {
            self.destinations.push(destination);
        }

        fn clear_destinations(&mut self) {
            self.destinations.clear();
            self.selected = None;
        }

        fn add_route(&mut self, route: RouteLine) {
            self.routes.push(route);
        }

        fn clear_routes(&mut self) {
            self.routes.clear();
        }

        fn select_destination(&mut self, destination: &Destination) {
            self.selected = Some(destination.clone());
        }
    }

    struct MockLocation {
        deny: bool,
        pending: Vec<Coordinate>,
        last: Option<Coordinate>,
        started: usize,
        stopped: usize,
    }

    impl MockLocation {
        fn granted() -> Self {
            Self {
                deny: false,
                pending: Vec::new(),
                last: None,
                started: 0,
                stopped: 0,
            }
        }

        fn denied() -> Self {
            Self {
                deny: true,
                ..Self::granted()
            }
        }
    }

    impl LocationSource for MockLocation {
        fn request_authorization(&mut self) -> AccessStatus {
            if self.deny {
                AccessStatus::Denied
            } else {
                AccessStatus::Granted
            }
        }

        fn start_updates(&mut self) {
            self.started += 1;
        }

        fn stop_updates(&mut self) {
            self.stopped += 1;
        }

        fn current_location(&self) -> Option<Coordinate> {
            self.last
        }

        fn poll(&mut self) -> Vec<Coordinate> {
            let fixes = std::mem::take(&mut self.pending);
            if let Some(fix) = fixes.last() {
                self.last = Some(*fix);
            }
            fixes
        }
    }

    fn test_logger(tag: &str) -> Logger {
        let dir = env::temp_dir().join("rustic_rides_controller_tests");
        Logger::new(&dir, tag).expect("Failed to create test logger")
    }

    fn request() -> PickupRequest {
        PickupRequest {
            rider: "Camila".to_string(),
            requested_at: Utc::now().naive_local(),
        }
    }

    fn controller_with_fix(
        fix: Coordinate,
    ) -> ScreenController<MockDisplay, MockLocation> {
        let mut location = MockLocation::granted();
        location.last = Some(fix);
        ScreenController::new(MockDisplay::default(), location, test_logger("with_fix"))
    }

    #[test]
    fn accept_without_a_fix_leaves_the_map_untouched() {
        let mut controller = ScreenController::new(
            MockDisplay::default(),
            MockLocation::granted(),
            test_logger("no_fix"),
        );
        let mut rng = StdRng::seed_from_u64(5);

        let result = controller.accept_request(&request(), &mut rng);

        assert!(matches!(result, Err(ControllerError::NoLocationFix)));
        assert!(controller.map().destinations.is_empty());
        assert!(controller.map().routes.is_empty());
        assert!(controller.map().region.is_none());
    }

    #[test]
    fn accept_always_leaves_one_destination_and_one_route() {
        let fix = Coordinate::new(-34.6, -58.38);
        let mut controller = controller_with_fix(fix);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..3 {
            controller.accept_request(&request(), &mut rng).unwrap();
            assert_eq!(controller.map().destinations.len(), 1);
            assert_eq!(controller.map().routes.len(), 1);
        }
    }

    #[test]
    fn accept_pins_a_dropoff_near_the_driver_and_selects_it() {
        let fix = Coordinate::new(-34.6, -58.38);
        let mut controller = controller_with_fix(fix);
        let mut rng = StdRng::seed_from_u64(8);

        controller.accept_request(&request(), &mut rng).unwrap();

        let destination = controller.map().destinations[0].clone();
        assert!((destination.coordinate.lat - fix.lat).abs() <= 0.15);
        assert!((destination.coordinate.lon - fix.lon).abs() <= 0.15);
        assert_eq!(destination.subtitle, destination.coordinate.to_string());
        assert_eq!(controller.map().selected, Some(destination.clone()));

        let route = controller.map().routes[0];
        assert_eq!(route.start, fix);
        assert_eq!(route.end, destination.coordinate);

        let expected = Region::fit_bounds(fix, destination.coordinate);
        assert_eq!(controller.map().region, Some(expected));
    }

    #[test]
    fn first_fix_centers_once_and_stops_updates() {
        let mut location = MockLocation::granted();
        location.pending = vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)];
        let mut controller =
            ScreenController::new(MockDisplay::default(), location, test_logger("first_fix"));

        controller.poll_location();

        let region = controller.map().region.expect("first fix should center");
        assert_eq!(region.center, Coordinate::new(2.0, 2.0));
        assert_eq!(region.lat_delta, FIRST_FIX_SPAN);
        assert_eq!(region.lon_delta, FIRST_FIX_SPAN);
        assert_eq!(controller.location().stopped, 1);

        // Later fixes change nothing; updates were stopped.
        let seen = controller.map().region;
        controller.poll_location();
        assert_eq!(controller.map().region, seen);
        assert_eq!(controller.location().stopped, 1);
    }

    #[test]
    fn empty_polls_do_not_consume_the_activation() {
        let mut controller = ScreenController::new(
            MockDisplay::default(),
            MockLocation::granted(),
            test_logger("empty_poll"),
        );

        controller.poll_location();
        assert_eq!(controller.location().stopped, 0);
        assert!(controller.map().region.is_none());
    }

    #[test]
    fn denied_authorization_never_starts_updates() {
        let mut controller = ScreenController::new(
            MockDisplay::default(),
            MockLocation::denied(),
            test_logger("denied"),
        );

        assert_eq!(controller.location().started, 0);

        controller.poll_location();
        assert_eq!(controller.location().stopped, 0);
        assert!(controller.map().region.is_none());
    }

    #[test]
    fn toggle_pairs_return_to_the_original_state() {
        let mut controller = ScreenController::new(
            MockDisplay::default(),
            MockLocation::granted(),
            test_logger("toggle"),
        );

        assert!(!controller.driving().is_active());
        assert!(controller.toggle_driving_mode());
        assert!(!controller.toggle_driving_mode());
        assert!(!controller.driving().is_active());
    }
}
