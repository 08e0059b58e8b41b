use std::{cell::RefCell, rc::Rc};

use walkers::MapMemory;

use crate::state::SelectionState;
use crate::types::{Coordinate, Destination, Region, RouteLine};

// Latitude limit of the Web Mercator projection; tiles do not exist past it.
const MERCATOR_MAX_LAT: f64 = 85.05112878;

const MIN_ZOOM: f64 = 2.0;
const MAX_ZOOM: f64 = 18.0;
const INITIAL_ZOOM: f64 = 12.0;

// Width of the assumed viewport, in 256-pixel tile columns. The zoom level
// derived from a span is an approximation; walkers owns the real viewport.
const VIEWPORT_TILE_COLUMNS: f64 = 3.0;

/// What the screen controller needs from a map surface: render destination
/// markers and route overlays, and move the visible region.
pub trait MapDisplay {
    /// Replaces the visible region. Callers pass the region through
    /// [`MapDisplay::fit_region`] first.
    fn set_region(&mut self, region: Region);

    /// Clamps a requested region to the nearest one the surface can
    /// actually present.
    fn fit_region(&self, region: Region) -> Region;

    fn add_destination(&mut self, destination: Destination);

    fn clear_destinations(&mut self);

    fn add_route(&mut self, route: RouteLine);

    fn clear_routes(&mut self);

    /// Opens the callout of the given destination.
    fn select_destination(&mut self, destination: &Destination);
}

/// The walkers-backed map surface: viewport state in [`MapMemory`], plus the
/// destinations and routes the plugins draw each frame.
pub struct MapView {
    memory: MapMemory,
    destinations: Vec<Destination>,
    routes: Vec<RouteLine>,
    selection: Rc<RefCell<SelectionState>>,
}

impl MapView {
    pub fn new(selection: Rc<RefCell<SelectionState>>) -> Self {
        let mut memory = MapMemory::default();
        memory.set_zoom(INITIAL_ZOOM).unwrap();

        Self {
            memory,
            destinations: Vec::new(),
            routes: Vec::new(),
            selection,
        }
    }

    /// Viewport memory plus the content slices, split so the map widget can
    /// borrow all three at once.
    pub fn scene(&mut self) -> (&mut MapMemory, &[Destination], &[RouteLine]) {
        (&mut self.memory, &self.destinations, &self.routes)
    }

    pub fn memory_mut(&mut self) -> &mut MapMemory {
        &mut self.memory
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn routes(&self) -> &[RouteLine] {
        &self.routes
    }

    pub fn zoom(&self) -> f64 {
        self.memory.zoom()
    }

    /// Center the viewport was last moved to, if it has been moved at all.
    pub fn center(&self) -> Option<Coordinate> {
        self.memory
            .detached()
            .map(|position| Coordinate::new(position.lat(), position.lon()))
    }
}

impl MapDisplay for MapView {
    fn set_region(&mut self, region: Region) {
        self.memory.center_at(region.center.position());
        // The derived zoom is clamped into walkers' accepted range.
        let _ = self
            .memory
            .set_zoom(zoom_for_span(region.lat_delta, region.lon_delta));
    }

    fn fit_region(&self, region: Region) -> Region {
        let lat = region.center.lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT);
        let lon = region.center.lon.clamp(-180.0, 180.0);

        Region::new(
            Coordinate::new(lat, lon),
            clamp_span(region.lat_delta),
            clamp_span(region.lon_delta),
        )
    }

    fn add_destination(&mut self, destination: Destination) {
        self.destinations.push(destination);
    }

    fn clear_destinations(&mut self) {
        self.destinations.clear();
        // An open callout must not outlive its marker.
        self.selection.borrow_mut().clear();
    }

    fn add_route(&mut self, route: RouteLine) {
        self.routes.push(route);
    }

    fn clear_routes(&mut self) {
        self.routes.clear();
    }

    fn select_destination(&mut self, destination: &Destination) {
        self.selection.borrow_mut().select(destination);
    }
}

/// Degrees of longitude visible across the assumed viewport at `zoom`.
fn span_at_zoom(zoom: f64) -> f64 {
    360.0 * VIEWPORT_TILE_COLUMNS / 2f64.powf(zoom)
}

/// Keeps a requested span between what the deepest and the widest supported
/// zoom levels can show.
fn clamp_span(span: f64) -> f64 {
    span.clamp(span_at_zoom(MAX_ZOOM), span_at_zoom(MIN_ZOOM))
}

/// Zoom level at which the larger of the two spans fills the assumed
/// viewport width, one tile column being 360 / 2^zoom degrees wide.
fn zoom_for_span(lat_delta: f64, lon_delta: f64) -> f64 {
    let span = lat_delta.max(lon_delta).max(f64::EPSILON);
    let zoom = (360.0 * VIEWPORT_TILE_COLUMNS / span).log2();

    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
