use serde::{Deserialize, Serialize};

use super::Coordinate;

// Margin applied around the fitted bounding box so both endpoints stay
// visible with some padding around them.
const FIT_MARGIN: f64 = 1.8;

/// A rectangular map viewport: a center plus the degrees of latitude and
/// longitude visible around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub lat_delta: f64,
    pub lon_delta: f64,
}

impl Region {
    pub fn new(center: Coordinate, lat_delta: f64, lon_delta: f64) -> Self {
        Self {
            center,
            lat_delta,
            lon_delta,
        }
    }

    /// Viewport containing both `start` and `end`, with the top of the
    /// screen toward increasing latitude and the left edge toward
    /// decreasing longitude.
    pub fn fit_bounds(start: Coordinate, end: Coordinate) -> Self {
        let top_left_lat = start.lat.max(end.lat);
        let top_left_lon = start.lon.min(end.lon);

        let bottom_right_lat = start.lat.min(end.lat);
        let bottom_right_lon = start.lon.max(end.lon);

        let center_lat = top_left_lat - (top_left_lat - bottom_right_lat) * 0.5;
        let center_lon = top_left_lon + (bottom_right_lon - top_left_lon) * 0.5;

        let lat_delta = (top_left_lat - bottom_right_lat).abs() * FIT_MARGIN;
        let lon_delta = (bottom_right_lon - top_left_lon).abs() * FIT_MARGIN;

        Self::new(Coordinate::new(center_lat, center_lon), lat_delta, lon_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fit_bounds_centers_between_the_points() {
        let region = Region::fit_bounds(
            Coordinate::new(37.0, -122.0),
            Coordinate::new(37.1, -122.1),
        );

        assert!(close(region.center.lat, 37.05));
        assert!(close(region.center.lon, -122.05));
        assert!(close(region.lat_delta, 0.18));
        assert!(close(region.lon_delta, 0.18));
    }

    #[test]
    fn fit_bounds_is_symmetric_under_argument_swap() {
        let a = Coordinate::new(-34.6, -58.38);
        let b = Coordinate::new(-34.72, -58.25);

        let forward = Region::fit_bounds(a, b);
        let backward = Region::fit_bounds(b, a);

        assert!(close(forward.center.lat, backward.center.lat));
        assert!(close(forward.center.lon, backward.center.lon));
        assert!(close(forward.lat_delta, backward.lat_delta));
        assert!(close(forward.lon_delta, backward.lon_delta));
    }

    #[test]
    fn fit_bounds_of_a_single_point_collapses_the_span() {
        let point = Coordinate::new(-34.6, -58.38);
        let region = Region::fit_bounds(point, point);

        assert!(close(region.center.lat, point.lat));
        assert!(close(region.center.lon, point.lon));
        assert!(close(region.lat_delta, 0.0));
        assert!(close(region.lon_delta, 0.0));
    }

    #[test]
    fn fit_bounds_spans_are_never_negative() {
        let region = Region::fit_bounds(
            Coordinate::new(10.0, 20.0),
            Coordinate::new(-5.0, -40.0),
        );

        assert!(region.lat_delta >= 0.0);
        assert!(region.lon_delta >= 0.0);
        assert!(close(region.lat_delta, 15.0 * 1.8));
        assert!(close(region.lon_delta, 60.0 * 1.8));
    }
}
