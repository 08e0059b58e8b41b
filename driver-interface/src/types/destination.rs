use super::Coordinate;

/// A drop-off marker on the map, with the text shown in its callout. The
/// subtitle is the coordinate's decimal representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub title: String,
    pub subtitle: String,
    pub coordinate: Coordinate,
}

impl Destination {
    pub fn new(coordinate: Coordinate, title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: coordinate.to_string(),
            coordinate,
        }
    }
}
