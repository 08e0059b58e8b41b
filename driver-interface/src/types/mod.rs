mod coordinate;
pub use coordinate::Coordinate;

mod region;
pub use region::Region;

mod destination;
pub use destination::Destination;

mod route;
pub use route::RouteLine;
