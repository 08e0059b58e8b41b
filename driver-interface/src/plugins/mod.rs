mod destinations;
pub use destinations::Destinations;

mod routes;
pub use routes::Routes;
