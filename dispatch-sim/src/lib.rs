mod destination;
mod request;

pub use destination::fake_destination;
pub use request::{DispatchSimulator, PickupRequest};
