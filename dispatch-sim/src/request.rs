use chrono::{NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// Roster the simulator draws riders from. A real dispatch backend would
// push this payload; here it is invented locally.
const RIDERS: [&str; 8] = [
    "Agustina", "Bautista", "Camila", "Federico", "Julieta", "Lautaro", "Martina", "Santiago",
];

/// A pickup request pushed to the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    pub rider: String,
    pub requested_at: NaiveDateTime,
}

/// Stand-in for the dispatch backend: produces pickup requests on demand.
pub struct DispatchSimulator {
    rng: StdRng,
}

impl DispatchSimulator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Simulator with a fixed seed, for reproducible request sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Invents the next incoming request, stamped with the current time.
    pub fn next_request(&mut self) -> PickupRequest {
        let rider = RIDERS[self.rng.gen_range(0..RIDERS.len())];

        PickupRequest {
            rider: rider.to_string(),
            requested_at: Utc::now().naive_local(),
        }
    }
}

impl Default for DispatchSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rider_comes_from_the_roster() {
        let mut sim = DispatchSimulator::new();

        for _ in 0..50 {
            let request = sim.next_request();
            assert!(
                RIDERS.contains(&request.rider.as_str()),
                "unknown rider {}",
                request.rider
            );
        }
    }

    #[test]
    fn seeded_simulators_agree() {
        let mut a = DispatchSimulator::from_seed(11);
        let mut b = DispatchSimulator::from_seed(11);

        for _ in 0..20 {
            assert_eq!(a.next_request().rider, b.next_request().rider);
        }
    }
}
