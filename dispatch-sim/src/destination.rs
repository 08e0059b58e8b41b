use rand::Rng;

// Offsets are drawn in whole hundredths of a degree: an integer in
// [0, OFFSET_STEPS) shifted down by OFFSET_BIAS, so each axis moves by
// one of {-0.15, -0.14, ..., +0.14} (roughly 15 km at the equator).
const OFFSET_STEPS: i32 = 30;
const OFFSET_BIAS: i32 = 15;

/// Picks a drop-off point near the driver's current `(lat, lon)` by
/// perturbing each axis independently.
///
/// Without a current position there is nothing to perturb and the origin
/// `(0, 0)` is returned; callers treat that as a defined fallback, not an
/// error.
pub fn fake_destination<R: Rng>(current: Option<(f64, f64)>, rng: &mut R) -> (f64, f64) {
    if let Some((lat, lon)) = current {
        let r_lat = (rng.gen_range(0..OFFSET_STEPS) - OFFSET_BIAS) as f64 / 100.0;
        let r_lon = (rng.gen_range(0..OFFSET_STEPS) - OFFSET_BIAS) as f64 / 100.0;

        (lat + r_lat, lon + r_lon)
    } else {
        (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn offsets_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let (lat, lon) = fake_destination(Some((0.0, 0.0)), &mut rng);
            assert!((-0.15..=0.14).contains(&lat), "latitude offset {} out of range", lat);
            assert!((-0.15..=0.14).contains(&lon), "longitude offset {} out of range", lon);
        }
    }

    #[test]
    fn offsets_land_on_hundredth_steps() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let (lat, lon) = fake_destination(Some((0.0, 0.0)), &mut rng);
            for offset in [lat, lon] {
                let scaled = offset * 100.0;
                assert!(
                    (scaled - scaled.round()).abs() < 1e-9,
                    "offset {} is not a whole hundredth",
                    offset
                );
            }
        }
    }

    #[test]
    fn offsets_spread_across_many_steps() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();

        for _ in 0..3_000 {
            let (lat, _) = fake_destination(Some((0.0, 0.0)), &mut rng);
            seen.insert((lat * 100.0).round() as i32);
        }

        // 30 possible steps; a uniform draw over 3000 trials hits them all.
        assert_eq!(seen.len(), 30, "expected all 30 steps, saw {}", seen.len());
    }

    #[test]
    fn missing_position_falls_back_to_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(fake_destination(None, &mut rng), (0.0, 0.0));
    }

    #[test]
    fn destination_is_anchored_to_current_position() {
        let mut rng = StdRng::seed_from_u64(9);
        let (lat, lon) = fake_destination(Some((-34.6, -58.38)), &mut rng);

        assert!((lat - -34.6).abs() <= 0.15);
        assert!((lon - -58.38).abs() <= 0.15);
    }
}
