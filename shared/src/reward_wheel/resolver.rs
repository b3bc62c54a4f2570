use crate::constants::{FULL_TURN_DEGREES, POINTER_OFFSET_DEGREES, SECTOR_COUNT, SECTOR_WIDTH_DEGREES};
use super::catalog::{Prize, PrizeCatalog};

/// Wraps any angle into [0, 360).
pub fn normalize_angle(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= FULL_TURN_DEGREES {
        0.0
    } else {
        normalized
    }
}

/// Angle of the wheel content sitting under the fixed pointer.
///
/// The wheel turns clockwise underneath a fixed pointer, so the travel
/// direction is reflected before adding the pointer offset. Sector 0 starts
/// at the top of the wheel and sectors follow clockwise.
pub fn pointer_angle(rotation: f64) -> f64 {
    let normalized = normalize_angle(rotation);
    (FULL_TURN_DEGREES - normalized + POINTER_OFFSET_DEGREES).rem_euclid(FULL_TURN_DEGREES)
}

pub fn sector_index(rotation: f64) -> usize {
    (pointer_angle(rotation) / SECTOR_WIDTH_DEGREES).floor() as usize
}

/// Peg nearest the pointer. Peg `k` sits on the wheel at `k * 60°`, so the
/// result is always within half a sector of the pointer.
pub fn peg_under_pointer(rotation: f64) -> usize {
    (pointer_angle(rotation) / SECTOR_WIDTH_DEGREES).round() as usize % SECTOR_COUNT
}

/// Maps a final wheel rotation to the prize under the pointer.
pub fn determine_prize(rotation: f64, catalog: &PrizeCatalog) -> &Prize {
    let index = sector_index(rotation);
    match catalog.get(index) {
        Some(prize) => prize,
        None => {
            log::warn!("Sector {} out of range for rotation {:.2}, using first prize", index, rotation);
            catalog.first()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward_wheel::catalog::{all_groups, catalog_group};

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(725.0), 5.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(-30.0), 330.0);
        assert!(normalize_angle(-1e-18) < 360.0);
    }

    #[test]
    fn test_rotation_725_lands_in_sector_one() {
        // 725 mod 360 = 5, (360 - 5 + 90) mod 360 = 85, floor(85 / 60) = 1
        assert_eq!(pointer_angle(725.0), 85.0);
        assert_eq!(sector_index(725.0), 1);

        let catalog = catalog_group(0);
        let prize = determine_prize(725.0, catalog);
        assert_eq!(prize, &catalog.prizes[1]);
        assert_eq!(prize.name, "+10 Moedas");
    }

    #[test]
    fn test_every_sector_is_reachable() {
        let catalog = catalog_group(0);
        // rotation r puts pointer angle (450 - r) mod 360 under the pointer;
        // each rotation below lands mid-sector
        let expected = [(60.0, 0), (0.0, 1), (300.0, 2), (240.0, 3), (180.0, 4), (120.0, 5)];
        for (rotation, sector) in expected {
            assert_eq!(sector_index(rotation), sector, "rotation {}", rotation);
            assert_eq!(determine_prize(rotation, catalog), &catalog.prizes[sector]);
        }
    }

    #[test]
    fn test_determine_prize_is_pure() {
        for catalog in all_groups() {
            for step in 0..72 {
                let rotation = step as f64 * 5.0 + 2.5;
                assert_eq!(determine_prize(rotation, catalog), determine_prize(rotation, catalog));
            }
        }
    }

    #[test]
    fn test_determine_prize_is_periodic() {
        let catalog = catalog_group(2);
        for step in 0..72 {
            let rotation = step as f64 * 5.0 + 2.5;
            assert_eq!(
                determine_prize(rotation, catalog),
                determine_prize(rotation + 360.0, catalog),
                "rotation {}",
                rotation
            );
            assert_eq!(
                determine_prize(rotation, catalog),
                determine_prize(rotation + 3600.0, catalog)
            );
        }
    }

    fn screen_distance_to_pointer(peg: usize, rotation: f64) -> f64 {
        // pegs are drawn at k * 60° on the wheel, which is rotated by `rotation`
        let screen = normalize_angle(peg as f64 * SECTOR_WIDTH_DEGREES + rotation);
        let diff = (screen - POINTER_OFFSET_DEGREES).abs();
        diff.min(FULL_TURN_DEGREES - diff)
    }

    #[test]
    fn test_peg_under_pointer_is_next_to_pointer() {
        // rotations just past each tick boundary, then a fine sweep
        let after_ticks = (1..=6).map(|k| k as f64 * 60.0 + 0.5);
        let sweep = (0..720).map(|step| step as f64 * 0.5);
        for rotation in after_ticks.chain(sweep) {
            let peg = peg_under_pointer(rotation);
            assert!(peg < SECTOR_COUNT);
            let distance = screen_distance_to_pointer(peg, rotation);
            assert!(distance <= 30.0 + 1e-9, "peg {} is {} deg from pointer at rotation {}", peg, distance, rotation);
        }
    }

    #[test]
    fn test_peg_under_pointer_exact_alignment() {
        // rotation 90 turns peg 0 from the top to 3 o'clock
        assert_eq!(peg_under_pointer(90.0), 0);
        assert_eq!(peg_under_pointer(30.0), 1);
        assert_eq!(peg_under_pointer(450.0), 0);
    }
}
