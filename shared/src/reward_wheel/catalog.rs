use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{CATALOG_GROUP_COUNT, MAX_REGENERATIONS, SECTOR_COUNT, SECTOR_WIDTH_DEGREES};
use super::rewards::RewardKind;

/// A single prize bound to one 60° wedge of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub name: String,
    pub color_token: String,
    pub sector_start_angle: f64,
    /// Advertised odds in percent. Cosmetic only; the landing sector decides the prize.
    pub display_chance: f64,
}

impl Prize {
    pub fn kind(&self) -> RewardKind {
        RewardKind::classify(&self.name)
    }

    pub fn sector_end_angle(&self) -> f64 {
        self.sector_start_angle + SECTOR_WIDTH_DEGREES
    }
}

/// One of the predefined six-prize groups the wheel can show.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeCatalog {
    pub group: usize,
    pub prizes: [Prize; SECTOR_COUNT],
}

impl PrizeCatalog {
    fn from_table(group: usize, table: [(&str, &str, f64); SECTOR_COUNT]) -> Self {
        let mut sector = 0;
        let prizes = table.map(|(name, color_token, display_chance)| {
            let prize = Prize {
                name: name.to_string(),
                color_token: color_token.to_string(),
                sector_start_angle: sector as f64 * SECTOR_WIDTH_DEGREES,
                display_chance,
            };
            sector += 1;
            prize
        });
        Self { group, prizes }
    }

    pub fn get(&self, sector: usize) -> Option<&Prize> {
        self.prizes.get(sector)
    }

    pub fn first(&self) -> &Prize {
        &self.prizes[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }

    pub fn total_display_chance(&self) -> f64 {
        self.prizes.iter().map(|p| p.display_chance).sum()
    }
}

static CATALOG_GROUPS: Lazy<[PrizeCatalog; CATALOG_GROUP_COUNT]> = Lazy::new(|| {
    [
        PrizeCatalog::from_table(0, [
            ("+50 XP", "#FF6B00", 25.0),
            ("+10 Moedas", "#FF8C40", 25.0),
            ("+3 Giros Grátis", "#FFB366", 10.0),
            ("+100 XP", "#FF9933", 20.0),
            ("Giro Especial", "#FFA366", 5.0),
            ("+25 Moedas", "#FF7A1A", 15.0),
        ]),
        PrizeCatalog::from_table(1, [
            ("+100 XP", "#F97316", 25.0),
            ("+25 Moedas", "#FB923C", 20.0),
            ("Avatar Raro", "#EA580C", 5.0),
            ("+3 Giros Grátis", "#FDBA74", 15.0),
            ("+50 Moedas", "#F59E0B", 20.0),
            ("Giro Especial", "#FCD34D", 15.0),
        ]),
        PrizeCatalog::from_table(2, [
            ("+200 XP", "#E11D48", 25.0),
            ("+50 Moedas", "#F43F5E", 20.0),
            ("Giro Especial", "#FB7185", 15.0),
            ("Medalha Dourada", "#F59E0B", 10.0),
            ("+3 Giros Grátis", "#FDA4AF", 15.0),
            ("+100 Moedas", "#BE123C", 15.0),
        ]),
        PrizeCatalog::from_table(3, [
            ("+500 XP", "#7C3AED", 20.0),
            ("+150 Moedas", "#8B5CF6", 20.0),
            ("Avatar Lendário", "#6D28D9", 5.0),
            ("+3 Giros Grátis", "#A78BFA", 20.0),
            ("Giro Especial", "#C4B5FD", 20.0),
            ("+250 Moedas", "#5B21B6", 15.0),
        ]),
    ]
});

/// Catalog group for the given index, clamped to the last group.
pub fn catalog_group(index: usize) -> &'static PrizeCatalog {
    &CATALOG_GROUPS[index.min(CATALOG_GROUP_COUNT - 1)]
}

pub fn active_group_index(regeneration_count: u32) -> usize {
    regeneration_count.min(MAX_REGENERATIONS) as usize
}

pub fn all_groups() -> &'static [PrizeCatalog] {
    CATALOG_GROUPS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_angles_are_fixed() {
        for catalog in all_groups() {
            let angles: Vec<f64> = catalog.iter().map(|p| p.sector_start_angle).collect();
            assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
        }
    }

    #[test]
    fn test_advertised_chances_sum_to_hundred() {
        for catalog in all_groups() {
            assert!((catalog.total_display_chance() - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_active_group_is_capped() {
        assert_eq!(active_group_index(0), 0);
        assert_eq!(active_group_index(2), 2);
        assert_eq!(active_group_index(3), 3);
        assert_eq!(active_group_index(7), 3);
        assert_eq!(catalog_group(9).group, 3);
    }
}
