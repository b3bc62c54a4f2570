use std::fmt::Write as _;

use rand::Rng;
use serde::Serialize;
use shared::constants::{FULL_TURN_DEGREES, SECTOR_COUNT};
use shared::reward_wheel::{sector_index, PrizeCatalog, SpinMotion, SpinPhysics};

/// Landing counts per sector for one prize group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorTally {
    counts: [u64; SECTOR_COUNT],
    total: u64,
}

impl SectorTally {
    pub fn record(&mut self, rotation: f64) {
        self.counts[sector_index(rotation)] += 1;
        self.total += 1;
    }

    pub fn count(&self, sector: usize) -> u64 {
        self.counts.get(sector).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn share(&self, sector: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(sector) as f64 * 100.0 / self.total as f64
    }
}

/// Tallies `steps` rotations evenly spaced over one full turn.
pub fn sweep_tally(steps: u32) -> SectorTally {
    let mut tally = SectorTally::default();
    let width = FULL_TURN_DEGREES / steps as f64;
    for step in 0..steps {
        // sample mid-step so no sample sits exactly on a boundary
        tally.record((step as f64 + 0.5) * width);
    }
    tally
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinStats {
    pub tally: SectorTally,
    pub frames: u64,
    pub ticks: u64,
}

/// Spins the wheel `spins` times back to back, each spin starting where the
/// previous one stopped, as a player would experience it.
pub fn simulate<R: Rng + ?Sized>(spins: u32, physics: &SpinPhysics, rng: &mut R) -> SpinStats {
    let mut stats = SpinStats::default();
    let mut rotation = 0.0;
    for _ in 0..spins {
        let mut motion = SpinMotion::launch(rotation, physics, rng);
        stats.ticks += motion.run_to_completion() as u64;
        stats.frames += motion.frames() as u64;
        rotation = motion.rotation();
        stats.tally.record(rotation);
    }
    stats
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectorRow {
    pub sector: usize,
    pub prize: String,
    pub advertised: f64,
    pub measured: f64,
    pub hits: u64,
}

impl SectorRow {
    pub fn deviation(&self) -> f64 {
        self.measured - self.advertised
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupReport {
    pub group: usize,
    pub spins: u64,
    pub mean_frames: f64,
    pub mean_ticks: f64,
    pub rows: Vec<SectorRow>,
}

impl GroupReport {
    pub fn new(catalog: &PrizeCatalog, stats: &SpinStats) -> Self {
        let spins = stats.tally.total();
        let mean = |value: u64| if spins == 0 { 0.0 } else { value as f64 / spins as f64 };
        let rows = catalog
            .iter()
            .enumerate()
            .map(|(sector, prize)| SectorRow {
                sector,
                prize: prize.name.clone(),
                advertised: prize.display_chance,
                measured: stats.tally.share(sector),
                hits: stats.tally.count(sector),
            })
            .collect();
        Self {
            group: catalog.group,
            spins,
            mean_frames: mean(stats.frames),
            mean_ticks: mean(stats.ticks),
            rows,
        }
    }

    /// Sector whose measured share strays furthest from its advertised chance.
    pub fn worst_row(&self) -> Option<&SectorRow> {
        self.rows
            .iter()
            .max_by(|a, b| a.deviation().abs().total_cmp(&b.deviation().abs()))
    }
}

pub fn render_text(reports: &[GroupReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(
            out,
            "Group {} | {} spins | {:.1} frames/spin | {:.1} ticks/spin",
            report.group, report.spins, report.mean_frames, report.mean_ticks
        );
        let _ = writeln!(out, "  {:<6} {:<20} {:>10} {:>10} {:>8}", "sector", "prize", "advertised", "measured", "delta");
        for row in &report.rows {
            let _ = writeln!(
                out,
                "  {:<6} {:<20} {:>9.1}% {:>9.1}% {:>+7.1}",
                row.sector,
                row.prize,
                row.advertised,
                row.measured,
                row.deviation()
            );
        }
        out.push('\n');
    }
    out
}

pub fn render_json(reports: &[GroupReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::reward_wheel::catalog_group;

    #[test]
    fn test_uniform_sweep_gives_equal_counts() {
        let tally = sweep_tally(600);
        assert_eq!(tally.total(), 600);
        for sector in 0..SECTOR_COUNT {
            assert_eq!(tally.count(sector), 100);
        }
    }

    #[test]
    fn test_share_of_empty_tally_is_zero() {
        let tally = SectorTally::default();
        assert_eq!(tally.share(0), 0.0);
        assert_eq!(tally.count(99), 0);
    }

    #[test]
    fn test_simulate_counts_every_spin() {
        let mut rng = StdRng::seed_from_u64(3);
        let stats = simulate(200, &SpinPhysics::default(), &mut rng);
        assert_eq!(stats.tally.total(), 200);
        // even the slowest launch travels over a thousand degrees
        assert!(stats.ticks >= 200 * 3);
        assert!(stats.frames >= 200 * 149);
    }

    #[test]
    fn test_same_seed_same_report() {
        let physics = SpinPhysics::default();
        let a = simulate(50, &physics, &mut StdRng::seed_from_u64(11));
        let b = simulate(50, &physics, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_group_report_rows_follow_catalog() {
        let catalog = catalog_group(1);
        let stats = SpinStats { tally: sweep_tally(60), frames: 600, ticks: 120 };
        let report = GroupReport::new(catalog, &stats);
        assert_eq!(report.group, 1);
        assert_eq!(report.rows.len(), SECTOR_COUNT);
        assert_eq!(report.rows[2].prize, "Avatar Raro");
        assert_eq!(report.mean_frames, 10.0);
        assert_eq!(report.mean_ticks, 2.0);
        let measured: f64 = report.rows.iter().map(|r| r.measured).sum();
        assert!((measured - 100.0).abs() < 1e-9);
        assert!(report.worst_row().is_some());
    }

    #[test]
    fn test_renderers() {
        let stats = SpinStats { tally: sweep_tally(6), frames: 6, ticks: 6 };
        let reports = vec![GroupReport::new(catalog_group(0), &stats)];

        let text = render_text(&reports);
        assert!(text.starts_with("Group 0 | 6 spins"));
        assert!(text.contains("+10 Moedas"));

        let json: serde_json::Value = serde_json::from_str(&render_json(&reports).unwrap()).unwrap();
        assert_eq!(json[0]["rows"].as_array().map(|rows| rows.len()), Some(SECTOR_COUNT));
    }
}
