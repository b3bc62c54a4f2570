use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{FREE_SPINS_GRANT, FREE_SPINS_MARKER, SPECIAL_SPIN_GRANT, SPECIAL_SPIN_MARKER};

static EXPERIENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?(\d+)\s*XP$").expect("valid experience pattern"));
static COINS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?(\d+)\s*Moedas?$").expect("valid coins pattern"));

/// Spin credits granted by a prize.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardEffect {
    pub regular_spins: u32,
    pub special_spins: u32,
}

impl RewardEffect {
    pub fn is_empty(&self) -> bool {
        self.regular_spins == 0 && self.special_spins == 0
    }
}

/// Only spin prizes change the session; everything else is display-only.
pub fn reward_effect(prize_name: &str) -> RewardEffect {
    let mut effect = RewardEffect::default();
    if prize_name.contains(FREE_SPINS_MARKER) {
        effect.regular_spins += FREE_SPINS_GRANT;
    }
    if prize_name.contains(SPECIAL_SPIN_MARKER) {
        effect.special_spins += SPECIAL_SPIN_GRANT;
    }
    effect
}

/// What a prize looks like to the player: icon and label category.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RewardKind {
    FreeSpins,
    SpecialSpin,
    Experience(u32),
    Coins(u32),
    Avatar,
    Badge,
    Other,
}

impl RewardKind {
    pub fn classify(prize_name: &str) -> Self {
        let name = prize_name.trim();
        if name.contains(FREE_SPINS_MARKER) {
            return Self::FreeSpins;
        }
        if name.contains(SPECIAL_SPIN_MARKER) {
            return Self::SpecialSpin;
        }
        if let Some(amount) = capture_amount(&EXPERIENCE_PATTERN, name) {
            return Self::Experience(amount);
        }
        if let Some(amount) = capture_amount(&COINS_PATTERN, name) {
            return Self::Coins(amount);
        }
        if name.starts_with("Avatar") {
            return Self::Avatar;
        }
        if name.starts_with("Medalha") {
            return Self::Badge;
        }
        Self::Other
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::FreeSpins => "🔄",
            Self::SpecialSpin => "⭐",
            Self::Experience(_) => "⚡",
            Self::Coins(_) => "🪙",
            Self::Avatar => "👤",
            Self::Badge => "🏅",
            Self::Other => "🎁",
        }
    }

    /// Whether winning this prize changes spin counters.
    pub fn has_effect(&self) -> bool {
        matches!(self, Self::FreeSpins | Self::SpecialSpin)
    }
}

fn capture_amount(pattern: &Regex, name: &str) -> Option<u32> {
    pattern
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_spins_effect() {
        let effect = reward_effect("+3 Giros Grátis");
        assert_eq!(effect, RewardEffect { regular_spins: 3, special_spins: 0 });
    }

    #[test]
    fn test_special_spin_effect() {
        let effect = reward_effect("Giro Especial");
        assert_eq!(effect, RewardEffect { regular_spins: 0, special_spins: 1 });
    }

    #[test]
    fn test_display_only_prizes_have_no_effect() {
        for name in ["+50 XP", "+10 Moedas", "Avatar Raro", "Medalha Dourada"] {
            assert!(reward_effect(name).is_empty(), "{}", name);
            assert!(!RewardKind::classify(name).has_effect(), "{}", name);
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(RewardKind::classify("+3 Giros Grátis"), RewardKind::FreeSpins);
        assert_eq!(RewardKind::classify("Giro Especial"), RewardKind::SpecialSpin);
        assert_eq!(RewardKind::classify("+200 XP"), RewardKind::Experience(200));
        assert_eq!(RewardKind::classify("+25 Moedas"), RewardKind::Coins(25));
        assert_eq!(RewardKind::classify("Avatar Lendário"), RewardKind::Avatar);
        assert_eq!(RewardKind::classify("Medalha Dourada"), RewardKind::Badge);
        assert_eq!(RewardKind::classify("Surpresa"), RewardKind::Other);
    }
}
