use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::constants::{
    DEFAULT_CURRENCY_BALANCE, DEFAULT_REGULAR_SPINS, DEFAULT_SPECIAL_SPINS, INSUFFICIENT_FUNDS_ERROR,
    MAX_REGENERATIONS, REGENERATION_COSTS, REGENERATION_LIMIT_ERROR, SPIN_BLOCKED_ERROR,
};
use super::catalog::{active_group_index, catalog_group, Prize, PrizeCatalog};
use super::resolver::determine_prize;
use super::rewards::{reward_effect, RewardEffect};
use super::spin::{SpinMotion, SpinPhysics};

/// Starting values for a session, one per modal open.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub regular_spins: u32,
    pub special_spins: u32,
    pub currency_balance: u32,
    pub regeneration_count: u32,
    pub physics: SpinPhysics,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            regular_spins: DEFAULT_REGULAR_SPINS,
            special_spins: DEFAULT_SPECIAL_SPINS,
            currency_balance: DEFAULT_CURRENCY_BALANCE,
            regeneration_count: 0,
            physics: SpinPhysics::default(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    /// Wheel has stopped; the prize is resolved after the settle delay.
    Settling,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinPool {
    Special,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinBlocked {
    AlreadySpinning,
    DailyLimitReached,
    NoSpinsLeft,
}

impl fmt::Display for SpinBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySpinning => write!(f, "Wheel is already spinning"),
            Self::DailyLimitReached => write!(f, "Daily spin already used"),
            Self::NoSpinsLeft => write!(f, "{}", SPIN_BLOCKED_ERROR),
        }
    }
}

impl std::error::Error for SpinBlocked {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateBlocked {
    LimitReached,
    InsufficientFunds { cost: u32, balance: u32 },
    Spinning,
}

impl fmt::Display for RegenerateBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimitReached => write!(f, "{}", REGENERATION_LIMIT_ERROR),
            Self::InsufficientFunds { cost, balance } => {
                write!(f, "{}: custo {}, saldo {}", INSUFFICIENT_FUNDS_ERROR, cost, balance)
            }
            Self::Spinning => write!(f, "Cannot regenerate prizes while the wheel is spinning"),
        }
    }
}

impl std::error::Error for RegenerateBlocked {}

/// Everything the view needs to render one frame of the modal.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub rotation: f64,
    pub phase: SpinPhase,
    pub is_spinning: bool,
    pub regular_spins: u32,
    pub special_spins: u32,
    pub regeneration_count: u32,
    pub currency_balance: u32,
    pub daily_spin_used: bool,
    pub can_spin: bool,
    pub can_regenerate: bool,
    pub regeneration_cost: Option<u32>,
    pub active_group: usize,
    pub last_prize: Option<Prize>,
    pub show_result: bool,
}

/// State of the reward wheel for one modal-open lifetime.
#[derive(Debug, Clone)]
pub struct SpinSession {
    rotation: f64,
    phase: SpinPhase,
    regular_spins: u32,
    special_spins: u32,
    regeneration_count: u32,
    currency_balance: u32,
    daily_spin_used: bool,
    last_prize: Option<Prize>,
    show_result: bool,
    physics: SpinPhysics,
}

impl Default for SpinSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SpinSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            rotation: 0.0,
            phase: SpinPhase::Idle,
            regular_spins: config.regular_spins,
            special_spins: config.special_spins,
            regeneration_count: config.regeneration_count.min(MAX_REGENERATIONS),
            currency_balance: config.currency_balance,
            daily_spin_used: false,
            last_prize: None,
            show_result: false,
            physics: config.physics,
        }
    }

    pub fn spin_blocker(&self) -> Option<SpinBlocked> {
        if self.phase != SpinPhase::Idle {
            Some(SpinBlocked::AlreadySpinning)
        } else if self.daily_spin_used {
            Some(SpinBlocked::DailyLimitReached)
        } else if self.regular_spins == 0 && self.special_spins == 0 {
            Some(SpinBlocked::NoSpinsLeft)
        } else {
            None
        }
    }

    pub fn can_spin(&self) -> bool {
        self.spin_blocker().is_none()
    }

    /// Consumes one spin (special credits first) and launches the wheel.
    /// A blocked spin leaves the session untouched.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SpinMotion, SpinBlocked> {
        if let Some(blocked) = self.spin_blocker() {
            log::debug!("Spin ignored: {}", blocked);
            return Err(blocked);
        }

        let pool = if self.special_spins > 0 {
            self.special_spins -= 1;
            SpinPool::Special
        } else {
            self.regular_spins -= 1;
            SpinPool::Regular
        };

        self.phase = SpinPhase::Spinning;
        self.show_result = false;
        self.last_prize = None;

        let motion = SpinMotion::launch(self.rotation, &self.physics, rng);
        log::info!(
            "Spin started from {:?} pool: velocity {:.2}, nominal target {:.1}",
            pool,
            motion.initial_velocity(),
            motion.nominal_target()
        );
        Ok(motion)
    }

    /// Records the rotation reached by the frame loop. Ignored unless spinning
    /// and moving forward.
    pub fn record_frame(&mut self, rotation: f64) {
        if self.phase == SpinPhase::Spinning && rotation >= self.rotation {
            self.rotation = rotation;
        }
    }

    /// The wheel came to rest; the prize is resolved after the settle delay.
    pub fn mark_stopped(&mut self) {
        if self.phase == SpinPhase::Spinning {
            self.phase = SpinPhase::Settling;
        }
    }

    /// Resolves the prize under the pointer and applies its effects.
    pub fn resolve_prize(&mut self) -> Option<Prize> {
        if self.phase == SpinPhase::Idle {
            return None;
        }
        self.phase = SpinPhase::Idle;

        let prize = determine_prize(self.rotation, self.active_catalog()).clone();
        log::info!("Wheel stopped at {:.1}°, prize: {}", self.rotation, prize.name);
        self.process_reward(&prize.name);
        self.last_prize = Some(prize.clone());
        self.show_result = true;
        Some(prize)
    }

    /// Stops an in-flight spin without resolving it. The consumed credit is not refunded.
    pub fn abort_spin(&mut self) {
        if self.phase == SpinPhase::Idle {
            return;
        }
        log::info!("Spin aborted at {:.1}°", self.rotation);
        self.phase = SpinPhase::Idle;
        self.mark_daily_spin_if_exhausted();
    }

    pub fn process_reward(&mut self, prize_name: &str) -> RewardEffect {
        let effect = reward_effect(prize_name);
        if !effect.is_empty() {
            log::info!(
                "Reward '{}' grants {} regular and {} special spins",
                prize_name,
                effect.regular_spins,
                effect.special_spins
            );
        }
        self.regular_spins += effect.regular_spins;
        self.special_spins += effect.special_spins;
        self.mark_daily_spin_if_exhausted();
        effect
    }

    fn mark_daily_spin_if_exhausted(&mut self) {
        if self.regular_spins == 0 && self.special_spins == 0 {
            self.daily_spin_used = true;
        }
    }

    /// Cost of the next regeneration, or `None` once the limit is reached.
    pub fn regeneration_cost(&self) -> Option<u32> {
        REGENERATION_COSTS.get(self.regeneration_count as usize).copied()
    }

    pub fn regenerate_blocker(&self) -> Option<RegenerateBlocked> {
        let Some(cost) = self.regeneration_cost() else {
            return Some(RegenerateBlocked::LimitReached);
        };
        if self.phase != SpinPhase::Idle {
            Some(RegenerateBlocked::Spinning)
        } else if self.currency_balance < cost {
            Some(RegenerateBlocked::InsufficientFunds { cost, balance: self.currency_balance })
        } else {
            None
        }
    }

    pub fn can_regenerate(&self) -> bool {
        self.regenerate_blocker().is_none()
    }

    /// Pays for the next prize group. Returns the cost paid.
    pub fn regenerate_prizes(&mut self) -> Result<u32, RegenerateBlocked> {
        if let Some(blocked) = self.regenerate_blocker() {
            log::debug!("Regeneration ignored: {}", blocked);
            return Err(blocked);
        }
        let cost = REGENERATION_COSTS[self.regeneration_count as usize];
        self.currency_balance -= cost;
        self.regeneration_count += 1;
        self.last_prize = None;
        self.show_result = false;
        log::info!(
            "Prizes regenerated for {} coins, now showing group {}",
            cost,
            self.active_group()
        );
        Ok(cost)
    }

    pub fn active_group(&self) -> usize {
        active_group_index(self.regeneration_count)
    }

    pub fn active_catalog(&self) -> &'static PrizeCatalog {
        catalog_group(self.active_group())
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    pub fn regular_spins(&self) -> u32 {
        self.regular_spins
    }

    pub fn special_spins(&self) -> u32 {
        self.special_spins
    }

    pub fn regeneration_count(&self) -> u32 {
        self.regeneration_count
    }

    pub fn currency_balance(&self) -> u32 {
        self.currency_balance
    }

    pub fn daily_spin_used(&self) -> bool {
        self.daily_spin_used
    }

    pub fn last_prize(&self) -> Option<&Prize> {
        self.last_prize.as_ref()
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rotation: self.rotation,
            phase: self.phase,
            is_spinning: self.is_spinning(),
            regular_spins: self.regular_spins,
            special_spins: self.special_spins,
            regeneration_count: self.regeneration_count,
            currency_balance: self.currency_balance,
            daily_spin_used: self.daily_spin_used,
            can_spin: self.can_spin(),
            can_regenerate: self.can_regenerate(),
            regeneration_cost: self.regeneration_cost(),
            active_group: self.active_group(),
            last_prize: self.last_prize.clone(),
            show_result: self.show_result,
        }
    }
}
