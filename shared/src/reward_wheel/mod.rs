//! Reward wheel engine: prize catalog, spin physics, tick detection,
//! prize resolution and the per-session spin state.

pub mod catalog;
pub mod resolver;
pub mod rewards;
pub mod session;
pub mod spin;
pub mod tick;

pub use catalog::{active_group_index, all_groups, catalog_group, Prize, PrizeCatalog};
pub use resolver::{determine_prize, normalize_angle, peg_under_pointer, pointer_angle, sector_index};
pub use rewards::{reward_effect, RewardEffect, RewardKind};
pub use session::{
    RegenerateBlocked, SessionConfig, SessionSnapshot, SpinBlocked, SpinPhase, SpinPool, SpinSession,
};
pub use spin::{FrameOutcome, PhysicsError, SpinMotion, SpinPhysics};
pub use tick::{crossed_boundaries, detect_tick};
