use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::constants::{
    FRICTION, FULL_TURN_DEGREES, MAX_INITIAL_VELOCITY, MIN_INITIAL_VELOCITY, MIN_TURNS, STOP_THRESHOLD,
};
use super::tick::crossed_boundaries;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    NonPositiveFriction(f64),
    NegativeThreshold(f64),
    InvalidVelocityRange { min: f64, max: f64 },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveFriction(v) => write!(f, "Friction must be positive, got {}", v),
            Self::NegativeThreshold(v) => write!(f, "Stop threshold must not be negative, got {}", v),
            Self::InvalidVelocityRange { min, max } => {
                write!(f, "Invalid initial velocity range {}..{}", min, max)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Tuning for the linear-deceleration spin, in degrees per frame.
///
/// Only constructible through [`SpinPhysics::new`] or `Default`, so a value
/// in hand always has positive friction and a spin is guaranteed to stop.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SpinPhysics {
    min_velocity: f64,
    max_velocity: f64,
    friction: f64,
    stop_threshold: f64,
    min_turns: u32,
}

impl Default for SpinPhysics {
    fn default() -> Self {
        Self {
            min_velocity: MIN_INITIAL_VELOCITY,
            max_velocity: MAX_INITIAL_VELOCITY,
            friction: FRICTION,
            stop_threshold: STOP_THRESHOLD,
            min_turns: MIN_TURNS,
        }
    }
}

impl SpinPhysics {
    pub fn new(
        min_velocity: f64,
        max_velocity: f64,
        friction: f64,
        stop_threshold: f64,
        min_turns: u32,
    ) -> Result<Self, PhysicsError> {
        // NaN fails every comparison, so the checks are phrased to reject it
        if !(friction > 0.0) {
            return Err(PhysicsError::NonPositiveFriction(friction));
        }
        if !(stop_threshold >= 0.0) {
            return Err(PhysicsError::NegativeThreshold(stop_threshold));
        }
        if !(min_velocity > 0.0 && max_velocity >= min_velocity) || !max_velocity.is_finite() {
            return Err(PhysicsError::InvalidVelocityRange { min: min_velocity, max: max_velocity });
        }
        Ok(Self { min_velocity, max_velocity, friction, stop_threshold, min_turns })
    }

    pub fn min_velocity(&self) -> f64 {
        self.min_velocity
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn stop_threshold(&self) -> f64 {
        self.stop_threshold
    }

    pub fn min_turns(&self) -> u32 {
        self.min_turns
    }

    /// Upper bound on frames for a spin launched at `velocity`.
    pub fn max_frames(&self, velocity: f64) -> u32 {
        (velocity / self.friction).ceil() as u32 + 1
    }
}

/// Result of advancing the wheel by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub previous_rotation: f64,
    pub rotation: f64,
    pub tick: Option<usize>,
    pub finished: bool,
}

/// One spin in flight. Rotation is cumulative and only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinMotion {
    rotation: f64,
    velocity: f64,
    initial_velocity: f64,
    nominal_target: f64,
    friction: f64,
    stop_threshold: f64,
    frames: u32,
    finished: bool,
}

impl SpinMotion {
    pub fn launch<R: Rng + ?Sized>(start_rotation: f64, physics: &SpinPhysics, rng: &mut R) -> Self {
        let velocity = if physics.max_velocity > physics.min_velocity {
            rng.gen_range(physics.min_velocity..physics.max_velocity)
        } else {
            physics.min_velocity
        };
        let offset = rng.gen_range(0.0..FULL_TURN_DEGREES);
        let nominal_target = start_rotation + physics.min_turns as f64 * FULL_TURN_DEGREES + offset;
        Self::with_velocity(start_rotation, velocity, nominal_target, physics)
    }

    pub fn with_velocity(start_rotation: f64, velocity: f64, nominal_target: f64, physics: &SpinPhysics) -> Self {
        Self {
            rotation: start_rotation,
            velocity,
            initial_velocity: velocity,
            nominal_target,
            friction: physics.friction,
            stop_threshold: physics.stop_threshold,
            frames: 0,
            finished: false,
        }
    }

    /// Advances one frame: move by the current velocity, look for a boundary
    /// crossing, then apply friction.
    pub fn step(&mut self) -> FrameOutcome {
        let previous_rotation = self.rotation;
        if self.finished {
            return FrameOutcome { previous_rotation, rotation: self.rotation, tick: None, finished: true };
        }

        self.rotation += self.velocity;
        let tick = crossed_boundaries(previous_rotation, self.rotation).last();
        self.velocity -= self.friction;
        self.frames += 1;
        self.finished = self.velocity <= self.stop_threshold;

        FrameOutcome { previous_rotation, rotation: self.rotation, tick, finished: self.finished }
    }

    /// Steps until the wheel stops. Returns the number of ticks fired.
    pub fn run_to_completion(&mut self) -> u32 {
        let mut ticks = 0;
        while !self.finished {
            if self.step().tick.is_some() {
                ticks += 1;
            }
        }
        ticks
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Where the wheel would stop if it spun exactly `min_turns` plus a random offset.
    /// The actual stop comes from the velocity threshold.
    pub fn nominal_target(&self) -> f64 {
        self.nominal_target
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_non_positive_friction() {
        assert_eq!(SpinPhysics::new(15.0, 25.0, 0.0, 0.1, 3), Err(PhysicsError::NonPositiveFriction(0.0)));
        assert_eq!(SpinPhysics::new(15.0, 25.0, -0.5, 0.1, 3), Err(PhysicsError::NonPositiveFriction(-0.5)));
        assert!(SpinPhysics::new(15.0, 25.0, f64::NAN, 0.1, 3).is_err());
    }

    #[test]
    fn test_rejects_bad_velocity_range() {
        assert!(SpinPhysics::new(25.0, 15.0, 0.1, 0.1, 3).is_err());
        assert!(SpinPhysics::new(0.0, 15.0, 0.1, 0.1, 3).is_err());
        assert!(SpinPhysics::new(15.0, f64::INFINITY, 0.1, 0.1, 3).is_err());
        assert!(SpinPhysics::new(15.0, 25.0, 0.1, -1.0, 3).is_err());
        assert!(SpinPhysics::new(20.0, 20.0, 0.1, 0.1, 3).is_ok());
    }

    #[test]
    fn test_launch_velocity_in_range() {
        let physics = SpinPhysics::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let motion = SpinMotion::launch(0.0, &physics, &mut rng);
            assert!(motion.initial_velocity() >= 15.0 && motion.initial_velocity() < 25.0);
            assert!(motion.nominal_target() >= 3.0 * 360.0);
            assert!(motion.nominal_target() < 4.0 * 360.0);
        }
    }

    #[test]
    fn test_rotation_is_monotonic_and_terminates() {
        let physics = SpinPhysics::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut motion = SpinMotion::launch(90.0, &physics, &mut rng);
        let bound = physics.max_frames(motion.initial_velocity());

        let mut last = motion.rotation();
        while !motion.is_finished() {
            let outcome = motion.step();
            assert!(outcome.rotation > last);
            assert_eq!(outcome.previous_rotation, last);
            last = outcome.rotation;
            assert!(motion.frames() <= bound);
        }
        assert!(motion.velocity() <= physics.stop_threshold());
    }

    #[test]
    fn test_linear_deceleration() {
        let physics = SpinPhysics::new(10.0, 10.0, 1.0, 0.5, 3).unwrap();
        let mut motion = SpinMotion::with_velocity(0.0, 10.0, 1080.0, &physics);
        let first = motion.step();
        assert_eq!(first.rotation, 10.0);
        assert_eq!(motion.velocity(), 9.0);
        motion.step();
        assert_eq!(motion.rotation(), 19.0);
        // 10 + 9 + ... + 1 = 55, stops once velocity reaches 0
        motion.run_to_completion();
        assert_eq!(motion.rotation(), 55.0);
        assert_eq!(motion.frames(), 10);
    }

    #[test]
    fn test_step_after_finish_is_inert() {
        let physics = SpinPhysics::new(1.0, 1.0, 1.0, 0.5, 0).unwrap();
        let mut motion = SpinMotion::with_velocity(0.0, 1.0, 0.0, &physics);
        assert!(motion.step().finished);
        let again = motion.step();
        assert!(again.finished);
        assert_eq!(again.rotation, 1.0);
        assert_eq!(motion.frames(), 1);
    }

    #[test]
    fn test_default_spin_ticks_on_every_boundary() {
        let physics = SpinPhysics::default();
        let mut motion = SpinMotion::with_velocity(0.0, 20.0, 1080.0, &physics);
        let ticks = motion.run_to_completion();
        let expected = (motion.rotation() / 60.0).floor() as u32;
        // velocity never exceeds 60°/frame, so each frame crosses at most one boundary
        assert_eq!(ticks, expected);
    }
}
