//! Bullet Hell - a small 2D platform shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, projectiles, damage)
//! - `settings`: Headless driver configuration
//! - `cli`: Command line for the headless runner

pub mod cli;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
///
/// World units: one obstacle tile is 1x1, +y points down.
pub mod consts {
    use glam::DVec2;

    /// Reference tick duration (milliseconds)
    pub const TICK_MS: u64 = 15;

    /// Constant downward acceleration applied to characters
    pub const GRAVITY: f64 = 50.0;
    /// Horizontal acceleration added by a move intent
    pub const MOVE_ACCEL: f64 = 100.0;
    /// Vertical acceleration added while a jump is held (negative = up)
    pub const JUMP_BOOST: f64 = -170.0;
    /// Seconds of jump boost available after leaving the ground
    pub const JUMP_CHARGE: f64 = 0.25;

    /// Character defaults
    pub const CHARACTER_FRICTION: f64 = 0.03;
    pub const CHARACTER_MAX_HSPEED: f64 = 15.0;
    pub const CHARACTER_MAX_HEALTH: f64 = 100.0;
    pub const CHARACTER_HALF_WIDTH: f64 = 0.7;
    pub const CHARACTER_HALF_HEIGHT: f64 = 1.2;
    pub const CHARACTER_CROUCH_HALF_HEIGHT: f64 = 0.7;
    /// Position nudge (down) on the first crouching tick
    pub const CROUCH_DROP: f64 = 0.35;
    /// Position nudge (up) when standing back up on the ground
    pub const CROUCH_RISE: f64 = 0.6;
    /// Minimum distance between two character centres
    pub const CHARACTER_SEPARATION: f64 = 1.0;

    /// Braking drag multipliers (fast drift vs. slow drift)
    pub const BRAKE_DRAG_FAST: f64 = 10.0;
    pub const BRAKE_DRAG_SLOW: f64 = 40.0;
    /// |vx|² above which braking uses the lighter multiplier
    pub const BRAKE_FAST_THRESHOLD: f64 = 10.0;
    /// |vx|² at or below which braking snaps to a stop
    pub const BRAKE_STOP_THRESHOLD: f64 = 2.5;

    /// Aim bounds (degrees) and step per tick
    pub const AIM_MIN: i32 = -10;
    pub const AIM_MAX: i32 = 70;
    pub const AIM_STEP: i32 = 2;

    /// Projectile defaults
    pub const PROJECTILE_HALF_EXTENT: f64 = 0.4;
    /// Behavior clock of a freshly spawned projectile (seconds)
    pub const PROJECTILE_CLOCK_START: f64 = 0.2;
    pub const SHOT_SPEED: f64 = 30.0;
    pub const SHOT_MUZZLE: f64 = 2.0;
    pub const SHOT_RAISE: f64 = 0.2;

    /// Arc-oscillate channel and timing
    pub const ARC_BAND_TOP: f64 = 15.5;
    pub const ARC_BAND_BOTTOM: f64 = 22.0;
    pub const ARC_HALF_PERIOD: f64 = 0.5;
    pub const ARC_PERIOD: f64 = 1.0;
    /// Lobbed projectiles expire after this many seconds
    pub const LOB_LIFETIME: f64 = 4.0;
    /// Damping applied to a projectile's vx on a floor/ceiling bounce
    pub const PROJECTILE_SKID: f64 = 0.97;

    /// Damage model
    pub const HIT_RADIUS: f64 = 1.3;
    pub const HIT_DAMAGE: f64 = 10.0;
    pub const KNOCKBACK_VX: f64 = -80.0;

    /// Live area for projectiles (exclusive bounds)
    pub const BOUNDS_MIN: DVec2 = DVec2::new(-10.0, -10.0);
    pub const BOUNDS_MAX: DVec2 = DVec2::new(74.0, 74.0);

    /// Reference spawn point
    pub const SPAWN_POINT: DVec2 = DVec2::new(4.0, 30.0);
}

/// Clamp an aim angle (degrees) to the allowed range
#[inline]
pub fn clamp_aim(degrees: i32) -> i32 {
    degrees.clamp(consts::AIM_MIN, consts::AIM_MAX)
}

/// Unit vector for a heading in degrees, measured from +y (down) toward +x
///
/// 90° points right, 180° points up.
#[inline]
pub fn heading_to_vector(degrees: f64) -> DVec2 {
    let rad = degrees.to_radians();
    DVec2::new(rad.sin(), rad.cos())
}

/// Heading (degrees) of a character's gun for its aim angle and facing
#[inline]
pub fn aim_heading(aim: i32, facing_left: bool) -> f64 {
    let heading = f64::from(aim) + 90.0;
    if facing_left { -heading } else { heading }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_aim() {
        assert_eq!(clamp_aim(100), 70);
        assert_eq!(clamp_aim(-40), -10);
        assert_eq!(clamp_aim(12), 12);
    }

    #[test]
    fn test_level_aim_points_sideways() {
        let right = heading_to_vector(aim_heading(0, false));
        assert!((right.x - 1.0).abs() < 1e-12);
        assert!(right.y.abs() < 1e-12);

        let left = heading_to_vector(aim_heading(0, true));
        assert!((left.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_raised_aim_points_up() {
        let dir = heading_to_vector(aim_heading(70, false));
        assert!(dir.x > 0.0);
        assert!(dir.y < 0.0, "raised gun should point up (-y)");
        assert!((dir.length() - 1.0).abs() < 1e-12);
    }
}
