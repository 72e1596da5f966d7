//! Intent-driven character controller
//!
//! Turns one tick of intents into acceleration, integrates the body and
//! applies the post-integration clamps. Collision runs afterwards and
//! decides whether the character ends the tick on the ground.

use glam::DVec2;

use super::state::Character;
use super::tick::Intents;
use crate::clamp_aim;
use crate::consts::*;

/// Advance one character by `dt` seconds
pub fn update_character(c: &mut Character, intents: &Intents, dt: f64) {
    if intents.aim_up {
        c.aim = clamp_aim(c.aim + AIM_STEP);
    }
    if intents.aim_down {
        c.aim = clamp_aim(c.aim - AIM_STEP);
    }

    let mut acc = DVec2::new(0.0, GRAVITY);
    if intents.move_right {
        acc.x += MOVE_ACCEL;
        c.facing_left = false;
    }
    if intents.move_left {
        acc.x -= MOVE_ACCEL;
        c.facing_left = true;
    }

    update_stance(c, intents.crouch);
    acc.y += jump_boost(c, intents.jump, dt);

    let braking = c.on_ground && !intents.move_left && !intents.move_right;
    let drag = if braking {
        if c.body.vel.x * c.body.vel.x > BRAKE_FAST_THRESHOLD {
            c.body.friction * BRAKE_DRAG_FAST
        } else {
            c.body.friction * BRAKE_DRAG_SLOW
        }
    } else {
        c.body.friction
    };

    c.body.acc = acc;
    c.body.integrate_with_drag(drag, dt);

    c.body.vel.x = c.body.vel.x.clamp(-c.max_hspeed, c.max_hspeed);
    if braking {
        let vx = c.body.vel.x;
        c.body.vel = DVec2::new(if vx * vx > BRAKE_STOP_THRESHOLD { vx } else { 0.0 }, 0.0);
    }

    c.on_ground = false;
}

/// Crouch transitions shift the body so the feet stay roughly in place
fn update_stance(c: &mut Character, crouch: bool) {
    if crouch {
        if !c.crouching {
            c.body.pos.y += CROUCH_DROP;
        }
        c.crouching = true;
    } else {
        if c.crouching && c.on_ground {
            c.body.pos.y -= CROUCH_RISE;
        }
        c.crouching = false;
    }
}

/// Vertical acceleration contributed by the jump this tick
fn jump_boost(c: &mut Character, jump: bool, dt: f64) -> f64 {
    if c.on_ground {
        c.jump_available = true;
        c.jump_charge = JUMP_CHARGE;
    } else if !jump {
        c.jump_available = false;
    }

    if !(jump && c.jump_available) {
        return 0.0;
    }

    c.jump_charge -= dt;
    if c.jump_charge <= 0.0 {
        c.jump_available = false;
    }
    JUMP_BOOST
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 0.015;

    fn grounded() -> Character {
        let mut c = Character::new(SPAWN_POINT);
        c.on_ground = true;
        c
    }

    #[test]
    fn test_aim_steps_and_clamps() {
        let mut c = Character::new(SPAWN_POINT);
        let up = Intents {
            aim_up: true,
            ..Default::default()
        };
        update_character(&mut c, &up, DT);
        assert_eq!(c.aim, 2);
        for _ in 0..100 {
            update_character(&mut c, &up, DT);
        }
        assert_eq!(c.aim, AIM_MAX);

        let down = Intents {
            aim_down: true,
            ..Default::default()
        };
        for _ in 0..100 {
            update_character(&mut c, &down, DT);
        }
        assert_eq!(c.aim, AIM_MIN);
    }

    #[test]
    fn test_airborne_falls_and_clears_ground_flag() {
        let mut c = Character::new(SPAWN_POINT);
        update_character(&mut c, &Intents::default(), DT);
        assert!(c.body.vel.y > 0.0);
        assert!(c.body.pos.y > SPAWN_POINT.y);
        assert!(!c.on_ground);
    }

    #[test]
    fn test_move_sets_facing() {
        let mut c = grounded();
        let left = Intents {
            move_left: true,
            ..Default::default()
        };
        update_character(&mut c, &left, DT);
        assert!(c.facing_left);
        assert!(c.body.vel.x < 0.0);

        c.on_ground = true;
        let right = Intents {
            move_right: true,
            ..Default::default()
        };
        update_character(&mut c, &right, DT);
        assert!(!c.facing_left);
    }

    #[test]
    fn test_crouch_nudges_once_and_rises_on_ground() {
        let mut c = grounded();
        let crouch = Intents {
            crouch: true,
            ..Default::default()
        };
        let y0 = c.body.pos.y;
        update_character(&mut c, &crouch, DT);
        assert!(c.crouching);
        // Grounded and braking: vertical velocity is forced to zero, so the
        // only vertical motion is the nudge plus one step of gravity
        let y1 = c.body.pos.y;
        assert!(y1 - y0 >= CROUCH_DROP);

        c.on_ground = true;
        update_character(&mut c, &crouch, DT);
        assert!(c.body.pos.y - y1 < CROUCH_DROP, "nudge applies only on the first tick");

        c.on_ground = true;
        let y2 = c.body.pos.y;
        update_character(&mut c, &Intents::default(), DT);
        assert!(!c.crouching);
        assert!(c.body.pos.y < y2 - CROUCH_RISE + 0.05);
    }

    #[test]
    fn test_airborne_release_keeps_position() {
        let mut c = Character::new(SPAWN_POINT);
        c.crouching = true;
        let y0 = c.body.pos.y;
        update_character(&mut c, &Intents::default(), DT);
        assert!(!c.crouching);
        assert!(c.body.pos.y > y0, "no rise while airborne");
    }

    #[test]
    fn test_jump_requires_ground() {
        let jump = Intents {
            jump: true,
            ..Default::default()
        };

        let mut airborne = Character::new(SPAWN_POINT);
        airborne.jump_available = false;
        update_character(&mut airborne, &jump, DT);
        assert!(airborne.body.vel.y > 0.0, "no boost mid-air");

        // Take-off tick: standing still counts as braking, so only the
        // position carries the boost
        let mut c = grounded();
        update_character(&mut c, &jump, DT);
        assert!(c.body.pos.y < SPAWN_POINT.y, "boost overcomes gravity");
        assert!(c.jump_charge < JUMP_CHARGE);

        update_character(&mut c, &jump, DT);
        assert!(c.body.vel.y < 0.0);
    }

    #[test]
    fn test_jump_charge_runs_out() {
        let jump = Intents {
            jump: true,
            ..Default::default()
        };
        let mut c = grounded();
        let mut ticks = 0;
        while c.jump_available {
            update_character(&mut c, &jump, DT);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(ticks, (JUMP_CHARGE / DT).ceil() as usize);

        let vy = c.body.vel.y;
        update_character(&mut c, &jump, DT);
        assert!(c.body.vel.y > vy, "only gravity after the charge is spent");
    }

    #[test]
    fn test_releasing_jump_midair_revokes_it() {
        let mut c = grounded();
        let jump = Intents {
            jump: true,
            ..Default::default()
        };
        update_character(&mut c, &jump, DT);
        assert!(c.jump_available);
        update_character(&mut c, &Intents::default(), DT);
        assert!(!c.jump_available);
        update_character(&mut c, &jump, DT);
        assert!(!c.jump_available);
    }

    #[test]
    fn test_braking_snaps_slow_drift() {
        let mut c = grounded();
        c.body.vel = DVec2::new(1.0, 3.0);
        update_character(&mut c, &Intents::default(), DT);
        assert_eq!(c.body.vel, DVec2::ZERO);
    }

    #[test]
    fn test_braking_keeps_fast_drift_horizontal() {
        let mut c = grounded();
        c.body.vel = DVec2::new(8.0, 3.0);
        update_character(&mut c, &Intents::default(), DT);
        assert!(c.body.vel.x > 0.0 && c.body.vel.x < 8.0);
        assert_eq!(c.body.vel.y, 0.0);
    }

    #[test]
    fn test_horizontal_speed_clamped() {
        let mut c = Character::new(SPAWN_POINT);
        c.body.vel = DVec2::new(40.0, 0.0);
        update_character(&mut c, &Intents::default(), DT);
        assert_eq!(c.body.vel.x, c.max_hspeed);

        c.body.vel = DVec2::new(-40.0, 0.0);
        update_character(&mut c, &Intents::default(), DT);
        assert_eq!(c.body.vel.x, -c.max_hspeed);
    }
}
