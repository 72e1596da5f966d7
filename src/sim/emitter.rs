//! Projectile spawning: fixed-interval emitters and character fire

use glam::DVec2;

use super::state::{Behavior, Character, Emitter, Projectile, SimState, SpriteTag};
use crate::consts::*;
use crate::{aim_heading, heading_to_vector};

/// What an emitter fires, fixed by its slot in the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterProfile {
    pub behavior: Behavior,
    pub friction: f64,
    pub blocked_by_obstacles: bool,
    pub destroyed_on_contact: bool,
}

impl EmitterProfile {
    /// Profile for the emitter at `index`; extra emitters stay idle
    pub fn for_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self {
                behavior: Behavior::ArcOscillate,
                friction: 0.1,
                blocked_by_obstacles: false,
                destroyed_on_contact: false,
            }),
            1 => Some(Self {
                behavior: Behavior::DriftingBlocker,
                friction: 0.0,
                blocked_by_obstacles: true,
                destroyed_on_contact: true,
            }),
            _ => None,
        }
    }

    /// A damaging round at rest at `pos`
    pub fn projectile(&self, pos: DVec2) -> Projectile {
        let mut p = Projectile::new(pos, self.behavior, SpriteTag::ROUND)
            .with_friction(self.friction)
            .damaging();
        if self.blocked_by_obstacles {
            p = p.blocked(self.destroyed_on_contact);
        }
        p
    }
}

/// Count down one emitter; true when it fires this tick
pub fn emitter_ready(e: &mut Emitter, dt: f64) -> bool {
    e.countdown -= dt;
    if e.countdown <= 0.0 {
        e.countdown = e.interval;
        true
    } else {
        false
    }
}

/// Advance every emitter and spawn what fires
pub fn run_emitters(state: &mut SimState, dt: f64) {
    for i in 0..state.emitters.len() {
        let e = &mut state.emitters[i];
        if !emitter_ready(e, dt) {
            continue;
        }
        let pos = e.body.pos;
        if let Some(profile) = EmitterProfile::for_index(i) {
            state.spawn_projectile(profile.projectile(pos));
        }
    }
}

/// The shot a character fires along its aim, inheriting its velocity
pub fn character_shot(c: &Character) -> Projectile {
    let dir = heading_to_vector(aim_heading(c.aim, c.facing_left));
    let pos = c.body.pos + DVec2::new(0.0, -SHOT_RAISE) + dir * SHOT_MUZZLE;
    Projectile::new(pos, Behavior::Lobbed, SpriteTag::SHOT)
        .with_velocity(dir * SHOT_SPEED + c.body.vel)
        .blocked(false)
}
