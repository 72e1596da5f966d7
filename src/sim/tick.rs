//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::character::update_character;
use super::collision::{resolve_character, resolve_projectile, separate_characters};
use super::damage::resolve_damage;
use super::emitter::{character_shot, run_emitters};
use super::projectile::update_projectile;
use super::scenario::ScenarioError;
use super::state::{SimEvent, SimState};

/// One character's input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub move_left: bool,
    pub move_right: bool,
    /// Jump (held)
    pub jump: bool,
    pub crouch: bool,
    pub aim_up: bool,
    pub aim_down: bool,
    pub fire: bool,
}

/// Input commands for a single tick (deterministic)
///
/// Index `i` drives character `i`; missing entries mean no intents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub intents: Vec<Intents>,
}

impl TickInput {
    /// Same intents for a single-character scenario
    pub fn single(intents: Intents) -> Self {
        Self {
            intents: vec![intents],
        }
    }

    fn for_character(&self, index: usize) -> Intents {
        self.intents.get(index).copied().unwrap_or_default()
    }
}

/// Validated tick length
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TickDuration(f64);

impl TickDuration {
    pub fn from_secs(secs: f64) -> Result<Self, ScenarioError> {
        if secs.is_finite() && secs > 0.0 {
            Ok(Self(secs))
        } else {
            Err(ScenarioError::InvalidTickDuration(secs))
        }
    }

    pub fn from_millis(ms: u64) -> Result<Self, ScenarioError> {
        Self::from_secs(ms as f64 / 1000.0)
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Wall-clock length for the pacing layer
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

/// Advance the simulation by one fixed timestep
///
/// Order: characters, spawns, projectiles, character separation,
/// character/level collision, damage.
pub fn tick(state: &mut SimState, input: &TickInput, dt: TickDuration) {
    let dt = dt.secs();
    state.events.clear();
    state.time_ticks += 1;

    // Characters
    let prev_characters: Vec<DVec2> = state.characters.iter().map(|c| c.body.pos).collect();
    for (i, c) in state.characters.iter_mut().enumerate() {
        update_character(c, &input.for_character(i), dt);
    }

    // Spawns
    run_emitters(state, dt);
    for i in 0..state.characters.len() {
        if input.for_character(i).fire {
            let shot = character_shot(&state.characters[i]);
            state.spawn_projectile(shot);
        }
    }

    // Projectiles
    let mut projectiles = std::mem::take(&mut state.projectiles);
    projectiles.retain_mut(|p| {
        let prev = p.body.pos;
        update_projectile(p, dt);

        if p.expired {
            state.events.push(SimEvent::ProjectileExpired { pos: p.body.pos });
            return false;
        }
        if !p.in_bounds() {
            return false;
        }
        if p.blocked_by_obstacles
            && resolve_projectile(p, prev, &state.obstacles)
            && p.destroyed_on_contact
        {
            state.events.push(SimEvent::ProjectileBlocked { pos: p.body.pos });
            return false;
        }
        true
    });
    state.projectiles = projectiles;

    // Characters vs characters, then vs level
    separate_characters(&mut state.characters, &prev_characters);
    for (c, prev) in state.characters.iter_mut().zip(&prev_characters) {
        resolve_character(c, *prev, &state.obstacles);
    }

    resolve_damage(&mut state.characters, &mut state.projectiles, &mut state.events);
}
