//! Simulation state and entity types
//!
//! All mutable state lives in [`SimState`]. Entities are stored in
//! per-kind vectors and never reference each other.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::*;

/// Opaque sprite handle resolved by the drawing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpriteTag(pub u16);

impl SpriteTag {
    /// Player shot
    pub const SHOT: SpriteTag = SpriteTag(0);
    /// Emitter round
    pub const ROUND: SpriteTag = SpriteTag(1);
}

/// Opaque surface/texture handle for obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SurfaceTag(pub u16);

impl SurfaceTag {
    pub const BLOCK: SurfaceTag = SurfaceTag(0);
}

/// A player-controlled character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub body: Body,
    /// Where the character reappears after being killed
    pub spawn: DVec2,
    /// Health in [0, 100]
    pub health: f64,
    pub points: f64,
    /// Horizontal speed clamp
    pub max_hspeed: f64,
    /// Seconds of jump boost remaining
    pub jump_charge: f64,
    pub jump_available: bool,
    pub crouching: bool,
    /// Gun angle in degrees, within [AIM_MIN, AIM_MAX]
    pub aim: i32,
    /// Last horizontal move was to the left
    pub facing_left: bool,
    /// Supported from below (recomputed each tick by collision)
    pub on_ground: bool,
}

impl Character {
    pub fn new(spawn: DVec2) -> Self {
        Self {
            body: Body::new(spawn, CHARACTER_FRICTION),
            spawn,
            health: CHARACTER_MAX_HEALTH,
            points: 0.0,
            max_hspeed: CHARACTER_MAX_HSPEED,
            jump_charge: JUMP_CHARGE,
            jump_available: true,
            crouching: false,
            aim: 0,
            facing_left: false,
            on_ground: false,
        }
    }

    /// Collision half-extents (x, y) for the current stance
    #[inline]
    pub fn half_extents(&self) -> DVec2 {
        let half_height = if self.crouching {
            CHARACTER_CROUCH_HALF_HEIGHT
        } else {
            CHARACTER_HALF_HEIGHT
        };
        DVec2::new(CHARACTER_HALF_WIDTH, half_height)
    }

    /// Soft reset after death: back to spawn with full health
    pub fn respawn(&mut self) {
        self.body.pos = self.spawn;
        self.health = CHARACTER_MAX_HEALTH;
    }
}

/// Projectile behavior (selects acceleration and expiry rule)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Behavior {
    /// Pure ballistic motion under spawn acceleration/friction
    #[default]
    Ballistic,
    /// Repeating up/down arc confined to a horizontal channel
    ArcOscillate,
    /// Falls under gravity and expires after a fixed lifetime
    Lobbed,
    /// Slowly accelerates left until it hits something
    DriftingBlocker,
}

/// A projectile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    pub behavior: Behavior,
    pub sprite: SpriteTag,
    pub damages_character: bool,
    pub blocked_by_obstacles: bool,
    pub destroyed_on_contact: bool,
    pub expired: bool,
    /// Behavior clock (seconds)
    pub clock: f64,
}

impl Projectile {
    pub fn new(pos: DVec2, behavior: Behavior, sprite: SpriteTag) -> Self {
        Self {
            body: Body::new(pos, 0.0),
            behavior,
            sprite,
            damages_character: false,
            blocked_by_obstacles: false,
            destroyed_on_contact: false,
            expired: false,
            clock: PROJECTILE_CLOCK_START,
        }
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.body.vel = vel;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.body.friction = friction;
        self
    }

    pub fn damaging(mut self) -> Self {
        self.damages_character = true;
        self
    }

    pub fn blocked(mut self, destroyed_on_contact: bool) -> Self {
        self.blocked_by_obstacles = true;
        self.destroyed_on_contact = destroyed_on_contact;
        self
    }

    /// Inside the live area (exclusive bounds)
    pub fn in_bounds(&self) -> bool {
        let p = self.body.pos;
        p.x > BOUNDS_MIN.x && p.x < BOUNDS_MAX.x && p.y > BOUNDS_MIN.y && p.y < BOUNDS_MAX.y
    }
}

/// Static axis-aligned obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: DVec2,
    pub size: DVec2,
    pub surface: SurfaceTag,
}

impl Obstacle {
    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.pos + self.size
    }
}

/// Stationary projectile spawner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emitter {
    pub body: Body,
    /// Seconds between spawns
    pub interval: f64,
    /// Seconds until the next spawn
    pub countdown: f64,
}

impl Emitter {
    pub fn new(pos: DVec2, interval: f64) -> Self {
        Self {
            body: Body::new(pos, 0.0),
            interval,
            countdown: 0.0,
        }
    }
}

/// Things that happened during the last tick (for rendering/audio layers)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    ProjectileSpawned { behavior: Behavior, pos: DVec2 },
    CharacterHit { character: usize, damage: f64, health: f64 },
    CharacterRespawned { character: usize },
    ProjectileBlocked { pos: DVec2 },
    ProjectileExpired { pos: DVec2 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Simulation tick counter
    pub time_ticks: u64,
    pub characters: Vec<Character>,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    pub emitters: Vec<Emitter>,
    /// Level geometry (immutable after construction)
    pub obstacles: Vec<Obstacle>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Empty state; use [`super::scenario::Scenario::build`] for validated construction
    pub(crate) fn empty() -> Self {
        Self {
            time_ticks: 0,
            characters: Vec::new(),
            projectiles: Vec::new(),
            emitters: Vec::new(),
            obstacles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Add a projectile to the live set
    pub fn spawn_projectile(&mut self, projectile: Projectile) {
        log::trace!(
            "spawn {:?} at ({:.2}, {:.2})",
            projectile.behavior,
            projectile.body.pos.x,
            projectile.body.pos.y
        );
        self.events.push(SimEvent::ProjectileSpawned {
            behavior: projectile.behavior,
            pos: projectile.body.pos,
        });
        self.projectiles.push(projectile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_stance_extents() {
        let mut c = Character::new(SPAWN_POINT);
        assert_eq!(c.half_extents(), DVec2::new(0.7, 1.2));
        c.crouching = true;
        assert_eq!(c.half_extents(), DVec2::new(0.7, 0.7));
    }

    #[test]
    fn test_respawn_restores_health_and_position() {
        let mut c = Character::new(DVec2::new(4.0, 30.0));
        c.body.pos = DVec2::new(40.0, 10.0);
        c.health = 0.0;
        c.respawn();
        assert_eq!(c.body.pos, DVec2::new(4.0, 30.0));
        assert_eq!(c.health, 100.0);
    }

    #[test]
    fn test_projectile_bounds() {
        let p = Projectile::new(DVec2::new(0.0, 0.0), Behavior::Lobbed, SpriteTag::SHOT);
        assert!(p.in_bounds());
        let p = Projectile::new(DVec2::new(74.0, 0.0), Behavior::Lobbed, SpriteTag::SHOT);
        assert!(!p.in_bounds());
        let p = Projectile::new(DVec2::new(-5.0, 80.0), Behavior::Lobbed, SpriteTag::SHOT);
        assert!(!p.in_bounds());
    }
}
