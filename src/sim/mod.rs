//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock reads, no unseeded randomness
//! - Stable iteration order (entity vectors in spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod character;
pub mod collision;
pub mod damage;
pub mod emitter;
pub mod pilot;
pub mod projectile;
pub mod scenario;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{Contact, ContactSides, overlaps, resolve_body};
pub use emitter::EmitterProfile;
pub use pilot::Pilot;
pub use scenario::{EmitterSpec, RectSpec, Scenario, ScenarioError};
pub use snapshot::RenderSnapshot;
pub use state::{
    Behavior, Character, Emitter, Obstacle, Projectile, SimEvent, SimState, SpriteTag, SurfaceTag,
};
pub use tick::{Intents, TickDuration, TickInput, tick};
