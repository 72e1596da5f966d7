//! Read-only render views of the simulation
//!
//! The drawing layer only ever sees these; nothing flows back into the core.

use glam::DVec2;
use serde::Serialize;

use super::state::{Behavior, SimState, SpriteTag, SurfaceTag};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterView {
    pub pos: DVec2,
    pub health: f64,
    pub points: f64,
    pub crouching: bool,
    pub aim: i32,
    pub facing_left: bool,
    pub on_ground: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: DVec2,
    pub sprite: SpriteTag,
    pub behavior: Behavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub pos: DVec2,
    pub size: DVec2,
    pub surface: SurfaceTag,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub characters: Vec<CharacterView>,
    pub projectiles: Vec<ProjectileView>,
    pub obstacles: Vec<ObstacleView>,
}

impl RenderSnapshot {
    pub fn capture(state: &SimState) -> Self {
        let characters = state
            .characters
            .iter()
            .map(|c| CharacterView {
                pos: c.body.pos,
                health: c.health,
                points: c.points,
                crouching: c.crouching,
                aim: c.aim,
                facing_left: c.facing_left,
                on_ground: c.on_ground,
            })
            .collect();

        let projectiles = state
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                pos: p.body.pos,
                sprite: p.sprite,
                behavior: p.behavior,
            })
            .collect();

        let obstacles = state
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                pos: o.pos,
                size: o.size,
                surface: o.surface,
            })
            .collect();

        Self {
            tick: state.time_ticks,
            characters,
            projectiles,
            obstacles,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scenario::Scenario;

    #[test]
    fn test_capture_reference() {
        let state = Scenario::reference().build().expect("reference scenario is valid");
        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.tick, 0);
        assert_eq!(snap.characters.len(), 1);
        assert_eq!(snap.characters[0].health, 100.0);
        assert!(snap.projectiles.is_empty());
        assert_eq!(snap.obstacles.len(), state.obstacles.len());
    }

    #[test]
    fn test_snapshot_json() {
        let state = Scenario::reference().build().expect("reference scenario is valid");
        let json = RenderSnapshot::capture(&state).to_json().expect("snapshot serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["characters"][0]["health"], 100.0);
        assert_eq!(value["characters"][0]["aim"], 0);
    }
}
