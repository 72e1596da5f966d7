//! Level construction
//!
//! The setup layer describes a level as plain data (rectangles, spawn
//! points, emitters); [`Scenario::build`] validates it and produces the
//! initial [`SimState`].

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Character, Emitter, Obstacle, SimState, SurfaceTag};
use crate::consts::SPAWN_POINT;

/// Largest accepted rect width/height (in tiles)
pub const MAX_RECT_EXTENT: f64 = 4096.0;

/// Construction-time contract violations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("obstacle rect {index} has invalid size {width}x{height}")]
    InvalidRectSize { index: usize, width: f64, height: f64 },
    #[error("obstacle rect {index} is too large ({width}x{height}, max {MAX_RECT_EXTENT})")]
    RectTooLarge { index: usize, width: f64, height: f64 },
    #[error("obstacle rect {index} has a non-finite origin")]
    InvalidRectOrigin { index: usize },
    #[error("spawn point {index} is not finite")]
    InvalidSpawn { index: usize },
    #[error("emitter {index} is invalid: {reason}")]
    InvalidEmitter { index: usize, reason: &'static str },
    #[error("scenario has no characters")]
    NoCharacters,
    #[error("tick duration must be positive and finite, got {0}s")]
    InvalidTickDuration(f64),
}

/// A filled rectangle of level geometry, tiled into unit obstacles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
    pub surface: SurfaceTag,
}

impl RectSpec {
    pub const fn block(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            width,
            height,
            surface: SurfaceTag::BLOCK,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ScenarioError> {
        if !self.origin.is_finite() {
            return Err(ScenarioError::InvalidRectOrigin { index });
        }
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(ScenarioError::InvalidRectSize {
                index,
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_RECT_EXTENT || self.height > MAX_RECT_EXTENT {
            return Err(ScenarioError::RectTooLarge {
                index,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Unit tiles covering the rect; the last row/column may be partial
    pub fn tiles(&self) -> impl Iterator<Item = Obstacle> + '_ {
        let cols = self.width.ceil() as u32;
        let rows = self.height.ceil() as u32;
        (0..cols).flat_map(move |i| {
            (0..rows).map(move |j| {
                let offset = DVec2::new(f64::from(i), f64::from(j));
                let size = DVec2::new(
                    (self.width - offset.x).min(1.0),
                    (self.height - offset.y).min(1.0),
                );
                Obstacle {
                    pos: self.origin + offset,
                    size,
                    surface: self.surface,
                }
            })
        })
    }
}

/// A fixed-interval emitter placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmitterSpec {
    pub pos: DVec2,
    /// Seconds between spawns
    pub interval: f64,
}

/// In-memory level description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub rects: Vec<RectSpec>,
    pub spawns: Vec<DVec2>,
    pub emitters: Vec<EmitterSpec>,
}

impl Scenario {
    /// The built-in arena: outer walls, ground, two floors and a few ledges
    pub fn reference() -> Self {
        let rects = vec![
            // outer walls
            RectSpec::block(-1.0, -1.0, 64.0, 1.0),
            RectSpec::block(-1.0, 0.0, 1.0, 36.0),
            // ground
            RectSpec::block(0.0, 33.0, 64.0, 3.0),
            // floor 1
            RectSpec::block(0.0, 23.0, 50.0, 2.0),
            RectSpec::block(55.0, 23.0, 9.0, 2.0),
            RectSpec::block(52.0, 28.0, 3.0, 1.0),
            // floor 2
            RectSpec::block(0.0, 13.0, 9.0, 2.0),
            RectSpec::block(14.0, 13.0, 50.0, 2.0),
            RectSpec::block(9.0, 18.0, 3.0, 1.0),
            // ground ledges
            RectSpec::block(10.0, 29.0, 5.0, 1.0),
            RectSpec::block(15.0, 30.0, 5.0, 1.0),
            RectSpec::block(20.0, 29.0, 1.0, 4.0),
        ];

        Self {
            rects,
            spawns: vec![SPAWN_POINT],
            emitters: vec![
                EmitterSpec {
                    pos: DVec2::new(-5.0, 20.0),
                    interval: 1.0,
                },
                EmitterSpec {
                    pos: DVec2::new(65.0, 31.0),
                    interval: 1.0,
                },
            ],
        }
    }

    /// Validate and build the initial simulation state
    pub fn build(&self) -> Result<SimState, ScenarioError> {
        if self.spawns.is_empty() {
            return Err(ScenarioError::NoCharacters);
        }

        let mut state = SimState::empty();

        for (index, rect) in self.rects.iter().enumerate() {
            rect.validate(index)?;
            state.obstacles.extend(rect.tiles());
        }

        for (index, spawn) in self.spawns.iter().enumerate() {
            if !spawn.is_finite() {
                return Err(ScenarioError::InvalidSpawn { index });
            }
            state.characters.push(Character::new(*spawn));
        }

        for (index, spec) in self.emitters.iter().enumerate() {
            if !spec.pos.is_finite() {
                return Err(ScenarioError::InvalidEmitter {
                    index,
                    reason: "position is not finite",
                });
            }
            if !(spec.interval.is_finite() && spec.interval > 0.0) {
                return Err(ScenarioError::InvalidEmitter {
                    index,
                    reason: "interval must be positive",
                });
            }
            state.emitters.push(Emitter::new(spec.pos, spec.interval));
        }

        log::info!(
            "Scenario built: {} obstacles, {} characters, {} emitters",
            state.obstacles.len(),
            state.characters.len(),
            state.emitters.len()
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_builds() {
        let state = Scenario::reference().build().expect("reference scenario is valid");
        assert_eq!(state.characters.len(), 1);
        assert_eq!(state.characters[0].body.pos, SPAWN_POINT);
        assert_eq!(state.emitters.len(), 2);
        // Sum of all rect areas, one unit tile each
        let expected = 64 + 36 + 192 + 100 + 18 + 3 + 18 + 100 + 3 + 5 + 5 + 4;
        assert_eq!(state.obstacles.len(), expected);
        assert!(state.obstacles.iter().all(|o| o.size == DVec2::ONE));
    }

    #[test]
    fn test_partial_tiles() {
        let rect = RectSpec::block(0.0, 0.0, 2.5, 1.0);
        let tiles: Vec<_> = rect.tiles().collect();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[2].pos, DVec2::new(2.0, 0.0));
        assert_eq!(tiles[2].size, DVec2::new(0.5, 1.0));
    }

    #[test]
    fn test_empty_rect_has_no_tiles() {
        let rect = RectSpec::block(0.0, 0.0, 0.0, 4.0);
        assert_eq!(rect.tiles().count(), 0);
    }

    #[test]
    fn test_rejects_negative_size() {
        let scenario = Scenario {
            rects: vec![RectSpec::block(0.0, 0.0, -1.0, 1.0)],
            spawns: vec![SPAWN_POINT],
            emitters: Vec::new(),
        };
        assert!(matches!(
            scenario.build(),
            Err(ScenarioError::InvalidRectSize { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_nan_size() {
        let scenario = Scenario {
            rects: vec![RectSpec::block(0.0, 0.0, 1.0, f64::NAN)],
            spawns: vec![SPAWN_POINT],
            emitters: Vec::new(),
        };
        assert!(scenario.build().is_err());
    }

    #[test]
    fn test_rejects_huge_rect() {
        let scenario = Scenario {
            rects: vec![
                RectSpec::block(0.0, 0.0, 64.0, 1.0),
                RectSpec::block(0.0, 0.0, 1e12, 1.0),
            ],
            spawns: vec![SPAWN_POINT],
            emitters: Vec::new(),
        };
        assert!(matches!(
            scenario.build(),
            Err(ScenarioError::RectTooLarge { index: 1, .. })
        ));

        let edge = Scenario {
            rects: vec![RectSpec::block(0.0, 0.0, MAX_RECT_EXTENT, 1.0)],
            spawns: vec![SPAWN_POINT],
            emitters: Vec::new(),
        };
        assert!(edge.build().is_ok());
    }

    #[test]
    fn test_rejects_missing_characters() {
        let scenario = Scenario::default();
        assert_eq!(scenario.build(), Err(ScenarioError::NoCharacters));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let mut scenario = Scenario::reference();
        scenario.emitters[1].interval = 0.0;
        assert!(matches!(
            scenario.build(),
            Err(ScenarioError::InvalidEmitter { index: 1, .. })
        ));
    }
}
