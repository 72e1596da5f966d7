//! Collision detection and response against axis-aligned geometry
//!
//! Penetration is resolved by reverting one axis to the previous tick's
//! value. The axis is picked from where the entity was *before* it moved:
//! the current, already-overlapping position cannot tell which side it
//! came from.
//!
//! Corner approaches (both axes flagged) are left unresolved. This is a
//! known coarse-collision limitation, not something to patch here.

use glam::DVec2;

use super::body::Body;
use super::state::{Character, Obstacle, Projectile};
use crate::consts::*;

/// Which sides of an obstacle a box was clear of on the previous tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactSides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl ContactSides {
    /// Classify the approach of a box with half-extents `half` at `prev`
    pub fn classify(prev: DVec2, half: DVec2, o: &Obstacle) -> Self {
        let max = o.max();
        Self {
            left: prev.x + half.x < o.pos.x,
            right: prev.x - half.x > max.x,
            top: prev.y + half.y < o.pos.y,
            bottom: prev.y - half.y > max.y,
        }
    }

    #[inline]
    fn horizontal(&self) -> bool {
        self.left || self.right
    }

    #[inline]
    fn vertical(&self) -> bool {
        self.top || self.bottom
    }
}

/// Outcome of resolving one box against one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Hit a wall from the left or right; x reverted
    Side,
    /// Hit a floor (`from_top`) or ceiling; y reverted
    Vertical { from_top: bool },
    /// Overlap with both or neither axis flagged; no correction
    Unresolved,
}

/// Box/obstacle overlap test (touching edges count as overlap)
#[inline]
pub fn overlaps(center: DVec2, half: DVec2, o: &Obstacle) -> bool {
    let max = o.max();
    !(center.x + half.x < o.pos.x
        || center.x - half.x > max.x
        || center.y + half.y < o.pos.y
        || center.y - half.y > max.y)
}

/// Resolve a body against a single obstacle
///
/// Returns `None` when there is no overlap.
pub fn resolve_body(body: &mut Body, prev: DVec2, half: DVec2, o: &Obstacle) -> Option<Contact> {
    if !overlaps(body.pos, half, o) {
        return None;
    }

    let sides = ContactSides::classify(prev, half, o);
    let contact = if sides.horizontal() && !sides.vertical() {
        body.pos.x = prev.x;
        body.vel.x = 0.0;
        Contact::Side
    } else if sides.vertical() && !sides.horizontal() {
        body.pos.y = prev.y;
        body.vel.y = 0.0;
        Contact::Vertical { from_top: sides.top }
    } else {
        log::debug!(
            "unresolved overlap at ({:.2}, {:.2}) vs obstacle ({:.0}, {:.0})",
            body.pos.x,
            body.pos.y,
            o.pos.x,
            o.pos.y
        );
        Contact::Unresolved
    };
    Some(contact)
}

/// Resolve a projectile against the level
///
/// Returns true if it touched any obstacle. Vertical bounces skid (vx damped).
pub fn resolve_projectile(p: &mut Projectile, prev: DVec2, obstacles: &[Obstacle]) -> bool {
    let half = DVec2::splat(PROJECTILE_HALF_EXTENT);
    let mut touched = false;
    for o in obstacles {
        match resolve_body(&mut p.body, prev, half, o) {
            None => {}
            Some(Contact::Vertical { .. }) => {
                p.body.vel.x *= PROJECTILE_SKID;
                touched = true;
            }
            Some(_) => touched = true,
        }
    }
    touched
}

/// Resolve a character against the level and recompute its ground flag
pub fn resolve_character(c: &mut Character, prev: DVec2, obstacles: &[Obstacle]) {
    let half = c.half_extents();
    for o in obstacles {
        if let Some(Contact::Vertical { from_top: true }) = resolve_body(&mut c.body, prev, half, o) {
            c.on_ground = true;
        }
    }
}

/// Push apart overlapping characters
///
/// Both are reverted to `prev` and given opposite unit velocities along the
/// line between their current (overlapping) positions.
pub fn separate_characters(characters: &mut [Character], prev: &[DVec2]) {
    for i in 0..characters.len() {
        for j in (i + 1)..characters.len() {
            let delta = characters[i].body.pos - characters[j].body.pos;
            if delta.length() >= CHARACTER_SEPARATION {
                continue;
            }
            let dir = delta.try_normalize().unwrap_or(DVec2::X);

            characters[i].body.pos = prev[i];
            characters[j].body.pos = prev[j];
            characters[i].body.vel = dir;
            characters[j].body.vel = -dir;
        }
    }
}
