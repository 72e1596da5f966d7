//! Projectile-vs-character damage, knockback and respawn

use super::state::{Behavior, Character, Projectile, SimEvent};
use crate::consts::*;

/// Apply one hit to a character; true if it died and respawned
pub fn apply_hit(c: &mut Character, behavior: Behavior) -> bool {
    c.health = (c.health - HIT_DAMAGE).max(0.0);
    if behavior == Behavior::DriftingBlocker {
        c.body.vel.x = KNOCKBACK_VX;
    }
    if c.health <= 0.0 {
        c.respawn();
        return true;
    }
    false
}

/// Check every damaging projectile against every character
///
/// A projectile hits at most one character (the first in order within
/// range) and is removed on contact. Non-damaging projectiles pass through.
pub fn resolve_damage(
    characters: &mut [Character],
    projectiles: &mut Vec<Projectile>,
    events: &mut Vec<SimEvent>,
) {
    projectiles.retain(|p| {
        if !p.damages_character {
            return true;
        }
        let hit = characters
            .iter()
            .position(|c| c.body.pos.distance(p.body.pos) < HIT_RADIUS);
        let Some(index) = hit else {
            return true;
        };

        let c = &mut characters[index];
        let respawned = apply_hit(c, p.behavior);
        events.push(SimEvent::CharacterHit {
            character: index,
            damage: HIT_DAMAGE,
            health: if respawned { 0.0 } else { c.health },
        });
        if respawned {
            log::debug!("character {index} killed, respawning");
            events.push(SimEvent::CharacterRespawned { character: index });
        }
        false
    });
}
