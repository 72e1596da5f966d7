//! Projectile behavior state machine
//!
//! Each behavior assigns the pre-integration acceleration from the
//! projectile's own clock. Integration is the shared [`Body`] step.
//!
//! [`Body`]: super::body::Body

use glam::DVec2;

use super::state::{Behavior, Projectile};
use crate::consts::*;

impl Behavior {
    /// Acceleration for the given behavior clock, `None` for ballistic
    pub fn acceleration(self, clock: f64) -> Option<DVec2> {
        match self {
            Behavior::Ballistic => None,
            Behavior::ArcOscillate => {
                if clock > ARC_HALF_PERIOD {
                    Some(DVec2::new(30.0, -100.0))
                } else {
                    Some(DVec2::new(30.0, 100.0))
                }
            }
            Behavior::Lobbed => Some(DVec2::new(0.0, GRAVITY)),
            Behavior::DriftingBlocker => Some(DVec2::new(-20.0, 0.0)),
        }
    }
}

/// Run the behavior rule, integrate, and apply post-integration constraints
pub fn update_projectile(p: &mut Projectile, dt: f64) {
    if let Some(acc) = p.behavior.acceleration(p.clock) {
        p.body.acc = acc;
    }

    match p.behavior {
        Behavior::ArcOscillate => {
            if p.clock > ARC_PERIOD {
                p.clock = 0.0;
            }
            p.clock += dt;
        }
        Behavior::Lobbed => {
            p.clock += dt;
            if p.clock > LOB_LIFETIME {
                p.expired = true;
            }
        }
        Behavior::Ballistic | Behavior::DriftingBlocker => {}
    }

    p.body.integrate(dt);

    if p.behavior == Behavior::ArcOscillate {
        p.body.pos.y = p.body.pos.y.clamp(ARC_BAND_TOP, ARC_BAND_BOTTOM);
    }
}
