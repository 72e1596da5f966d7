//! Shared Newtonian body and its integration step
//!
//! Every moving entity embeds a [`Body`]. Entity-specific rules set
//! `acc` first, then call [`Body::integrate`] (or [`Body::integrate_with_drag`]).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position, velocity and acceleration with quadratic drag
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Input acceleration before integration, effective acceleration after
    pub acc: DVec2,
    /// Quadratic drag coefficient (non-negative)
    pub friction: f64,
}

impl Body {
    pub fn new(pos: DVec2, friction: f64) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            acc: DVec2::ZERO,
            friction,
        }
    }

    /// Drag-adjusted acceleration for a given drag coefficient
    ///
    /// Zero velocity yields zero drag.
    #[inline]
    pub fn effective_acceleration(&self, friction: f64) -> DVec2 {
        self.acc - self.vel * self.vel.length() * friction
    }

    /// Semi-implicit step using the body's own friction
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        self.integrate_with_drag(self.friction, dt);
    }

    /// Semi-implicit step with an overridden drag coefficient
    pub fn integrate_with_drag(&mut self, friction: f64, dt: f64) {
        let acc = self.effective_acceleration(friction);
        let vel = self.vel + acc * dt;
        self.pos += vel * dt + acc * dt * dt * 0.5;
        self.vel = vel;
        self.acc = acc;
        debug_assert!(self.is_finite(), "non-finite body after integration: {self:?}");
    }

    /// All components finite
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.acc.is_finite()
    }
}
