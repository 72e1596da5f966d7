//! Deterministic intent sources for headless runs
//!
//! Stands in for the keyboard layer: either replays a fixed script or
//! drives characters from a seeded RNG so that every run with the same
//! seed produces the same intent stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::{Intents, TickInput};

/// Chance per tick that a held control is re-rolled
const CHANGE_CHANCE: f64 = 0.05;

/// Produces one [`TickInput`] per tick
#[derive(Debug, Clone)]
pub enum Pilot {
    /// Cycles through a fixed list of intents, one entry per tick
    Script { steps: Vec<Intents>, cursor: usize },
    /// Seeded random controls that persist for a while before changing
    Random { rng: Pcg32, held: Vec<Intents> },
}

impl Pilot {
    pub fn scripted(steps: Vec<Intents>) -> Self {
        Pilot::Script { steps, cursor: 0 }
    }

    pub fn random(seed: u64, characters: usize) -> Self {
        Pilot::Random {
            rng: Pcg32::seed_from_u64(seed),
            held: vec![Intents::default(); characters],
        }
    }

    /// Intents for the next tick
    pub fn next_input(&mut self) -> TickInput {
        match self {
            Pilot::Script { steps, cursor } => {
                let intents = if steps.is_empty() {
                    Intents::default()
                } else {
                    let step = steps[*cursor % steps.len()];
                    *cursor += 1;
                    step
                };
                TickInput::single(intents)
            }
            Pilot::Random { rng, held } => {
                for intents in held.iter_mut() {
                    if rng.random_bool(CHANGE_CHANCE) {
                        *intents = roll_intents(rng);
                    }
                }
                TickInput {
                    intents: held.clone(),
                }
            }
        }
    }
}

fn roll_intents(rng: &mut Pcg32) -> Intents {
    let (move_left, move_right) = match rng.random_range(0..3) {
        0 => (true, false),
        1 => (false, true),
        _ => (false, false),
    };
    Intents {
        move_left,
        move_right,
        jump: rng.random_bool(0.3),
        crouch: rng.random_bool(0.1),
        aim_up: rng.random_bool(0.2),
        aim_down: rng.random_bool(0.2),
        fire: rng.random_bool(0.25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_cycles() {
        let jump = Intents {
            jump: true,
            ..Default::default()
        };
        let mut pilot = Pilot::scripted(vec![jump, Intents::default()]);
        assert_eq!(pilot.next_input().intents[0], jump);
        assert_eq!(pilot.next_input().intents[0], Intents::default());
        assert_eq!(pilot.next_input().intents[0], jump);
    }

    #[test]
    fn test_empty_script_is_idle() {
        let mut pilot = Pilot::scripted(Vec::new());
        assert_eq!(pilot.next_input().intents[0], Intents::default());
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = Pilot::random(42, 2);
        let mut b = Pilot::random(42, 2);
        for _ in 0..500 {
            assert_eq!(a.next_input(), b.next_input());
        }
    }

    #[test]
    fn test_random_eventually_moves() {
        let mut pilot = Pilot::random(7, 1);
        let moved = (0..2000).any(|_| {
            let input = pilot.next_input();
            input.intents[0].move_left || input.intents[0].move_right
        });
        assert!(moved);
    }
}
