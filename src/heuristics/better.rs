//! Feature-weighted evaluation for the grid chase world

use crate::core::GameState;

use super::{nearest, Evaluator, Features};

/// Combines the game score with distances to adversaries, food and capsules.
///
/// The weights are tuning choices. The shape is what matters: stay away from
/// live adversaries, welcome scared ones, and drift towards food and capsules.
///
/// This deliberately departs from the classic Berkeley `betterEvaluationFunction`.
/// An adjacent adversary scores `+danger` only when every adversary is scared.
/// Distant live adversaries add their distance instead of nothing. A capsule
/// within reach adds `capsule_bonus` on top of the score rather than replacing it.
#[derive(Debug, Clone, Copy)]
pub struct BetterEvaluator {
    /// Swing applied when an adversary is adjacent
    pub danger: f64,
    /// Minimum scared timer at which distant adversaries stop counting as a threat
    pub scared_threshold: u32,
    /// Flat bonus for standing next to a capsule
    pub capsule_bonus: f64,
    /// Numerator of the reciprocal capsule distance term
    pub capsule_weight: f64,
}

impl Default for BetterEvaluator {
    fn default() -> Self {
        Self {
            danger: 999.0,
            scared_threshold: 10,
            capsule_bonus: 999.0,
            capsule_weight: 5.0,
        }
    }
}

impl BetterEvaluator {
    fn adversary_term(&self, distance: i32, timers: &[u32]) -> f64 {
        let all_scared = timers.iter().all(|&t| t > 0);
        let min_timer = timers.iter().copied().min().unwrap_or(0);

        if distance <= 1 {
            if all_scared {
                self.danger
            } else {
                -self.danger
            }
        } else if min_timer >= self.scared_threshold {
            self.danger
        } else {
            distance as f64
        }
    }
}

impl<S: GameState + Features> Evaluator<S> for BetterEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        let pos = state.controlled_position();
        let mut value = state.score();

        if let Some(distance) = nearest(pos, &state.adversary_positions()) {
            value += self.adversary_term(distance, &state.scared_timers());
        }

        if let Some(distance) = nearest(pos, &state.food_positions()) {
            value += 1.0 / distance.max(1) as f64;
        }

        if let Some(distance) = nearest(pos, &state.capsule_positions()) {
            value += if distance <= 1 {
                self.capsule_bonus
            } else {
                self.capsule_weight / distance as f64
            };
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::World;

    fn eval(layout: &str) -> f64 {
        BetterEvaluator::default().evaluate(&World::from_layout(layout).unwrap())
    }

    #[test]
    fn test_adjacent_adversary_is_penalised() {
        // score 0, adversary adjacent, food at distance 2
        let value = eval("%%%%%%/%PG_.%/%%%%%%");
        assert_eq!(value, -999.0 + 1.0 / 3.0);
    }

    #[test]
    fn test_distance_rewarded_when_adversaries_live() {
        let near = eval("%%%%%%%%/%P.__G_%/%%%%%%%%");
        let far = eval("%%%%%%%%/%P.___G%/%%%%%%%%");
        assert_eq!(near, 4.0 + 1.0);
        assert_eq!(far, 5.0 + 1.0);
        assert!(far > near);
    }

    #[test]
    fn test_scared_adversaries_are_welcome() {
        let mut world = World::from_layout("%%%%%%/%PG_.%/%%%%%%").unwrap();
        world.agents[1].scared_timer = 3;
        let value = BetterEvaluator::default().evaluate(&world);
        assert_eq!(value, 999.0 + 1.0 / 3.0);

        let mut world = World::from_layout("%%%%%%%%/%P.___G%/%%%%%%%%").unwrap();
        world.agents[1].scared_timer = 10;
        assert_eq!(BetterEvaluator::default().evaluate(&world), 999.0 + 1.0);
    }

    #[test]
    fn test_capsule_terms() {
        assert_eq!(eval("%%%%/%Po%/%%%%"), 999.0);
        assert_eq!(eval("%%%%%%%/%P___o%/%%%%%%%"), 5.0 / 4.0);
    }

    #[test]
    fn test_no_adversaries_or_food() {
        assert_eq!(eval("%%%/%P%/%%%"), 0.0);
    }
}
