use std::collections::VecDeque;

use combat::CombatRng;

/// Replays a fixed list of rolls, then keeps returning `fallback`.
/// Shuffles leave the slice untouched so pile order stays predictable.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    rolls: VecDeque<f64>,
    fallback: f64,
}

#[allow(unused)]
impl ScriptedRng {
    pub fn new(rolls: &[f64]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            fallback: 0.0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self {
            rolls: VecDeque::new(),
            fallback: value,
        }
    }
}

impl CombatRng for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(self.fallback)
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}
