use std::collections::VecDeque;

use crate::random::UniformSource;

/// Replays a fixed list of draws, in order.
pub struct ScriptedSource {
    draws: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        self.draws
            .pop_front()
            .expect("scripted source ran out of draws")
    }
}
