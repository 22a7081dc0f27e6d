//! Shared fixtures for unit tests across the mapgen submodules.
//! Provides a scripted random source so generation steps can be checked by hand.
//! It does not own production generation logic.

use std::collections::VecDeque;

use crate::config::MapConfig;
use crate::random::RandomSource;

/// Replays queued draws in order. When a queue runs dry it answers with the
/// midpoint of the requested range, which means "no jitter" and "go straight".
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    ints: VecDeque<i32>,
    floats: VecDeque<f32>,
    pub(crate) int_draws: usize,
    pub(crate) float_draws: usize,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub(crate) fn with_floats(mut self, floats: impl IntoIterator<Item = f32>) -> Self {
        self.floats.extend(floats);
        self
    }

    pub(crate) fn remaining_ints(&self) -> usize {
        self.ints.len()
    }

    pub(crate) fn remaining_floats(&self) -> usize {
        self.floats.len()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_float(&mut self, min: f32, max: f32) -> f32 {
        self.float_draws += 1;
        self.floats.pop_front().unwrap_or((min + max) / 2.0)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.int_draws += 1;
        self.ints.pop_front().unwrap_or((min + max) / 2)
    }

    fn reseed(&mut self, _seed: u64) {}

    fn randomize(&mut self) {}
}

/// Five floors, three columns, two paths; small enough to trace by hand.
pub(crate) fn small_config() -> MapConfig {
    MapConfig { height: 5, width: 3, paths: 2, ..MapConfig::default() }
}
