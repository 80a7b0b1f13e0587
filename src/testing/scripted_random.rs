use std::collections::VecDeque;

use crate::ports::RandomSource;

/// `RandomSource` that replays a fixed script of draws and records every bound asked for.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
    fallback: Option<u32>,
    calls: Vec<u32>,
}

impl ScriptedRandom {
    /// Replay `values` in order; panics once they run out.
    pub fn new(values: Vec<u32>) -> Self {
        Self { values: values.into(), fallback: None, calls: Vec::new() }
    }

    /// Always draw 0: every eligible day is active (for frequency > 0) with one commit.
    pub fn zeros() -> Self {
        Self { values: VecDeque::new(), fallback: Some(0), calls: Vec::new() }
    }

    /// Upper bounds passed to `below`, in call order.
    pub fn calls(&self) -> &[u32] {
        &self.calls
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: u32) -> u32 {
        self.calls.push(upper);
        let value = self
            .values
            .pop_front()
            .or(self.fallback)
            .unwrap_or_else(|| panic!("random script exhausted at call {}", self.calls.len()));
        assert!(value < upper, "scripted draw {value} is out of range for below({upper})");
        value
    }
}
