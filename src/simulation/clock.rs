//! Step counter driving the trail sampling gate

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationClock {
    steps: u64, // executed steps
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one executed step
    pub fn advance(&mut self) {
        self.steps += 1;
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// True on every `stride`-th step. `stride` must be >= 1
    pub fn is_sampling_step(&self, stride: u64) -> bool {
        self.steps % stride == 0
    }
}
