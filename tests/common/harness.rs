//! A small `TestContext` wrapper, following the shape of the teacher's
//! `tests/common/harness.rs`: build a `Cpu` from collaborators, initialize
//! it, then step it and inspect register state without every scenario
//! repeating that boilerplate.

use vr4300_core::{Cpu, cycle, pipeline_init};

pub struct TestContext {
    pub cpu: Cpu,
}

impl TestContext {
    /// Wraps an already-constructed `Cpu` and runs `pipeline_init` on it.
    pub fn new(mut cpu: Cpu) -> Self {
        pipeline_init(&mut cpu);
        Self { cpu }
    }

    /// Advances the pipeline by `n` ticks.
    pub fn step(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            cycle(&mut self.cpu);
        }
        self
    }

    pub fn reg(&self, idx: usize) -> u64 {
        self.cpu.regs.read(idx)
    }

    pub fn set_reg(&mut self, idx: usize, val: u64) -> &mut Self {
        self.cpu.regs.write(idx, val);
        self
    }
}
