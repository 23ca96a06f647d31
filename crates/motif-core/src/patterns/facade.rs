//! Facade: one call that boots three unrelated subsystems.

use tracing::instrument;

use crate::{error::MotifResult, ports::Console};

#[derive(Debug, Default, Clone, Copy)]
pub struct Cpu;

impl Cpu {
    pub fn start(&self, console: &dyn Console) -> MotifResult<()> {
        console.write_line("CPU started")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Memory;

impl Memory {
    pub fn load(&self, console: &dyn Console) -> MotifResult<()> {
        console.write_line("Memory loaded")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HardDrive;

impl HardDrive {
    pub fn read(&self, console: &dyn Console) -> MotifResult<()> {
        console.write_line("Hard Drive read")
    }
}

/// Owns its subsystems by value and exposes a single entry point.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl ComputerFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// CPU, then memory, then disk. Stops at the first failed write.
    #[instrument(skip_all)]
    pub fn start_all(&self, console: &dyn Console) -> MotifResult<()> {
        self.cpu.start(console)?;
        self.memory.load(console)?;
        self.hard_drive.read(console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockConsole;
    use mockall::{Sequence, predicate::eq};

    fn expect_boot(console: &mut MockConsole, seq: &mut Sequence) {
        for line in ["CPU started", "Memory loaded", "Hard Drive read"] {
            console
                .expect_write_line()
                .with(eq(line))
                .times(1)
                .in_sequence(seq)
                .returning(|_| Ok(()));
        }
    }

    #[test]
    fn start_all_runs_subsystems_in_order() {
        let mut console = MockConsole::new();
        let mut seq = Sequence::new();
        expect_boot(&mut console, &mut seq);

        ComputerFacade::new().start_all(&console).unwrap();
    }

    #[test]
    fn repeated_calls_repeat_the_same_three_lines() {
        let mut console = MockConsole::new();
        let mut seq = Sequence::new();
        expect_boot(&mut console, &mut seq);
        expect_boot(&mut console, &mut seq);

        let facade = ComputerFacade::new();
        facade.start_all(&console).unwrap();
        facade.start_all(&console).unwrap();
    }
}
