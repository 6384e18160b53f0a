//! Simulator: owns the CPU and the loaded program side-by-side.
//!
//! This is the engine-facing API drivers use. It performs:
//! 1. **Loading:** Replaces all state with a freshly assembled program.
//! 2. **Stepping:** Fetches, decodes, executes and encodes one instruction per `step`.
//! 3. **Observation:** Exposes registers, memory, output log, binary trace and stats.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::common::{Register, Result};
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::{decode, encode};
use crate::sim::loader::Program;
use crate::sim::snapshot::{RegisterSnapshot, Snapshot};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Result of a successful `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One instruction was executed.
    Executed,
    /// The PC is past the last instruction; nothing was executed.
    Finished,
}

/// Top-level simulator: CPU architectural state + program + logs.
///
/// Each instance is fully independent; nothing is shared between simulators.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, PC).
    pub cpu: Cpu,
    program: Program,
    output: Vec<String>,
    trace: Vec<String>,
    stats: SimStats,
    config: Config,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    /// Creates an empty simulator with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(Cpu::default(), Config::default())
    }

    /// Creates an empty simulator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRegister`](crate::common::SimError::UnknownRegister)
    /// if the configured MULT destination is not a register name.
    pub fn with_config(config: Config) -> Result<Self> {
        let cpu = Cpu::new(&config)?;
        Ok(Self::from_parts(cpu, config))
    }

    fn from_parts(cpu: Cpu, config: Config) -> Self {
        Self {
            cpu,
            program: Program::default(),
            output: Vec::new(),
            trace: Vec::new(),
            stats: SimStats::default(),
            config,
        }
    }

    /// Replaces all state with a program assembled from `lines`.
    ///
    /// Registers, memory, output, trace and statistics from any earlier program
    /// are discarded, and the PC starts at 0.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();
        self.program = Program::assemble(lines);
        info!(
            instructions = self.program.len(),
            labels = self.program.labels().len(),
            strings = self.program.strings().len(),
            "program loaded"
        );
    }

    /// Loads a whole source text, one instruction per line.
    pub fn load_source(&mut self, source: &str) {
        self.load(source.lines());
    }

    /// Returns the simulator to its empty initial state. Configuration is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.program = Program::default();
        self.output.clear();
        self.trace.clear();
        self.stats = SimStats::default();
        info!("simulator reset");
    }

    /// Executes the instruction at the PC.
    ///
    /// Returns [`StepOutcome::Finished`] without touching state when the PC is
    /// past the end of the program.
    ///
    /// # Errors
    ///
    /// Any decode or execution error of the instruction at the PC. State is left
    /// as it was before the call, so the failure can be inspected.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let pc = self.cpu.pc;
        let Some(text) = self.program.get(pc) else {
            return Ok(StepOutcome::Finished);
        };

        let retired = decode(text)
            .and_then(|inst| {
                let retired = self.cpu.execute(&inst, &self.program)?;
                Ok((inst, retired))
            })
            .inspect_err(|error| warn!(pc, instruction = text, %error, "step failed"));
        let (inst, retired) = retired?;

        let encoding = encode(&inst);
        if self.config.general.trace_instructions {
            debug!(pc, instruction = text, bits = %encoding, "executed");
        }
        if let Some(line) = retired.output {
            if self.config.general.echo_output {
                println!("{line}");
            }
            self.output.push(line);
        }
        self.trace.push(encoding.bits());
        self.stats.record(inst.class(), retired.flow);
        self.cpu.advance(retired.flow);
        Ok(StepOutcome::Executed)
    }

    /// Steps until the program finishes. Returns how many instructions ran.
    ///
    /// There is no iteration cap: a program that never reaches its end or a
    /// `HALT` runs forever. Use [`Simulator::run_for`] for a bounded run.
    ///
    /// # Errors
    ///
    /// The first step error; instructions executed before it stay committed.
    pub fn run(&mut self) -> Result<u64> {
        let mut executed = 0;
        while self.step()? == StepOutcome::Executed {
            executed += 1;
        }
        info!(executed, pc = self.cpu.pc, "run finished");
        Ok(executed)
    }

    /// Steps until the program finishes or `max_steps` instructions have run.
    /// Returns how many instructions ran.
    ///
    /// # Errors
    ///
    /// The first step error; instructions executed before it stay committed.
    pub fn run_for(&mut self, max_steps: u64) -> Result<u64> {
        let mut executed = 0;
        while executed < max_steps && self.step()? == StepOutcome::Executed {
            executed += 1;
        }
        Ok(executed)
    }

    /// Index of the next instruction to execute.
    pub const fn pc(&self) -> usize {
        self.cpu.pc
    }

    /// Whether the PC is past the last instruction.
    pub fn is_finished(&self) -> bool {
        self.cpu.pc >= self.program.len()
    }

    /// Text of the instruction the next `step` will execute.
    pub fn current_instruction(&self) -> Option<&str> {
        self.program.get(self.cpu.pc)
    }

    /// The loaded program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Normalized instruction list of the loaded program.
    pub fn instructions(&self) -> &[String] {
        self.program.instructions()
    }

    /// Label table of the loaded program.
    pub const fn labels(&self) -> &BTreeMap<String, usize> {
        self.program.labels()
    }

    /// String constants of the loaded program.
    pub const fn strings(&self) -> &BTreeMap<String, String> {
        self.program.strings()
    }

    /// Current register values.
    pub fn registers(&self) -> RegisterSnapshot {
        RegisterSnapshot::capture(&self.cpu.regs)
    }

    /// Value of one register by assembly name.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownRegister`](crate::common::SimError::UnknownRegister)
    /// for a name outside the 32 canonical ones.
    pub fn register(&self, name: &str) -> Result<i64> {
        self.cpu.regs.read_named(name)
    }

    /// Value of one register.
    pub const fn read(&self, reg: Register) -> i64 {
        self.cpu.regs.read(reg)
    }

    /// Current data memory.
    pub const fn memory(&self) -> &Memory {
        &self.cpu.memory
    }

    /// Lines emitted by `PRINT`/`PRINTS`, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// 32-character encodings of executed instructions, in order.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Execution statistics since the last load or reset.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Captures the complete observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.cpu.pc,
            finished: self.is_finished(),
            registers: self.registers(),
            memory: self.cpu.memory.snapshot(),
            output: self.output.clone(),
            trace: self.trace.clone(),
            stats: self.stats.clone(),
        }
    }
}
