//! Fetch-Decode-Execute Engine.
//!
//! The engine drives one `MachineState` through one `Program`. It performs:
//! 1. **Fetch:** Reads the instruction at the program counter, or halts when the
//!    counter has reached the end of the program.
//! 2. **Decode:** Resolves the opcode and the meaning of each operand field.
//! 3. **Execute:** Validates every operand index, then applies the operation.
//!
//! There are no branch instructions, so a run dispatches at most `program.len()`
//! instructions. Adding any backward control transfer requires a cycle budget here.

use serde::Serialize;
use std::fmt;

use crate::common::data::Operand;
use crate::common::error::{Fault, FaultKind};
use crate::core::MachineState;
use crate::core::alu::{self, AluOp};
use crate::isa::decode::{Op, decode};
use crate::sim::program::Program;
use crate::stats::SimStats;

/// How a run ended without faulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A `hlt` instruction executed; the program counter points at it.
    Halted,
    /// The program counter reached the end of the program.
    RanOffEnd,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halted => write!(f, "halted"),
            Self::RanOffEnd => write!(f, "ran off end of program"),
        }
    }
}

/// Runs `program` against `state` from the first instruction.
///
/// Resets the program counter to zero, then executes until a `hlt`, the end of the
/// program, or a fault. The state is mutated in place.
///
/// # Errors
///
/// Returns a `Fault` carrying the offending program counter if an operand index is
/// out of range or an opcode is not in the instruction set. The state then reflects
/// the last instruction that completed.
///
/// # Examples
///
/// ```
/// use minicpu_core::{MachineState, Termination, execute};
/// use minicpu_core::sim::assemble_demo;
///
/// let mut state = MachineState::new();
/// let outcome = execute(&mut state, &assemble_demo());
/// assert_eq!(outcome, Ok(Termination::Halted));
/// assert_eq!(state.reg(0), Some(30));
/// assert_eq!(state.mem(100), Some(30));
/// ```
pub fn execute(state: &mut MachineState, program: &Program) -> Result<Termination, Fault> {
    state.pc = 0;
    Engine::new(state, program).run()
}

/// Execution engine borrowing one machine state and one program.
///
/// Unlike [`execute`], the engine starts from whatever program counter the state
/// already holds, which allows resuming or single-stepping.
#[derive(Debug)]
pub struct Engine<'a> {
    state: &'a mut MachineState,
    program: &'a Program,
    stats: SimStats,
    finished: Option<Termination>,
}

impl<'a> Engine<'a> {
    /// Creates an engine over `state` and `program`.
    pub fn new(state: &'a mut MachineState, program: &'a Program) -> Self {
        Self {
            state,
            program,
            stats: SimStats::default(),
            finished: None,
        }
    }

    /// Runs until the program halts, runs off the end, or faults.
    ///
    /// # Errors
    ///
    /// Returns the first `Fault` raised by [`Engine::step`].
    pub fn run(&mut self) -> Result<Termination, Fault> {
        loop {
            if let Some(done) = self.step()? {
                tracing::debug!(
                    pc = self.state.pc,
                    cycles = self.stats.cycles,
                    outcome = %done,
                    "run finished"
                );
                return Ok(done);
            }
        }
    }

    /// Executes one cycle.
    ///
    /// Returns `Ok(None)` while running and `Ok(Some(_))` once terminated. Stepping a
    /// terminated engine dispatches nothing and returns the same termination again.
    ///
    /// # Errors
    ///
    /// Returns a `Fault` if the instruction at the program counter cannot execute. The
    /// state is left exactly as before the step.
    pub fn step(&mut self) -> Result<Option<Termination>, Fault> {
        if let Some(done) = self.finished {
            return Ok(Some(done));
        }

        let pc = self.state.pc;
        let Some(&inst) = self.program.get(pc) else {
            self.finished = Some(Termination::RanOffEnd);
            return Ok(self.finished);
        };

        self.stats.cycles += 1;
        tracing::trace!(pc, inst = %inst, "dispatch");

        let op = decode(&inst).map_err(|kind| Self::fault(kind, pc))?;
        self.dispatch(op).map_err(|kind| Self::fault(kind, pc))?;
        self.stats.retire(op.opcode());

        if op == Op::Hlt {
            self.finished = Some(Termination::Halted);
            return Ok(self.finished);
        }

        self.state.pc += 1;
        Ok(None)
    }

    /// Applies a decoded operation.
    ///
    /// All operand indices are validated before anything is written.
    fn dispatch(&mut self, op: Op) -> Result<(), FaultKind> {
        let state = &mut *self.state;
        match op {
            Op::Nop | Op::Hlt => {}
            Op::Mov { dst, imm } => {
                state.regs.write(dst.index(), Operand::Dst, imm.val())?;
            }
            Op::Add { dst, src } | Op::Sub { dst, src } => {
                let alu_op = if matches!(op, Op::Add { .. }) {
                    AluOp::Add
                } else {
                    AluOp::Sub
                };
                let a = state.regs.read(dst.index(), Operand::Dst)?;
                let b = state.regs.read(src.index(), Operand::SrcOrImm)?;
                let res = alu::execute(alu_op, a, b);
                state.regs.write(dst.index(), Operand::Dst, res.value)?;
                state.zero_flag = res.zero;
                if res.zero {
                    self.stats.zero_results += 1;
                }
            }
            Op::Store { src, addr } => {
                let val = state.regs.read(src.index(), Operand::Dst)?;
                state.memory.write(addr.index(), Operand::SrcOrImm, val)?;
            }
        }
        Ok(())
    }

    fn fault(kind: FaultKind, pc: usize) -> Fault {
        tracing::warn!(pc, error = %kind, "execution fault");
        kind.at(pc)
    }

    /// The machine state being driven.
    pub const fn state(&self) -> &MachineState {
        &*self.state
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Consumes the engine and returns its statistics.
    pub const fn into_stats(self) -> SimStats {
        self.stats
    }

    /// How the run ended, or `None` while it is still running.
    pub const fn termination(&self) -> Option<Termination> {
        self.finished
    }
}
