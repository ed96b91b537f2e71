//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run metrics for the simulator. It provides:
//! 1. **Cycles:** Instructions fetched and instructions retired.
//! 2. **Instruction mix:** Counts by class (nop, move, alu, store, halt).
//! 3. **Flags:** How often an arithmetic result set the zero flag.

use serde::Serialize;
use std::time::Instant;

use crate::isa::opcodes::Opcode;

/// Per-run statistics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Instructions fetched, including one that faulted.
    pub cycles: u64,
    /// Instructions that completed.
    pub instructions_retired: u64,

    /// Count of `nop` instructions retired.
    pub inst_nop: u64,
    /// Count of `mov` instructions retired.
    pub inst_move: u64,
    /// Count of `add`/`sub` instructions retired.
    pub inst_alu: u64,
    /// Count of `store` instructions retired.
    pub inst_store: u64,
    /// Count of `hlt` instructions retired.
    pub inst_halt: u64,

    /// Arithmetic results that set the zero flag.
    pub zero_results: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_nop: 0,
            inst_move: 0,
            inst_alu: 0,
            inst_store: 0,
            inst_halt: 0,
            zero_results: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix"];

/// Returns true if `name` is one of [`STATS_SECTIONS`].
pub fn is_stats_section(name: &str) -> bool {
    STATS_SECTIONS.contains(&name)
}

impl SimStats {
    /// Records one retired instruction of class `op`.
    pub const fn retire(&mut self, op: Opcode) {
        self.instructions_retired += 1;
        match op {
            Opcode::Nop => self.inst_nop += 1,
            Opcode::Mov => self.inst_move += 1,
            Opcode::Add | Opcode::Sub => self.inst_alu += 1,
            Opcode::Store => self.inst_store += 1,
            Opcode::Hlt => self.inst_halt += 1,
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be `"summary"` or `"instruction_mix"`.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1);

        println!("\n==========================================================");
        println!("MINICPU SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("host_seconds             {seconds:.6} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("zero_results             {}", self.zero_results);
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let pct = |n: u64| (n as f64 / instr as f64) * 100.0;
            println!("INSTRUCTION MIX");
            println!("  op.nop                 {} ({:.2}%)", self.inst_nop, pct(self.inst_nop));
            println!("  op.move                {} ({:.2}%)", self.inst_move, pct(self.inst_move));
            println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
            println!("  op.halt                {} ({:.2}%)", self.inst_halt, pct(self.inst_halt));
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
