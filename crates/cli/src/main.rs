//! minicpu simulator CLI.
//!
//! This binary provides a single entry point for running programs. It performs:
//! 1. **Run:** Execute a program image (or the built-in demo) and report the final state.
//! 2. **Disassemble:** Print a program image as mnemonics without executing it.

use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

use minicpu_core::common::constants::REPORT_ADDR;
use minicpu_core::config::Config;
use minicpu_core::isa::disasm;
use minicpu_core::sim::{self, Engine, Program};
use minicpu_core::stats::{STATS_SECTIONS, is_stats_section};
use minicpu_core::MachineState;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Minimal register-machine simulator",
    long_about = "Run a program image on the minicpu register machine.\n\nImages are flat files of 3-byte (opcode, dst, src_or_imm) records, or JSON arrays when the file ends in .json. With no file, the built-in demo program runs.\n\nExamples:\n  sim run\n  sim run -f program.bin --trace\n  sim run -f program.json --json\n  sim disasm -f program.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program and print the final machine state.
    Run {
        /// Program image to execute; defaults to the built-in demo.
        #[arg(short, long)]
        file: Option<String>,

        /// JSON configuration file (machine sizes, tracing).
        #[arg(short, long)]
        config: Option<String>,

        /// Log every dispatched instruction.
        #[arg(long)]
        trace: bool,

        /// Print the final state as JSON instead of the text report.
        #[arg(long)]
        json: bool,

        /// Statistics sections to print, comma-separated (summary, instruction_mix).
        /// All sections are printed when omitted.
        #[arg(long, value_delimiter = ',', value_parser = parse_section)]
        stats_sections: Vec<String>,
    },

    /// Disassemble a program without running it.
    Disasm {
        /// Program image; defaults to the built-in demo.
        #[arg(short, long)]
        file: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            json,
            stats_sections,
        } => cmd_run(
            file.as_deref(),
            config.as_deref(),
            trace,
            json,
            &stats_sections,
        ),
        Commands::Disasm { file } => {
            init_logging(false);
            let program = load_or_exit(file.as_deref());
            for line in disasm::disassemble_all(program.as_slice()) {
                println!("{line}");
            }
        }
    }
}

/// Installs the `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `trace` with instruction tracing on
/// and `info` without.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Accepts a statistics section name from the command line.
fn parse_section(name: &str) -> Result<String, String> {
    if is_stats_section(name) {
        Ok(name.to_string())
    } else {
        Err(format!(
            "unknown stats section '{name}' (expected one of: {})",
            STATS_SECTIONS.join(", ")
        ))
    }
}

/// Loads the program at `file`, or the demo program when `file` is `None`.
///
/// Exits the process with an error message if the program cannot be loaded.
fn load_or_exit(file: Option<&str>) -> Program {
    let Some(path) = file else {
        return sim::assemble_demo();
    };
    sim::load_program(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    })
}

/// Runs a program and reports the final state.
///
/// On a fault, prints the fault and the state dump and exits with code 1.
fn cmd_run(
    file: Option<&str>,
    config_path: Option<&str>,
    trace: bool,
    json: bool,
    stats_sections: &[String],
) {
    let config = match config_path {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    init_logging(trace || config.general.trace_instructions);
    if let Some(path) = config_path {
        tracing::info!(path, "loaded configuration");
    }

    let program = load_or_exit(file);
    let mut state = MachineState::from_config(&config);

    if !json {
        println!(
            "Configuration: {} registers, {} bytes memory, {} instructions",
            config.machine.register_count,
            config.machine.memory_size,
            program.len()
        );
        match file {
            Some(path) => println!("[*] Program: {path}"),
            None => println!("[*] Program: built-in demo"),
        }
    }

    let mut engine = Engine::new(&mut state, &program);
    let outcome = engine.run();
    let stats = engine.into_stats();

    match outcome {
        Ok(done) if json => {
            let report = serde_json::json!({
                "outcome": done,
                "state": state,
                "stats": stats,
            });
            println!("{report:#}");
        }
        Ok(done) => {
            println!("\n[*] Run {done}");
            println!("Registers:");
            state.regs.dump();
            println!("Z = {}", u8::from(state.zero_flag));
            println!("PC = {}", state.pc);
            if let Some(val) = state.mem(REPORT_ADDR) {
                println!("Memory[{REPORT_ADDR}] = {val}");
            }
            stats.print_sections(stats_sections);
        }
        Err(fault) => {
            if json {
                let report = serde_json::json!({
                    "fault": fault,
                    "state": state,
                    "stats": stats,
                });
                println!("{report:#}");
            } else {
                eprintln!("\n[!] FATAL FAULT: {fault}");
                state.dump_state();
                stats.print_sections(stats_sections);
            }
            process::exit(1);
        }
    }
}
