//! MIPS teaching simulator CLI.
//!
//! This binary is the text front end of the simulator. It performs:
//! 1. **Run:** Load an assembly file, execute it (all at once or one instruction per Enter),
//!    then print output, registers, memory and the binary trace, or a JSON snapshot.
//! 2. **Encode:** Print the 32-bit encoding of a single instruction.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use mipsim_core::isa::{decode, encode};
use mipsim_core::{Config, Simulator, StepOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS subset teaching simulator",
    long_about = "Assemble and execute a MIPS-subset program, showing registers, memory, printed output and the 32-bit encoding of every executed instruction.\n\nExamples:\n  mipsim run programs/sum.asm\n  mipsim run programs/loop.asm --step\n  mipsim run programs/loop.asm --json --max-steps 1000\n  mipsim encode \"ADD $t0, $t1, $t2\""
)]
struct Cli {
    /// Log debug events, including one per executed instruction.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and execute an assembly file.
    Run {
        /// Assembly source file.
        file: PathBuf,

        /// Execute one instruction per Enter key press (`q` quits).
        #[arg(long)]
        step: bool,

        /// Stop after this many instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print the final state as a JSON snapshot.
        #[arg(long)]
        json: bool,

        /// Print execution statistics.
        #[arg(long)]
        stats: bool,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the 32-bit encoding of one instruction.
    Encode {
        /// Instruction text, e.g. "ADDI $t0, $zero, 5".
        instruction: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            file,
            step,
            max_steps,
            json,
            stats,
            config,
        } => cmd_run(&file, step, max_steps, json, stats, config.as_deref()),
        Commands::Encode { instruction } => cmd_encode(&instruction),
    }
}

/// Installs the log subscriber: `RUST_LOG` if set, else `warn` (`debug` with `--verbose`).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads `path` and runs it to completion, the step limit, or the first error.
///
/// On error, prints the failing instruction and the state reached, then exits with code 1.
fn cmd_run(
    path: &Path,
    step: bool,
    max_steps: Option<u64>,
    json: bool,
    stats: bool,
    config_path: Option<&Path>,
) {
    let mut config = match config_path {
        Some(p) => Config::from_file(p).unwrap_or_else(|e| {
            eprintln!("Error loading config {}: {e}", p.display());
            process::exit(1);
        }),
        None => Config::default(),
    };
    config.general.trace_instructions |= step;

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        process::exit(1);
    });

    let mut sim = Simulator::with_config(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        process::exit(1);
    });
    sim.load_source(&source);

    let result = if step {
        step_interactively(&mut sim, max_steps)
    } else {
        match max_steps {
            Some(max) => sim.run_for(max),
            None => sim.run(),
        }
    };

    let failed = result.is_err();
    if let Err(e) = result {
        error!(pc = sim.pc(), "execution stopped");
        eprintln!(
            "\n[!] {e} at instruction {}: {}",
            sim.pc(),
            sim.current_instruction().unwrap_or("<none>")
        );
    }

    if json {
        match serde_json::to_string_pretty(&sim.snapshot()) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error serializing snapshot: {e}"),
        }
    } else {
        print_state(&sim);
    }
    if stats {
        sim.stats().print();
    }
    if failed {
        process::exit(1);
    }
}

/// Executes one instruction per line read from stdin. Returns the number executed.
fn step_interactively(
    sim: &mut Simulator,
    max_steps: Option<u64>,
) -> mipsim_core::common::Result<u64> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut executed = 0;

    while max_steps.is_none_or(|max| executed < max) {
        let Some(next) = sim.current_instruction() else {
            break;
        };
        print!("[{:>4}] {next}  (Enter to step, q to quit) ", sim.pc());
        let _ = io::stdout().flush();

        match lines.next() {
            Some(Ok(line)) if line.trim() != "q" => {}
            _ => break,
        }
        let printed = sim.output().len();
        if sim.step()? == StepOutcome::Finished {
            break;
        }
        executed += 1;
        for line in &sim.output()[printed..] {
            println!("       > {line}");
        }
    }
    Ok(executed)
}

/// Prints output, registers, memory and binary trace as text.
fn print_state(sim: &Simulator) {
    println!("Output:");
    for line in sim.output() {
        println!("  {line}");
    }
    println!("\nRegisters:");
    println!("{}", sim.registers());
    println!("\nMemory:");
    if !sim.memory().is_empty() {
        println!("{}", sim.memory());
    }
    println!("\nBinary trace:");
    for bits in sim.trace() {
        println!("  {bits}");
    }
}

/// Prints the encoding of one instruction, or exits with code 1 if it does not decode.
fn cmd_encode(text: &str) {
    match decode(text) {
        Ok(inst) => {
            let encoding = encode(&inst);
            println!("{inst}");
            println!("{encoding}");
            println!("{}", encoding.grouped());
            println!("{:#010x}", encoding.word());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
