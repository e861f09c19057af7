//! Cache simulator CLI.
//!
//! Loads a program image, builds the cache described by the flags (or a JSON
//! configuration file), and runs the machine until it halts. It prints:
//! 1. **Configuration:** The cache geometry and memory size in use.
//! 2. **Transfers:** One line per data movement, in order.
//! 3. **Summary:** `machine halted`, the instruction count, and cache statistics.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cachesim_core::Simulator;
use cachesim_core::common::SimError;
use cachesim_core::config::Config;
use cachesim_core::sim::loader;
use cachesim_core::sim::trace::StdoutTrace;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cache-fronted ISA simulator",
    long_about = "Run a machine-code program through a set-associative, write-back LRU cache.\n\nFlags override values from --config, which override the built-in defaults.\n\nExamples:\n  sim -f program.mc -b 4 -s 2 -a 2\n  sim -f program.mc --config cache.json -v"
)]
struct Cli {
    /// Program image: one decimal machine word per line.
    #[arg(short, long)]
    file: PathBuf,

    /// Words per cache block (power of two).
    #[arg(short = 'b', long)]
    block_size: Option<usize>,

    /// Number of cache sets (power of two).
    #[arg(short = 's', long)]
    sets: Option<usize>,

    /// Lines per set.
    #[arg(short = 'a', long)]
    ways: Option<usize>,

    /// Print the full cache after every access.
    #[arg(short, long)]
    verbose: bool,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backing memory capacity in words.
    #[arg(long)]
    memory_words: Option<usize>,

    /// Stop with an error after this many instructions.
    #[arg(long)]
    max_instructions: Option<u64>,

    /// Write dirty lines back to memory when the machine halts.
    #[arg(long)]
    flush: bool,

    /// Print pc, memory, and registers after the run.
    #[arg(long)]
    dump_state: bool,
}

impl Cli {
    /// Resolves the effective configuration: defaults, then the file, then flags.
    fn config(&self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };

        if let Some(words_per_block) = self.block_size {
            config.cache.words_per_block = words_per_block;
        }
        if let Some(sets) = self.sets {
            config.cache.sets = sets;
        }
        if let Some(ways) = self.ways {
            config.cache.ways = ways;
        }
        if let Some(words) = self.memory_words {
            config.memory.size_words = words;
        }
        if self.max_instructions.is_some() {
            config.general.max_instructions = self.max_instructions;
        }
        config.general.verbose |= self.verbose;
        config.general.flush_on_halt |= self.flush;

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the program, runs it to completion, and prints the results.
fn run(cli: &Cli) -> Result<(), SimError> {
    let config = cli.config()?;
    let image = loader::load_image(&cli.file)?;
    debug!(?config, "effective configuration");

    println!(
        "Configuration: {} set(s), {} way(s), {} word(s) per block, {} words of memory",
        config.cache.sets, config.cache.ways, config.cache.words_per_block, config.memory.size_words
    );
    println!("[*] Program: {} ({} words)", cli.file.display(), image.len());

    let sink = StdoutTrace::stdout(config.general.verbose);
    let mut sim = Simulator::with_sink(&config, &image, sink)?;
    if config.general.verbose {
        println!("{}", sim.mem.cache());
    }

    let stats = match sim.run() {
        Ok(stats) => stats,
        Err(e) => {
            if cli.dump_state {
                println!("{}", sim.dump_state());
            }
            sim.stats().print();
            return Err(e);
        }
    };

    println!("machine halted");
    println!("total of {} instructions executed", stats.instructions);
    if cli.dump_state {
        println!("final state of machine:");
        println!("{}", sim.dump_state());
    }
    stats.print();
    Ok(())
}
