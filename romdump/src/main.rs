// romdump/src/main.rs

mod log;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use romio::prelude::*;
use romset::prelude::*;

#[derive(Parser)]
#[command(name = "romdump", version, about = "ROM set inspector", long_about = None)]
struct Cli {
    /// Errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Per-entry detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ROMs of a set directory
    List {
        /// ROM set directory
        dir: PathBuf,

        /// Include subdirectories as nested sets
        #[arg(long)]
        all: bool,
    },
    /// Hex-dump a ROM file
    Dump {
        /// ROM file
        file: PathBuf,

        /// First byte to dump
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Byte count; the rest of the file when omitted
        #[arg(short, long)]
        len: Option<usize>,
    },
    /// Find one ROM in a set by exact name
    Find {
        /// ROM set directory
        dir: PathBuf,

        /// Entry name, matched exactly
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LogLevel::Quiet
    } else if cli.verbose {
        log::LogLevel::Verbose
    } else {
        log::LogLevel::Normal
    };
    log::set_log_level(level);

    match cli.command {
        Commands::List { dir, all } => list(&dir, all),
        Commands::Dump { file, offset, len } => dump(&file, offset, len),
        Commands::Find { dir, name } => find(&dir, &name),
    }
}

fn list(dir: &Path, all: bool) -> anyhow::Result<()> {
    let set = if all {
        let mut set = RomSet::new(dir)?;
        set.load_all()?;
        set
    } else {
        open_rom_set(dir)?
    };

    log_info!(
        "{} entries in {}",
        set.entries().len(),
        set.path().display()
    );
    print!("{set}");

    if log::log_level() == log::LogLevel::Verbose {
        for entry in set.entries() {
            log_verbose!("{}", entry.path().display());
        }
    }
    Ok(())
}

fn dump(file: &Path, offset: u64, len: Option<usize>) -> anyhow::Result<()> {
    let rom = open_rom(file)?;
    let len = len.unwrap_or_else(|| rom.size().saturating_sub(offset as usize));
    let bytes = rom.read_n(offset, len)?;

    log_info!(
        "{} ({})",
        rom.name().bold(),
        pretty_bytes(rom.size() as u64)
    );
    print!("{}", HexDump::new(&bytes, offset));
    Ok(())
}

fn find(dir: &Path, name: &str) -> anyhow::Result<()> {
    let set = open_rom_set(dir)?;

    let Some(node) = set.find(name) else {
        log_normal!("{} {name}", "missing".red().bold());
        std::process::exit(1);
    };

    log_normal!("{} {}", "found".green().bold(), node.name());
    if let Some(rom) = node.as_file() {
        log_info!(
            "  {} ({})",
            rom.path().display(),
            pretty_bytes(rom.size() as u64)
        );
    }
    Ok(())
}
