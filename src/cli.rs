//! CLI argument parsing for rustvmm-gen

use crate::arch::Arch;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rustvmm-gen")]
#[command(version)]
#[command(about = "Generate syscall tables for rust-vmm seccompiler from kernel headers", long_about = None)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Download kernel source and install architecture headers
    Prepare(PrepareArgs),
    /// Prepare headers, then generate the syscall table source file
    GenerateSyscall(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Target architecture
    #[arg(long, value_enum)]
    pub arch: Arch,

    /// Kernel version (e.g. 6.12.8)
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Header installation directory (default: <tempdir>/<arch>_headers)
    #[arg(long, value_name = "DIR")]
    pub install_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub prepare: PrepareArgs,

    /// Output directory for the generated <arch>.rs file (default: current)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_path: PathBuf,
}
