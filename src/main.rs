use anyhow::{Context, Result};
use clap::Parser;
use rustvmm_gen::cli::{Cli, CliCommand, GenerateArgs, PrepareArgs};
use rustvmm_gen::{emit, kernel_source, parser};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Acquire kernel source and install headers; returns the temp working dir
fn run_prepare(args: &PrepareArgs) -> Result<PathBuf> {
    kernel_source::check_kernel_version(&args.version)?;

    let temp_dir = kernel_source::create_temp_dir(&args.version)?;
    let tarball = kernel_source::download_kernel(&args.version, &temp_dir)?;
    let src_dir = kernel_source::extract_kernel(&tarball, &temp_dir, &args.version)?;
    let installed = kernel_source::install_headers(&src_dir, args.arch, args.install_path.as_deref())?;

    println!("\nSuccessfully installed kernel headers to {}", installed.display());
    Ok(temp_dir)
}

/// Run the full pipeline: prepare, then parse -> serialize -> emit
fn run_generate(args: &GenerateArgs) -> Result<()> {
    let temp_dir = run_prepare(&args.prepare)?;
    let arch = args.prepare.arch;

    let header_path = temp_dir
        .join(arch.header_dir())
        .join("include/asm/unistd_64.h");
    let table = parser::parse_header(&header_path)?;

    fs::create_dir_all(&args.output_path).with_context(|| {
        format!("failed to create output dir {}", args.output_path.display())
    })?;

    // Output file is named after the Rust arch, not the kernel arch
    let output_file = args.output_path.join(arch.output_file_name());
    emit::emit(&table.sorted_literal(), &output_file, &emit::Rustfmt)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    match &args.command {
        CliCommand::Prepare(prepare) => {
            run_prepare(prepare)?;
        }
        CliCommand::GenerateSyscall(generate) => {
            run_generate(generate)?;
        }
    }
    Ok(())
}
