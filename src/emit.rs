//! Generated-code emission
//!
//! Wraps the serialized syscall literal in the `make_syscall_table()`
//! template, writes it out, and runs rustfmt over the result. The formatter
//! sits behind a trait so tests can exercise the failure path without a
//! real subprocess.

use crate::error::{GenError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Capability to format a Rust source file in place
pub trait SourceFormatter {
    fn format(&self, path: &Path) -> Result<()>;
}

/// Production formatter: runs the `rustfmt` binary from PATH
#[derive(Debug, Default)]
pub struct Rustfmt;

impl SourceFormatter for Rustfmt {
    fn format(&self, path: &Path) -> Result<()> {
        // Synchronous, no timeout: a hung rustfmt hangs the pipeline
        let status = Command::new("rustfmt")
            .arg(path)
            .status()
            .map_err(|_| GenError::FormatFailure(path.to_path_buf()))?;
        if !status.success() {
            return Err(GenError::FormatFailure(path.to_path_buf()));
        }
        Ok(())
    }
}

/// Render the full source file around the spliced pair literals
fn render_template(literal: &str) -> String {
    format!(
        "use std::collections::HashMap;\n\
         pub(crate) fn make_syscall_table() -> HashMap<&'static str, i64> {{\n\
         \x20   vec![\n\
         \x20       {literal}\n\
         \x20   ].into_iter().collect()\n\
         }}\n"
    )
}

/// Write the templated table to `output_path` and format it.
///
/// The write happens first; a formatter failure is reported after the file
/// is already on disk, and the unformatted file is left in place.
pub fn emit(literal: &str, output_path: &Path, formatter: &dyn SourceFormatter) -> Result<()> {
    println!("Generating to: {}", output_path.display());

    let code = render_template(literal);
    fs::write(output_path, &code).map_err(|source| GenError::WriteFailure {
        path: output_path.to_path_buf(),
        source,
    })?;
    debug!(path = %output_path.display(), bytes = code.len(), "wrote syscall table");

    formatter.format(output_path)?;
    println!("Generation succeeded: {}", output_path.display());
    Ok(())
}
