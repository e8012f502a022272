//! Architecture name translation
//!
//! The kernel tree and the Rust ecosystem disagree on architecture names
//! (`arm64` vs `aarch64`, `riscv` vs `riscv64`). The mapping is static
//! configuration: header lookup uses the kernel name, the emitted file is
//! named after the Rust name.

use clap::ValueEnum;

/// Target architecture, named as the kernel source tree names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Arch {
    /// x86-64 (kernel `x86_64`, Rust `x86_64`)
    #[value(name = "x86_64")]
    X86_64,
    /// 64-bit ARM (kernel `arm64`, Rust `aarch64`)
    #[value(name = "arm64")]
    Arm64,
    /// 64-bit RISC-V (kernel `riscv`, Rust `riscv64`)
    #[value(name = "riscv")]
    Riscv,
}

impl Arch {
    /// Architecture name as used by the kernel build system (`ARCH=`)
    pub fn kernel_name(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Arm64 => "arm64",
            Arch::Riscv => "riscv",
        }
    }

    /// Architecture name as used by the Rust ecosystem; names the output file
    pub fn rust_name(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Arm64 => "aarch64",
            Arch::Riscv => "riscv64",
        }
    }

    /// Directory the installed headers live under, relative to the temp dir
    pub fn header_dir(&self) -> String {
        format!("{}_headers", self.kernel_name())
    }

    /// File name of the generated Rust source
    pub fn output_file_name(&self) -> String {
        format!("{}.rs", self.rust_name())
    }
}
