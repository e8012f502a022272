//! rustvmm-gen - Kernel syscall table generator for rust-vmm seccompiler
//!
//! This library derives, for a target architecture and kernel version, the
//! static `(name, number)` syscall table from installed kernel headers and
//! emits it as a formatted Rust source file.

pub mod arch;
pub mod cli;
pub mod emit;
pub mod error;
pub mod kernel_source;
pub mod parser;
pub mod table;
