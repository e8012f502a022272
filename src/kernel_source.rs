//! Kernel source acquisition
//!
//! The `prepare` flow: validate the requested version, stage a per-version
//! working directory under the system temp dir, download the tarball from
//! cdn.kernel.org, unpack it, and run the kernel's own `headers_install`
//! target for the requested architecture. Everything here is orchestration
//! around external tools (`tar`, `make`); failures carry enough context to
//! point at the step that broke.

use crate::arch::Arch;
use anyhow::{bail, ensure, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;
use tracing::{debug, info};

const KERNEL_CDN: &str = "https://cdn.kernel.org/pub/linux/kernel";

/// Validate a kernel version string of the form `MAJOR.MINOR[.PATCH]`
pub fn check_kernel_version(version: &str) -> Result<()> {
    static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_PATTERN
        .get_or_init(|| Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("version pattern is valid"));
    if !re.is_match(version) {
        bail!("invalid kernel version: {version} (expected e.g. 6.12.8)");
    }
    Ok(())
}

/// Per-version working directory under the system temp dir.
///
/// Deterministic naming so `generate-syscall` finds the headers a previous
/// `prepare` installed, and so downloads are reused across runs.
pub fn create_temp_dir(version: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("rustvmm-gen-{version}"));
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create temp dir {}", dir.display()))?;
    Ok(dir)
}

/// Download `linux-<version>.tar.xz` into `temp_dir`, reusing a cached copy
pub fn download_kernel(version: &str, temp_dir: &Path) -> Result<PathBuf> {
    let tarball = temp_dir.join(format!("linux-{version}.tar.xz"));
    if tarball.exists() {
        info!(tarball = %tarball.display(), "tarball already downloaded");
        return Ok(tarball);
    }

    let major = version
        .split('.')
        .next()
        .context("kernel version has no major component")?;
    let url = format!("{KERNEL_CDN}/v{major}.x/linux-{version}.tar.xz");
    println!("Downloading {url}");

    let response = reqwest::blocking::get(&url)
        .with_context(|| format!("failed to download {url}"))?
        .error_for_status()
        .with_context(|| format!("kernel.org rejected {url}"))?;
    let bytes = response
        .bytes()
        .context("failed to read kernel tarball body")?;
    fs::write(&tarball, &bytes)
        .with_context(|| format!("failed to save tarball to {}", tarball.display()))?;

    debug!(bytes = bytes.len(), "kernel tarball saved");
    Ok(tarball)
}

/// Unpack the tarball into `temp_dir`, returning the kernel source dir
pub fn extract_kernel(tarball: &Path, temp_dir: &Path, version: &str) -> Result<PathBuf> {
    let src_dir = temp_dir.join(format!("linux-{version}"));
    if src_dir.join("Makefile").exists() {
        info!(src = %src_dir.display(), "kernel source already extracted");
        return Ok(src_dir);
    }

    println!("Extracting {}", tarball.display());
    let status = Command::new("tar")
        .arg("-xf")
        .arg(tarball)
        .arg("-C")
        .arg(temp_dir)
        .status()
        .context("failed to run tar")?;
    ensure!(status.success(), "tar failed to extract {}", tarball.display());
    ensure!(
        src_dir.is_dir(),
        "tarball did not contain linux-{version}"
    );
    Ok(src_dir)
}

/// Run `make headers_install` for `arch`, returning the install directory.
///
/// Defaults to `<temp_dir>/<kernel_arch>_headers`, the layout the syscall
/// generation step expects.
pub fn install_headers(src_dir: &Path, arch: Arch, install_path: Option<&Path>) -> Result<PathBuf> {
    let default_dest = src_dir
        .parent()
        .context("kernel source dir has no parent")?
        .join(arch.header_dir());
    let dest = install_path.map(Path::to_path_buf).unwrap_or(default_dest);

    println!(
        "Installing {} headers to {}",
        arch.kernel_name(),
        dest.display()
    );
    let status = Command::new("make")
        .arg("-C")
        .arg(src_dir)
        .arg("headers_install")
        .arg(format!("ARCH={}", arch.kernel_name()))
        .arg(format!("INSTALL_HDR_PATH={}", dest.display()))
        .status()
        .context("failed to run make headers_install")?;
    ensure!(
        status.success(),
        "make headers_install failed for ARCH={}",
        arch.kernel_name()
    );
    Ok(dest)
}
