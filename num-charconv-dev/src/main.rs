//! Regenerates the lookup tables under `num-charconv/src/ryu`.
//!
//! Usage: `cargo run -p num-charconv-dev [OUTPUT_DIR]`. Requires `rustfmt`
//! on the `PATH`.

mod emit;
mod tables;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use proc_macro2::TokenStream;

const HEADER: &str = "// This file is generated by num-charconv-dev. Do not edit by hand.\n\n";

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = match env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("../num-charconv/src/ryu"),
    };
    if !out_dir.is_dir() {
        bail!("output directory {} does not exist", out_dir.display());
    }

    let d2s = tables::D2sTables::compute();
    info!(
        "d2s: {} inverse and {} positive powers of five",
        d2s.pow5_inv_split.len(),
        d2s.pow5_split.len()
    );
    write_table(&out_dir.join("d2s_full_table.rs"), emit::d2s_full_table(&d2s))?;

    let d2fixed = tables::D2fixedTables::compute()?;
    info!(
        "d2fixed: {} positive and {} negative power-of-ten entries",
        d2fixed.pow10_split.len(),
        d2fixed.pow10_split_2.len()
    );
    write_table(
        &out_dir.join("d2fixed_full_table.rs"),
        emit::d2fixed_full_table(&d2fixed),
    )?;

    Ok(())
}

fn write_table(path: &Path, tokens: TokenStream) -> Result<()> {
    let contents = format!("{}{}\n", HEADER, tokens);
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {}", path.display());

    let status = Command::new("rustfmt")
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .status()
        .context("failed to run rustfmt")?;
    if !status.success() {
        bail!("rustfmt failed on {}: {}", path.display(), status);
    }
    info!("generated {}", path.display());
    Ok(())
}
