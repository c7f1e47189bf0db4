use anyhow::Context;
use std::fs;
use std::process::{Command, Stdio};

use crate::config::AtomConfig;

/// Runs `<atomizer> --atomized <input> -o <output>` in the config root and
/// checks the artifact was produced.
pub fn run(cfg: &AtomConfig) -> anyhow::Result<()> {
    println!("[FAB] Running compiler atomization pass...");

    let output = cfg.output_path();
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    tracing::info!(
        "Launching {:?} --atomized {:?} -o {:?} in {:?}",
        cfg.atomizer,
        cfg.input,
        cfg.output,
        cfg.root
    );

    let status = Command::new(&cfg.atomizer)
        .args(&cfg.atomizer_args)
        .arg("--atomized")
        .arg(&cfg.input)
        .arg("-o")
        .arg(&cfg.output)
        .current_dir(&cfg.root)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to launch atomizer {}", cfg.atomizer.display()))?;

    if !status.success() {
        anyhow::bail!("Compiler failed: {}", status);
    }

    if !output.exists() {
        anyhow::bail!("Atomized output not found at {}", output.display());
    }

    println!("✅ Atomized structure stored at: {}", output.display());
    Ok(())
}
