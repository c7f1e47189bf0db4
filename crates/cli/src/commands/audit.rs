use anyhow::Context;
use fab_atom_history::trace;

use crate::config::AtomConfig;

/// Prints the collapse trace verbatim.
pub fn run(cfg: &AtomConfig) -> anyhow::Result<()> {
    let path = cfg.trace_path();
    println!("[FAB] Auditing collapse trace...");

    let text = trace::read_trace(&path)
        .with_context(|| format!("Failed to read collapse trace {}", path.display()))?;

    println!("\nCollapse Trace Log\n-------------------");
    println!("{}", text);
    Ok(())
}
