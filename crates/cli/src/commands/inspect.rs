use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use fab_atom::{VerificationReport, Verifier};
use fab_atom_history::{trace, verify_file};
use std::fs;
use std::path::Path;

use crate::config::AtomConfig;

pub fn run(cfg: &AtomConfig) -> anyhow::Result<()> {
    println!("\nAtomization Status Report");
    println!("-------------------------");

    println!("{}\n", status_table(cfg));
    Ok(())
}

/// One row per artifact: FOUND / MISSING / CORRUPT / ERROR.
pub fn status_table(cfg: &AtomConfig) -> Table {
    let (h_path, t_path, o_path) = (cfg.history_path(), cfg.trace_path(), cfg.output_path());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["File", "Status", "Details"]);

    // 1. Mutation history
    if h_path.exists() {
        match verify_file(&h_path, &Verifier::new(cfg.policy)) {
            Ok(outcome) => match outcome.report {
                VerificationReport::Verified { node_count } => {
                    table.add_row(vec![
                        "History".to_string(),
                        "FOUND".to_string(),
                        format!("{} nodes, verified", node_count),
                    ]);
                }
                VerificationReport::Failed { violations } => {
                    table.add_row(vec![
                        "History".to_string(),
                        "CORRUPT".to_string(),
                        format!(
                            "{} records, {} violation(s)",
                            outcome.record_count,
                            violations.len()
                        ),
                    ]);
                }
            },
            // Present but unreadable is an I/O problem; anything else means
            // the bytes themselves are bad.
            Err(e) => {
                let status = if e.is_io() { "ERROR" } else { "CORRUPT" };
                table.add_row(vec!["History".to_string(), status.to_string(), e.to_string()]);
            }
        }
    } else {
        table.add_row(vec!["History", "MISSING", ""]);
    }

    // 2. Collapse trace
    if t_path.exists() {
        match trace::read_trace(&t_path) {
            Ok(text) => {
                table.add_row(vec![
                    "Trace".to_string(),
                    "FOUND".to_string(),
                    format!("{} lines", trace::count_lines(&text)),
                ]);
            }
            Err(e) => {
                table.add_row(vec!["Trace".to_string(), "ERROR".to_string(), e.to_string()]);
            }
        }
    } else {
        table.add_row(vec!["Trace", "MISSING", ""]);
    }

    // 3. Atomized artifact
    if o_path.exists() {
        table.add_row(vec!["Atomized".to_string(), "FOUND".to_string(), artifact_details(&o_path)]);
    } else {
        table.add_row(vec!["Atomized", "MISSING", ""]);
    }

    table
}

fn artifact_details(path: &Path) -> String {
    match fs::metadata(path) {
        Ok(meta) => {
            let modified = meta
                .modified()
                .map(|t| {
                    chrono::DateTime::<chrono::Utc>::from(t)
                        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
                })
                .unwrap_or_else(|_| "unknown".to_string());
            format!("{} bytes, modified {}", meta.len(), modified)
        }
        Err(e) => e.to_string(),
    }
}
