use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use fab_atom::{VerificationReport, Verifier, Violation};
use fab_atom_history::verify_file;

use crate::config::AtomConfig;

pub fn run(cfg: &AtomConfig, json: bool) -> anyhow::Result<()> {
    let path = cfg.history_path();
    if !json {
        println!("[FAB] Replaying and validating DAG...");
    }

    let verifier = Verifier::new(cfg.policy);
    let outcome = verify_file(&path, &verifier)
        .with_context(|| format!("Failed to verify history {}", path.display()))?;

    if json {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let cert = outcome.certificate(now);
        println!("{}", serde_json::to_string_pretty(&cert)?);
    } else {
        match &outcome.report {
            VerificationReport::Verified { node_count } => {
                println!("\n✅ DAG verified: {} nodes, no missing links.\n", node_count);
            }
            VerificationReport::Failed { violations } => {
                println!("\n❌ DAG REJECTED\n");
                println!("{}\n", violation_table(violations));
            }
        }
    }

    match outcome.report {
        VerificationReport::Verified { .. } => Ok(()),
        VerificationReport::Failed { violations } => {
            let first = violations.first().map(ToString::to_string).unwrap_or_default();
            anyhow::bail!(
                "History verification failed: {} violation(s), first: {}",
                violations.len(),
                first
            )
        }
    }
}

pub fn violation_table(violations: &[Violation]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Position", "Violation", "Detail"]);

    for v in violations {
        let position = v.position.map_or_else(|| "-".to_string(), |p| p.to_string());
        table.add_row(vec![position, v.kind.name().to_string(), v.kind.to_string()]);
    }

    table
}
