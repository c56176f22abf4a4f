use crate::services::writer::LookupCsv;
use anyhow::{Context, Result};
use clientcensus_store::Database;
use clientcensus_types::ClientVersion;
use std::path::PathBuf;
use tracing::{info, warn};

/// Resolved `--lookup` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub threshold: ClientVersion,
    pub outfile: PathBuf,
}

pub fn handle(db: &mut Database, request: &LookupRequest) -> Result<()> {
    // Output file is created before any query runs
    let mut csv = LookupCsv::create(&request.outfile)
        .with_context(|| format!("Error creating file: {}", request.outfile.display()))?;

    let rows = db.active_sessions_with_owner()?;
    let outcome = clientcensus_engine::lookup(rows, &request.threshold, db)?;

    if outcome.skipped > 0 {
        warn!("Skipped {} sessions with unreadable properties", outcome.skipped);
    }

    let written = csv.write_records(&outcome.records);
    csv.finish()
        .with_context(|| format!("Error writing file: {}", request.outfile.display()))?;

    info!(
        "Found {} matching desktop sessions, wrote {} users to {}",
        outcome.matched_sessions,
        written,
        request.outfile.display()
    );

    Ok(())
}
