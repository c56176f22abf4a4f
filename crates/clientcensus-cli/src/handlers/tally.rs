use crate::presentation::report;
use anyhow::Result;
use clientcensus_store::Database;
use std::io::Write;
use tracing::warn;

pub fn handle(db: &mut Database) -> Result<()> {
    let rows = db.active_sessions()?;
    let census = clientcensus_engine::tally(rows);

    if census.skipped > 0 {
        warn!("Skipped {} sessions with unreadable properties", census.skipped);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &census)?;
    out.flush()?;

    Ok(())
}
