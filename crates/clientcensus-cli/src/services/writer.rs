use anyhow::Result;
use clientcensus_types::LookupRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// CSV export of lookup results.
///
/// The header is written as soon as the writer is created. A record that
/// fails to write is logged and skipped; the rest of the export continues.
pub struct LookupCsv<W: Write> {
    wtr: csv::Writer<W>,
}

impl LookupCsv<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let wtr = csv::Writer::from_path(path)?;
        Self::start(wtr)
    }
}

impl<W: Write> LookupCsv<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        Self::start(csv::Writer::from_writer(inner))
    }

    fn start(mut wtr: csv::Writer<W>) -> Result<Self> {
        wtr.write_record(LookupRecord::HEADER)?;
        wtr.flush()?;
        Ok(Self { wtr })
    }

    /// Returns the number of records written
    pub fn write_records(&mut self, records: &[LookupRecord]) -> usize {
        let mut written = 0;
        for record in records {
            match self.wtr.write_record(record.fields()) {
                Ok(()) => written += 1,
                Err(e) => warn!(
                    "Error writing record for user {}: {}",
                    record.user.username, e
                ),
            }
        }
        written
    }

    pub fn finish(mut self) -> Result<W> {
        self.wtr.flush()?;
        self.wtr
            .into_inner()
            .map_err(|e| anyhow::anyhow!("{}", e.error()))
    }
}
