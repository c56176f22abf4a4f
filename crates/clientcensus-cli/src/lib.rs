// NOTE: clientcensus Architecture
//
// One pass over active sessions feeds a single pipeline:
// store rows -> decode -> classify -> extract version -> tally
// Lookup mode swaps the tally for a version filter joined against users,
// written to CSV. Both modes share the decode/classify/extract steps.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
mod services;

pub use args::{Cli, DEFAULT_OUTPUT_FILE, LookupArgs};
pub use commands::{CommandError, Stage, run};
pub use handlers::LookupRequest;
pub use services::writer::LookupCsv;
