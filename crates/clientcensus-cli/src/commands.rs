use super::args::Cli;
use super::handlers;
use anyhow::Context;
use clientcensus_store::{Config, Database};
use std::fmt;
use tracing::{debug, info};

/// Phase of a run that failed; each maps to its own exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Usage,
    Config,
    Connection,
    Tally,
    Lookup,
}

impl Stage {
    pub fn exit_code(&self) -> i32 {
        match self {
            Stage::Usage => 1,
            Stage::Config => 2,
            Stage::Connection => 3,
            Stage::Tally => 4,
            Stage::Lookup => 10,
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            Stage::Usage => "Invalid arguments",
            Stage::Config => "Failed to process config file",
            Stage::Connection => "Failed to connect to database",
            Stage::Tally => "Error processing database",
            Stage::Lookup => "Error processing lookup",
        }
    }
}

/// Fatal error carrying the stage it happened in
#[derive(Debug)]
pub struct CommandError {
    pub stage: Stage,
    pub source: anyhow::Error,
}

impl CommandError {
    pub fn new(stage: Stage, source: impl Into<anyhow::Error>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.stage.exit_code()
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.stage.summary(), self.source)
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

pub fn run(cli: Cli) -> Result<(), CommandError> {
    let lookup = cli.lookup.resolve();
    if let Some(request) = &lookup {
        info!(
            "Running in lookup mode, for desktop version v{} and earlier. Writing results to: {}",
            request.threshold,
            request.outfile.display()
        );
    }

    let config = Config::load_from(&cli.config)
        .with_context(|| cli.config.display().to_string())
        .map_err(|e| CommandError::new(Stage::Config, e))?;

    let mut db =
        Database::connect(&config.db).map_err(|e| CommandError::new(Stage::Connection, e))?;

    match lookup {
        Some(request) => {
            debug!("Starting lookup");
            handlers::lookup::handle(&mut db, &request)
                .map_err(|e| CommandError::new(Stage::Lookup, e))?;
        }
        None => {
            handlers::tally::handle(&mut db)
                .map_err(|e| CommandError::new(Stage::Tally, e))?;
        }
    }

    if let Err(e) = db.close() {
        debug!("Error closing database connection: {}", e);
    }

    Ok(())
}
