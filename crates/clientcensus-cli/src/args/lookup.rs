use clap::Args;
use clientcensus_types::ClientVersion;
use std::path::PathBuf;

use crate::handlers::LookupRequest;

pub const DEFAULT_OUTPUT_FILE: &str = "users.csv";

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    #[arg(
        long,
        requires = "ver",
        help = "Look up users of desktop clients at or below a version"
    )]
    pub lookup: bool,

    #[arg(
        long,
        value_name = "X.Y.Z",
        help = "[required for lookup] Desktop clients of this version and older are returned"
    )]
    pub ver: Option<ClientVersion>,

    #[arg(
        long,
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output CSV filename for lookup mode"
    )]
    pub outfile: PathBuf,
}

impl LookupArgs {
    /// `Some` only when lookup mode was requested
    pub fn resolve(&self) -> Option<LookupRequest> {
        if !self.lookup {
            return None;
        }

        self.ver.map(|threshold| LookupRequest {
            threshold,
            outfile: self.outfile.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Cli;
    use clap::Parser;
    use clientcensus_types::ClientVersion;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("clientcensus").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert!(!cli.debug);
        assert!(cli.lookup.resolve().is_none());
    }

    #[test]
    fn test_lookup_request() {
        let cli = parse(&["--lookup", "--ver", "5.5.3", "--outfile", "old.csv"]).unwrap();
        let request = cli.lookup.resolve().unwrap();
        assert_eq!(request.threshold, ClientVersion::new(5, 5, 3));
        assert_eq!(request.outfile, PathBuf::from("old.csv"));
    }

    #[test]
    fn test_lookup_default_outfile() {
        let cli = parse(&["--lookup", "--ver", "5.5.3"]).unwrap();
        assert_eq!(
            cli.lookup.resolve().unwrap().outfile,
            PathBuf::from("users.csv")
        );
    }

    #[test]
    fn test_lookup_requires_version() {
        let err = parse(&["--lookup"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_malformed_version_is_rejected() {
        let err = parse(&["--lookup", "--ver", "5.5"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_version_without_lookup_is_ignored() {
        let cli = parse(&["--ver", "5.5.3"]).unwrap();
        assert!(cli.lookup.resolve().is_none());
    }
}
