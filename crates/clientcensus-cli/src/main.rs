use clap::Parser;
use clientcensus::{Cli, Stage, logging, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping the report to `head`)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version exit 0; usage errors exit 1
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(Stage::Usage.exit_code());
        }
        Err(e) => e.exit(),
    };

    logging::init(cli.debug);

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
