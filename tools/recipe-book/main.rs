use clap::Parser;
use recipe_book::prelude::{
    Exit, LineSource, ReaderSource, Session, SessionError, SessionOptions, StdinSource,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{error, info};

/// An interactive console recipe book
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read input lines from this file instead of the terminal
    #[arg(long)]
    script: Option<PathBuf>,

    /// Verbose logging (written to stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let options = SessionOptions {
        show_banner: !cli.no_banner,
    };

    let result = match cli.script {
        Some(path) => {
            info!(script = %path.display(), "replaying scripted session");
            let file = File::open(&path).unwrap_or_else(|e| {
                exit_with_error(&format!(
                    "Failed to open script '{}': {}",
                    path.display(),
                    e
                ))
            });
            run(ReaderSource::new(BufReader::new(file)), options)
        }
        None => run(StdinSource::stdin(), options),
    };

    match result {
        Ok(exit) => {
            info!(?exit, "session finished");
            std::process::exit(0);
        }
        Err(e) => {
            error!(error = %e, "session failed");
            exit_with_error(&e.to_string());
        }
    }
}

fn run<S: LineSource>(input: S, options: SessionOptions) -> Result<Exit, SessionError> {
    let stdout = io::stdout().lock();
    Session::with_options(input, stdout, options).run()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
