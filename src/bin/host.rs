use clap::Parser;
use finder_core::host::HostSession;
use finder_core::{FinderConfig, FinderEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Serves translation lookups to an editor plugin over stdin/stdout.
#[derive(Parser)]
#[command(name = "finder_host", version)]
struct Args {
    /// Translation store to open (overrides the config file)
    #[arg(long)]
    store: Option<PathBuf>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON catalogs to import before serving
    #[arg(long = "import")]
    imports: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = FinderConfig::load_or_default(args.config.as_deref())?;
    if let Some(store) = args.store {
        config.store_path = Some(store);
    }

    let mut engine = FinderEngine::from_config(config)?;
    for path in &args.imports {
        engine.import_catalog(path)?;
    }

    let mut session = HostSession::new(engine);
    tracing::info!(culture = ?session.culture(), "host ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let reply = session.handle_line(&line);
        for out in &reply.lines {
            writeln!(stdout, "{out}")?;
        }
        stdout.flush()?;
        if reply.exit {
            tracing::info!("host shutting down");
            return Ok(());
        }
    }

    // stdin closed without EXIT
    if let Err(e) = session.engine().save() {
        tracing::error!(error = %e, "could not save store");
    }
    Ok(())
}
