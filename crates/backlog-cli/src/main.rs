mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "backlog",
    about = "Heuristic Agile backlog generator — projects, epics, stories, sprints",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web UI server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "3141")]
        port: u16,

        /// SQLite database path
        #[arg(long, env = "BACKLOG_DB", default_value = "backlog.db")]
        db: PathBuf,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Generate a backlog from a summary without persisting it
    Preview {
        /// Project summary text
        summary: String,

        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve { port, db, no_open } => serve(db, port, no_open),
        Commands::Preview { summary, json } => preview(&summary, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// serve
// ---------------------------------------------------------------------------

fn serve(db: PathBuf, port: u16, no_open: bool) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        tokio::select! {
            res = backlog_server::serve_on(db, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}

// ---------------------------------------------------------------------------
// preview
// ---------------------------------------------------------------------------

fn preview(summary: &str, json: bool) -> anyhow::Result<()> {
    let backlog = backlog_core::engine::generate_backlog(summary);
    if json {
        return output::print_json(&backlog);
    }
    output::print_backlog(&backlog);
    Ok(())
}
