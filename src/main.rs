use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

mod config;
mod document;
mod engine;
mod error;
mod estimate;
mod host;
mod metrics;
#[cfg(test)]
mod test_utils;
mod workspace;

use document::DocumentId;
use engine::StatsEngine;
use error::PagecountError;
use workspace::{FsWorkspace, TerminalStatus};

/// Live word, line, page and reading time statistics
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Word, line, page and reading time statistics for a workspace of text documents"
)]
struct Args {
    /// Directory to scan (defaults to the current directory)
    directory: Option<PathBuf>,

    /// Treat this file as the currently viewed document
    #[arg(long)]
    active: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/pagecount-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/pagecount-debug.log")
            .expect("Failed to open /tmp/pagecount-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== PAGECOUNT DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during engine initialization
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let root = args.directory.unwrap_or_else(|| PathBuf::from("."));

    // One logical event sequence: mutations never overlap, the async
    // document fetch is the only suspension point
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(root, args.active, config_result.config))?;

    #[cfg(debug_assertions)]
    log::debug!("=== PAGECOUNT DEBUG SESSION ENDED ===");

    Ok(())
}

/// Scan the workspace once and print the two summaries.
async fn run(
    root: PathBuf,
    active: Option<PathBuf>,
    config: config::Config,
) -> Result<(), PagecountError> {
    let active_id = active.map(|path| DocumentId::file(path.to_string_lossy()));

    let mut workspace = FsWorkspace::new(root, config);
    workspace.set_active(active_id.clone());

    let mut engine = StatsEngine::new(
        workspace,
        TerminalStatus::new("current"),
        TerminalStatus::new("total"),
    );

    engine.rescan_all().await?;
    if let Some(id) = active_id {
        engine.on_focus_changed(id).await?;
    }

    if let Some(line) = engine.current_status().line() {
        println!("{}", line);
    }
    if let Some(line) = engine.total_status().line() {
        println!("{}", line);
    }

    Ok(())
}
