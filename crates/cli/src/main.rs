//! `jobboard`: print job listings from JSON files as a sorted, filtered table.

mod config;
mod loader;
mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use jobboard_core::LoadSequence;
use jobboard_listings::{JobBoard, LoadOutcome};

use crate::config::Cli;
use crate::render::TerminalView;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    jobboard_observability::init(cli.log_format());

    let query = cli.query();
    let seq = LoadSequence::new();
    let mut board = JobBoard::new();
    let mut view = TerminalView::new(cli.format, cli.show_options, std::io::stderr());
    let mut rejected = 0usize;

    let mut completions = loader::spawn_loads(&cli.files, &seq);
    while let Some(done) = completions.recv().await {
        let _span = tracing::info_span!("load", path = %done.path.display()).entered();
        let result = done.ingest();
        if let LoadOutcome::Rejected(_) = board.complete_load(done.token, result, &query, &mut view) {
            rejected += 1;
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    view.write_to(&mut out).context("failed to write table")?;
    out.flush().context("failed to flush stdout")?;

    Ok(if rejected > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
