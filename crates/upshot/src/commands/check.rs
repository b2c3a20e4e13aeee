//! `upshot check` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use upshot_plugin::Settings;
use upshot_session::FileSession;

use super::{publish_pipeline, render_reports, session_item};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Session file to check
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs accept and validate without publishing anything.
pub fn run(args: CheckArgs) -> Result<()> {
    let session = Arc::new(FileSession::open(&args.file)?);
    let pipeline = publish_pipeline(session);
    let mut item = session_item(&args.file);

    let reports = pipeline.check(&Settings::new(), &mut item);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        render_reports(&reports);
    }

    let ready =
        !reports.is_empty() && reports.iter().all(|report| report.validated == Some(true));
    if !ready {
        bail!("session is not ready to publish: {}", args.file.display());
    }

    if !args.json {
        println!("Ready to publish: {}", args.file.display());
    }
    Ok(())
}
