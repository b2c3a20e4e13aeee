//! `upshot up` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use upshot_plugin::{Session, Settings};
use upshot_session::FileSession;

use super::{publish_pipeline, render_reports, session_item};

#[derive(Debug, Args)]
pub struct UpArgs {
    /// Session file to save to its next version
    pub file: PathBuf,
}

/// Runs the full publish pass and reports the new version path.
pub fn run(args: UpArgs) -> Result<()> {
    let session = Arc::new(FileSession::open(&args.file)?);
    let pipeline = publish_pipeline(session.clone());
    let mut item = session_item(&args.file);

    let reports = pipeline.run(&Settings::new(), &mut item)?;
    render_reports(&reports);

    if !reports.iter().any(|report| report.published) {
        bail!("nothing was published for {}", args.file.display());
    }

    if let Some(path) = session.path() {
        println!("Saved next version: {}", path.display());
    }
    Ok(())
}
