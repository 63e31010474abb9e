use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use cc_usage_line::{RenderConfig, read_snapshot, render};
use tracing_subscriber::EnvFilter;

/// Filter directives for stderr diagnostics, e.g. `CC_USAGE_LINE_LOG=debug`.
const LOG_ENV: &str = "CC_USAGE_LINE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let snapshot = read_snapshot(io::stdin().lock())?;
    let config = RenderConfig::from_env();
    let output = render(&snapshot, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    out.write_all(output.as_bytes())
        .context("failed to write status line")?;
    out.flush().context("failed to flush status line")?;
    Ok(())
}
