mod docs;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn main() -> Result<()> {
    // ETCH_LOG controls the log level, default "warn"
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("ETCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = docs::Args::parse();
    let summary = docs::run(&args)?;

    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    if let Err(e) = print_summary(&mut stderr, &summary) {
        tracing::warn!("failed to print summary: {}", e);
    }

    Ok(())
}

/// Write the one-line completion summary
fn print_summary<W: WriteColor>(w: &mut W, summary: &docs::Summary) -> io::Result<()> {
    w.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(w, "{:>12}", "Rendered")?;
    w.reset()?;
    write!(w, " {} of {} types", summary.rendered, summary.total)?;

    if let Some(path) = &summary.output {
        write!(w, " to ")?;
        w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(w, "{}", path.display())?;
        w.reset()?;
    }

    writeln!(w)
}
