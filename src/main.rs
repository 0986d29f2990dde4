use anyhow::Context;
use clap::Parser;
use fieldscribe_core::config::Config;
use fieldscribe_core::Extractor;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldscribe", about = "fieldscribe — transcript to report-form field lines")]
struct Cli {
    /// Transcript file to parse; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Write the field lines to this file (the handoff consumed by the
    /// form-filling automation) instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write debug logs to /tmp/fieldscribe-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fieldscribe-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fieldscribe debug log started — tail -f /tmp/fieldscribe-debug.log");
    }

    let config = Config::load()?;

    let transcript = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading transcript {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading transcript from stdin")?;
            buf
        }
    };

    let extractor = Extractor::with_config(&config.extractor);
    let mut rendered = extractor.extract(&transcript);
    if config.output.skip_empty_values {
        rendered = skip_empty_value_lines(&rendered);
    }

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing field lines to {}", path.display()))?;
            tracing::info!(path = %path.display(), "field lines written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Drop `field=` lines with a blank value portion before the handoff. The
/// serializer already omits these; the downstream form filler applies the
/// same guard, and so do we when assembling its input file.
fn skip_empty_value_lines(rendered: &str) -> String {
    rendered
        .lines()
        .filter(|line| {
            line.split_once('=')
                .is_some_and(|(_, value)| !value.trim().is_empty())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
