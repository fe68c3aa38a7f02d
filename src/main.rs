use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use figdraw::{load_scene, Scene};

/// Render ASCII figures described by a scene file
#[derive(Debug, Parser)]
#[command(name = "figdraw", version, about)]
struct Cli {
    /// Scene file (line format, or TOML when the extension is .toml)
    config: PathBuf,

    /// Write here instead of the scene's `output` entry
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the rendering to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,

    /// Log every figure drawn
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("figdraw version {}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("{e:#}");
            Err(e)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_scene(&cli.config)
        .with_context(|| format!("failed to load scene {}", cli.config.display()))?;
    let scene = Scene::from_config(&config).context("invalid scene")?;

    if cli.stdout {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        scene.render()?.write_to(&mut lock)?;
        lock.flush()?;
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .or_else(|| config.output.clone())
        .context("no output path: add an `output` entry to the scene or pass --output")?;

    scene
        .render_to_file(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
