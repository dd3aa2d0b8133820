use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hingetorque_cli::output::{render_json, render_text, OutputFormat};
use hingetorque_cli::prompt::Prompter;
use hingetorque_cli::session::{run_all_surfaces, run_single};
use hingetorque_cli::terminal::ColorPalette;
use hingetorque_lib::SurfacePreset;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate RC servo torque from control surface hinge moments"
)]
struct Cli {
    /// Example surface whose geometry is offered as prompt defaults.
    #[arg(long, default_value = "custom", conflicts_with = "all_surfaces")]
    preset: SurfacePreset,

    /// Estimate aileron, elevator and rudder at one flight condition.
    #[arg(long)]
    all_surfaces: bool,

    /// Report format. With `json`, prompts are written to stderr.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Tracing filter (overrides RUST_LOG).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match cli.format {
        OutputFormat::Text => run(&cli, io::stdout().lock(), ColorPalette::detect()),
        OutputFormat::Json => run(&cli, io::stderr().lock(), ColorPalette::plain()),
    }
}

fn run<W: Write>(cli: &Cli, prompt_out: W, palette: ColorPalette) -> Result<()> {
    let mut prompter = Prompter::new(io::stdin().lock(), prompt_out, palette);

    let reports = if cli.all_surfaces {
        run_all_surfaces(&mut prompter)
    } else {
        run_single(&mut prompter, cli.preset)
    }
    .context("failed to collect estimator inputs")?;

    match cli.format {
        OutputFormat::Text => render_text(prompter.writer_mut(), &reports, palette)?,
        OutputFormat::Json => render_json(&mut io::stdout().lock(), &reports)?,
    }
    prompter.writer_mut().flush()?;
    Ok(())
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let env_filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level filter '{level}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let subscriber = fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}
