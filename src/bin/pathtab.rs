//! pathtab CLI - Render per-agent timestep sequences as a LaTeX tabular

#[cfg(feature = "cli")]
use anyhow::{bail, Context};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, IsTerminal, Write};
#[cfg(feature = "cli")]
use tracing::{debug, info};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
use pathtab::{
    diagnostics::{format_diagnostics, strict_failures},
    make_tabular_from_file, read_rows, render_rows,
    CliDiagnostic, PadMode, TabularOptions, TabularOutput,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pathtab")]
#[command(version)]
#[command(about = "Render per-agent timestep sequences as a LaTeX tabular", long_about = None)]
struct Cli {
    /// Input file, one agent per line (`-` reads stdin)
    input_file: String,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Token appended to rows shorter than the longest one
    #[arg(long)]
    filler: Option<String>,

    /// How short rows are padded
    #[arg(long, value_enum, default_value_t = Pad::Filler)]
    pad: Pad,

    /// Row label prefix (the agent index follows)
    #[arg(long)]
    agent_label: Option<String>,

    /// Header row label
    #[arg(long)]
    header_label: Option<String>,

    /// Escape LaTeX special characters in input tokens
    #[arg(long)]
    escape: bool,

    /// Strict mode: exit with error on any warning other than padding
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored warning output (color is only used when stderr is a terminal)
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Pad {
    /// Append the filler token
    Filler,
    /// Repeat the row's last value
    RepeatLast,
}

#[cfg(feature = "cli")]
impl From<Pad> for PadMode {
    fn from(pad: Pad) -> Self {
        match pad {
            Pad::Filler => PadMode::Filler,
            Pad::RepeatLast => PadMode::RepeatLast,
        }
    }
}

#[cfg(feature = "cli")]
impl Cli {
    fn options(&self) -> TabularOptions {
        let mut options = TabularOptions {
            pad_mode: self.pad.into(),
            escape_tokens: self.escape,
            ..Default::default()
        };
        if let Some(ref filler) = self.filler {
            options.filler = filler.clone();
        }
        if let Some(ref label) = self.agent_label {
            options.agent_label = label.clone();
        }
        if let Some(ref label) = self.header_label {
            options.header_label = label.clone();
        }
        options
    }
}

/// Logs go to stderr so stdout carries only LaTeX. `RUST_LOG` wins over `-v`.
#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.options();
    debug!(input = %cli.input_file, "rendering tabular");

    let result: TabularOutput = if cli.input_file == "-" {
        let rows = read_rows(io::stdin().lock()).context("failed to read stdin")?;
        render_rows(rows, &options)
    } else {
        make_tabular_from_file(&cli.input_file, &options)
            .with_context(|| format!("failed to load plan file '{}'", cli.input_file))?
    };

    let diagnostics: Vec<CliDiagnostic> = result
        .warnings
        .iter()
        .cloned()
        .map(CliDiagnostic::from)
        .collect();

    if !cli.quiet && !diagnostics.is_empty() {
        let use_color = !cli.no_color && io::stderr().is_terminal();
        eprint!("{}", format_diagnostics(&diagnostics, use_color));
    }

    let failures = strict_failures(&diagnostics);
    if cli.strict && failures > 0 {
        bail!("{} warning(s) in strict mode", failures);
    }

    match cli.output {
        Some(ref path) => {
            fs::write(path, &result.content)
                .with_context(|| format!("failed to write '{}'", path))?;
            info!(path = %path, "output written");
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(result.content.as_bytes())
                .and_then(|_| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install pathtab --features cli");
    eprintln!("  pathtab [OPTIONS] <INPUT_FILE>");
}
