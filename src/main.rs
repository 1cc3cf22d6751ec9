use std::io::{self, IsTerminal, Write};

use antidoxx::cli::{Args, Command};
use antidoxx::commands::{read_input, run_format, run_scan};
use antidoxx::config::Config;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so rendered output on stdout stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    }
    .for_stream(io::stdout().is_terminal());

    let output = match &args.command {
        Command::Format(format_args) => {
            let input = read_input(format_args.input.as_deref())?;
            run_format(format_args, &config, &input)?
        }
        Command::Scan(scan_args) => {
            let input = read_input(scan_args.input.as_deref())?;
            run_scan(scan_args, &config, &input)?
        }
        Command::Completions { shell } => {
            clap_complete::generate(*shell, &mut Args::command(), "antidoxx", &mut io::stdout());
            return Ok(());
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
