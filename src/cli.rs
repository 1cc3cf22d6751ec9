use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::detector::SensitiveKind;
use crate::error::Result;
use crate::render::{OutputFormat, RenderOptions};
use crate::report::ContentKind;

#[derive(Parser, Debug)]
#[command(name = "antidoxx")]
#[command(version)]
#[command(about = "Format PII-advice replies and scan text for sensitive information")]
pub struct Args {
    /// Config file (defaults to <config dir>/antidoxx/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format an advice message into headings, lists and paragraphs
    Format(FormatArgs),

    /// Scan text for sensitive information and print the advice report
    Scan(ScanArgs),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args, Debug)]
pub struct FormatArgs {
    /// Message file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Input is a backend JSON reply; format its `message` field
    #[arg(long)]
    pub envelope: bool,

    #[command(flatten)]
    pub render: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Text file to scan (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Saved language-model reply whose findings are merged into the report
    #[arg(long)]
    pub model_reply: Option<PathBuf>,

    /// What the input is; worded into the report
    #[arg(long, value_enum)]
    pub kind: Option<ContentKind>,

    /// Only look for these kinds of information (comma separated; all when omitted)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<SensitiveKind>,

    #[command(flatten)]
    pub render: OutputArgs,
}

#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Output format: text, html or json
    #[arg(long, short, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable terminal styling
    #[arg(long)]
    pub no_color: bool,

    /// Heading level for HTML output (1-6)
    #[arg(long)]
    pub heading_level: Option<u8>,
}

impl ScanArgs {
    /// A named file defaults to `text-file`, stdin to `text-input`.
    pub fn content_kind(&self) -> ContentKind {
        match (self.kind, &self.input) {
            (Some(kind), _) => kind,
            (None, Some(_)) => ContentKind::TextFile,
            (None, None) => ContentKind::TextInput,
        }
    }
}

/// Merge command-line overrides onto the loaded config.
pub fn resolve_output(args: &OutputArgs, config: &Config) -> Result<(OutputFormat, RenderOptions)> {
    let mut merged = config.clone();
    if let Some(output) = args.output {
        merged.output = output;
    }
    if args.no_color {
        merged.color = false;
    }
    if let Some(level) = args.heading_level {
        merged.heading_level = level;
    }
    merged.validate()?;
    Ok((merged.output, merged.render_options()))
}
