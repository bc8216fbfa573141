use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use source::{Source, DEFAULT_TIMEOUT_SECS};
use tracing_subscriber::filter::LevelFilter;

const AFTER_HELP: &str = "\
You need to provide one flag and one param.

Possible flags:
  -f or --file: get text from a txt or md file
  -w or --wikipedia: get the summary section of a wikipedia page
  -s or --string: use the given text as it is";

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "typeprep",
    version,
    about = "Format text for typing-speed practice sites",
    after_help = AFTER_HELP,
    arg_required_else_help = true
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(false)
        .args(["file", "wikipedia", "string"])
))]
pub struct Cli {
    /// Get text from a .txt or .md file.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Get the summary section of a Wikipedia page.
    #[arg(short = 'w', long = "wikipedia", value_name = "TOPIC")]
    pub wikipedia: Option<String>,
    /// Use the given text.
    #[arg(short = 's', long = "string", value_name = "TEXT", allow_hyphen_values = true)]
    pub string: Option<String>,
    /// Print the source text without normalizing it.
    #[arg(long)]
    pub raw: bool,
    /// Leave out the character/word/WPM statistics.
    #[arg(long = "no-stats")]
    pub no_stats: bool,
    /// Wikipedia language edition.
    #[arg(long, value_name = "CODE", default_value = "en")]
    pub lang: String,
    /// Timeout for the Wikipedia request, in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The one input the user picked. `None` only when the struct was
    /// built by hand without any input set.
    pub fn source(&self) -> Option<Source> {
        if let Some(path) = &self.file {
            return Some(Source::File(path.clone()));
        }
        if let Some(topic) = &self.wikipedia {
            return Some(Source::Wikipedia(topic.clone()));
        }
        self.string.clone().map(Source::Text)
    }

    /// Log level for stderr output; warnings only unless `-v` is given.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
