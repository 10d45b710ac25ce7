//! CLI argument structures and parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use findtui_catalog::Dialect;
use findtui_complete::CompletionDomain;

use super::styles::{AFTER_HELP, get_styles};

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Option dialect of the wrapped `find`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DialectArg {
    /// GNU findutils
    Gnu,
    /// BSD and macOS find
    Bsd,
    /// Options common to both
    Posix,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Gnu => Dialect::Gnu,
            DialectArg::Bsd => Dialect::Bsd,
            DialectArg::Posix => Dialect::Posix,
        }
    }
}

/// What to complete a token against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DomainArg {
    /// Filesystem entries
    Path,
    /// Catalog flags
    Option,
}

impl From<DomainArg> for CompletionDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Path => CompletionDomain::Path,
            DomainArg::Option => CompletionDomain::OptionName,
        }
    }
}

/// findtui - build, parse and complete `find` command lines.
#[derive(Parser, Debug)]
#[command(name = "findtui")]
#[command(author, version)]
#[command(about = "Build, parse and complete find command lines", long_about = None)]
#[command(styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (default: ~/.findtui/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Program name the command line starts with
    #[arg(long, global = true, value_name = "NAME")]
    pub program: Option<String>,

    /// Option dialect of the wrapped find
    #[arg(long, global = true, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Set log verbosity level (error, warn, info, debug, trace)
    #[arg(long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a command line from options and actions
    #[command(display_order = 1)]
    Build(BuildArgs),

    /// Split a command line into path, options and action
    #[command(display_order = 2)]
    Parse(ParseArgs),

    /// Complete a path or option-name token
    #[command(display_order = 3)]
    Complete(CompleteArgs),

    /// List the option catalog
    #[command(visible_alias = "ls", display_order = 4)]
    Options(OptionsArgs),

    /// Drive an editing session from a script of edit operations
    #[command(display_order = 5)]
    Replay(ReplayArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Starting point of the search
    #[arg(long, short = 'p', value_name = "PATH")]
    pub path: Option<String>,

    /// Predicate option, repeatable (e.g. type=f, empty)
    #[arg(long = "option", short = 'o', value_name = "NAME[=VALUE]")]
    pub options: Vec<String>,

    /// Action, repeatable (e.g. delete, execdir=rm)
    #[arg(long = "action", short = 'a', value_name = "NAME[=VALUE]")]
    pub actions: Vec<String>,

    /// Command to run on each match, without `{} ;`
    #[arg(long, value_name = "CMD", allow_hyphen_values = true)]
    pub exec: Option<String>,

    /// Print the structured result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Command line text, quoted as one argument
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Print the fields as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Token to complete (a path prefix or a flag prefix such as -ty)
    #[arg(allow_hyphen_values = true)]
    pub token: String,

    /// Completion domain; inferred from the token when omitted
    #[arg(long, value_enum)]
    pub domain: Option<DomainArg>,

    /// Complete a value of this option instead (e.g. newer, type)
    #[arg(long = "option", value_name = "NAME", conflicts_with = "domain")]
    pub option: Option<String>,

    /// Directory relative paths are resolved against
    #[arg(long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Print candidates and the common prefix as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct OptionsArgs {
    /// Only list one menu (e.g. Name, Time, Actions)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct ReplayArgs {
    /// Script file; `-` or absent reads standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the session outcome as JSON
    #[arg(long)]
    pub json: bool,
}
