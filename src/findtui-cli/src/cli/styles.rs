//! CLI styling and formatting.
//!
//! Defines ANSI colors and formatting for the CLI help output.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// findtui styled help theme.
pub fn get_styles() -> Styles {
    Styles::styled()
        // Headers (USAGE, COMMANDS, OPTIONS) - Bold cyan
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        // Placeholders (<VALUE>, [ARGS]) - Yellow
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Cyan.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section with examples and environment variables.
pub const AFTER_HELP: &str = color_print::cstr!(
    r#"<cyan,bold>EXAMPLES</>
    <green,bold>findtui build</> <dim>--path src --option type=f --exec "wc -l"</>
    <green,bold>findtui parse</> <dim>"find . -name '*.rs' -exec rm {} ;"</>
    <green,bold>findtui complete</> <dim>-ty</>
    <green,bold>findtui options</> <dim>--category Time</>
    <green,bold>findtui replay</> <dim>session.txt</>

<cyan,bold>ENVIRONMENT VARIABLES</>
    <yellow>FINDTUI_CONFIG</>       Path of the configuration file
    <yellow>FINDTUI_HOME</>         Configuration directory (default: ~/.findtui)
    <yellow>FINDTUI_LOG_LEVEL</>    Log verbosity (error, warn, info, debug, trace)
    <yellow>RUST_LOG</>             Full tracing filter, overrides the log level"#
);
