//! Command dispatch and execution handlers.
//!
//! Handlers write their results to the given writer so they can be tested
//! without a terminal. Logs go to stderr.

use std::collections::BTreeMap;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use findtui_catalog::OptionDescriptor;
use findtui_command::{CommandLine, CommandModel, SessionOutcome};
use findtui_complete::{Completer, CompletionQuery};
use serde::Serialize;
use tracing::{debug, warn};

use super::args::*;
use crate::config::Settings;
use crate::replay::replay_script;

/// Dispatch a CLI command to its handler.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli.global)?;
    debug!(program = %settings.program, dialect = %settings.dialect, "Resolved settings");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Build(args) => run_build(&settings, args, &mut out),
        Commands::Parse(args) => run_parse(&settings, args, &mut out),
        Commands::Complete(args) => run_complete(&settings, args, &mut out),
        Commands::Options(args) => run_options(&settings, args, &mut out),
        Commands::Replay(args) => {
            let script = read_script(args.file.as_deref())?;
            run_replay(&settings, &script, args.json, &mut out)
        }
    }
}

/// Splits `NAME[=VALUE]`, dropping a leading dash from the name.
pub fn parse_assignment(text: &str) -> Result<(String, String)> {
    let (name, value) = text.split_once('=').unwrap_or((text, ""));
    let name = name.trim();
    let name = name.strip_prefix('-').unwrap_or(name);
    if name.is_empty() || name.contains(char::is_whitespace) {
        bail!("Invalid assignment '{text}': expected NAME or NAME=VALUE");
    }
    Ok((name.to_string(), value.to_string()))
}

#[derive(Serialize)]
struct BuiltCommand<'a> {
    command: &'a str,
    #[serde(flatten)]
    line: &'a CommandLine,
}

/// Builds a command from flags, applied in the order a user would click.
pub fn run_build<W: Write>(settings: &Settings, args: BuildArgs, out: &mut W) -> Result<()> {
    let mut model = CommandModel::with_program(settings.program.as_str());
    if let Some(path) = &args.path {
        model.set_path(path);
    }
    for assignment in &args.options {
        let (name, value) = parse_assignment(assignment)?;
        if settings.catalog.get(&name).is_none() {
            warn!(option = %name, "Option is not in the catalog");
        } else if settings.catalog.is_action(&name) {
            warn!(option = %name, "Action passed with --option; use --action");
        }
        model.set_option(name, value);
    }
    for assignment in &args.actions {
        let (name, value) = parse_assignment(assignment)?;
        if !settings.catalog.is_action(&name) {
            warn!(action = %name, "Action is not in the catalog's Actions menu");
        }
        model.set_action(name, value);
    }
    if let Some(exec) = &args.exec {
        model.set_freeform_action(exec);
    }

    if args.json {
        let built = BuiltCommand {
            command: model.command(),
            line: model.line(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&built)?)?;
    } else {
        writeln!(out, "{}", model.command())?;
    }
    Ok(())
}

/// Prints the three fields of a hand-written command line.
pub fn run_parse<W: Write>(settings: &Settings, args: ParseArgs, out: &mut W) -> Result<()> {
    let line = CommandLine::parse(&settings.program, &args.text);
    if line.is_empty() && !args.text.trim().is_empty() {
        warn!(program = %settings.program, "Text does not start with the program name");
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&line)?)?;
    } else {
        writeln!(out, "path:    {}", line.path)?;
        writeln!(out, "options: {}", line.options)?;
        writeln!(out, "action:  {}", line.action)?;
    }
    Ok(())
}

/// Prints the common prefix of the candidates, then one candidate label
/// per line.
pub fn run_complete<W: Write>(settings: &Settings, args: CompleteArgs, out: &mut W) -> Result<()> {
    let mut completer = Completer::new(&settings.catalog);
    if let Some(dir) = args.base_dir.as_ref().or(settings.base_dir.as_ref()) {
        completer = completer.with_base_dir(dir);
    }

    let completion = match &args.option {
        Some(name) => {
            let Some(option) = settings.catalog.get(name) else {
                bail!("Unknown option '{name}'");
            };
            completer.complete_value(option, &args.token)
        }
        None => {
            let mut query = CompletionQuery::new(args.token);
            if let Some(domain) = args.domain {
                query = query.in_domain(domain.into());
            }
            completer.complete(&query)
        }
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&completion)?)?;
    } else {
        writeln!(out, "prefix: {}", completion.common_prefix)?;
        for candidate in &completion.candidates {
            writeln!(out, "{}", candidate.label)?;
        }
    }
    Ok(())
}

/// Lists catalog menus and their options.
pub fn run_options<W: Write>(settings: &Settings, args: OptionsArgs, out: &mut W) -> Result<()> {
    let catalog = &settings.catalog;
    let menus: Vec<&str> = match &args.category {
        Some(category) => {
            let Some(menu) = catalog.menus().find(|m| m.eq_ignore_ascii_case(category)) else {
                let known = catalog.menus().collect::<Vec<_>>().join(", ");
                bail!("Unknown category '{category}'. Available: {known}");
            };
            vec![menu]
        }
        None => catalog.menus().collect(),
    };

    if args.json {
        let listing: BTreeMap<&str, &[OptionDescriptor]> = menus
            .iter()
            .map(|menu| (*menu, catalog.options(menu)))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    let width = menus
        .iter()
        .flat_map(|menu| catalog.options(menu))
        .map(|opt| opt.name().len() + 1)
        .max()
        .unwrap_or(0);
    for (idx, menu) in menus.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{menu}")?;
        for opt in catalog.options(menu) {
            let mut line = format!(
                "  {:<width$}  {:<10}  {}",
                opt.flag(),
                opt.kind().as_str(),
                opt.description()
            );
            if !opt.choices().is_empty() {
                line.push_str(&format!(" [{}]", opt.choices().join("|")));
            }
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Reads a replay script from a file, or stdin for `-` or no path.
pub fn read_script(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}

/// Runs a replay script and prints the confirmed command.
///
/// A cancelled session is reported as an error so the process exits
/// non-zero.
pub fn run_replay<W: Write>(settings: &Settings, script: &str, json: bool, out: &mut W) -> Result<()> {
    let model = CommandModel::with_program(settings.program.as_str());
    let outcome =
        replay_script(&settings.catalog, model, script).context("Invalid replay script")?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    }
    match outcome {
        SessionOutcome::Confirmed(command) => {
            if !json {
                writeln!(out, "{command}")?;
            }
            Ok(())
        }
        SessionOutcome::Cancelled => bail!("Session cancelled"),
    }
}
