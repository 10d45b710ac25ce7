//! findtui command-line front end.
//!
//! - `cli/` - Command-line argument parsing and dispatch
//! - `config` - Config file discovery and effective settings
//! - `replay` - Scripted editing sessions

pub mod cli;
pub mod config;
pub mod replay;

pub use config::{FindtuiConfig, Settings};
pub use replay::{ScriptError, ScriptResult, replay_script};
