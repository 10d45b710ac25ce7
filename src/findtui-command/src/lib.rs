//! Command representation and edit model for findtui.
//!
//! [`CommandLine`] is the three-field linear form of a `find` invocation
//! (path, predicate options, `-exec` payload) with a permissive parser and
//! the legacy serializer. [`CommandModel`] owns one and rebuilds it from
//! structured option and action assignments after every edit.
//!
//! ```
//! use findtui_command::CommandModel;
//!
//! let mut model = CommandModel::new();
//! model.set_path("src");
//! model.set_option("type", "f");
//! model.set_freeform_action("wc -l");
//! assert_eq!(model.command(), "find src -type f -exec wc -l {} ;");
//!
//! model.remove_option("type");
//! assert_eq!(model.command(), "find src  -exec wc -l {} ;");
//! ```

mod line;
mod model;
mod outcome;

pub use line::{CommandLine, DEFAULT_PROGRAM, EXEC_INTRODUCER, PLACEHOLDER, TERMINATOR};
pub use model::{CommandModel, EXEC_ACTION, OptionEdit, Slot};
pub use outcome::SessionOutcome;

#[cfg(test)]
mod tests;
