//! Completion engine for findtui.
//!
//! Completes path tokens against the filesystem and flag tokens against
//! the option catalog, returning the candidates together with their
//! longest common prefix.
//!
//! ```
//! use findtui_catalog::{Catalog, Dialect};
//! use findtui_complete::Completer;
//!
//! let catalog = Catalog::builtin(Dialect::Gnu).unwrap();
//! let completion = Completer::new(&catalog).complete_any("-t");
//! assert_eq!(completion.common_prefix, "-t");
//! assert_eq!(completion.values().collect::<Vec<_>>(), ["-true", "-type"]);
//! ```

mod candidate;
mod engine;
mod path;
mod prefix;
mod splice;

pub use candidate::{Candidate, Completion, CompletionDomain, CompletionQuery};
pub use engine::Completer;
pub use prefix::common_prefix;
pub use splice::{Splice, accept_candidate, complete_last_piece};
