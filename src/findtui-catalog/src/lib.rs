//! Option catalog for findtui.
//!
//! The catalog is a static table mapping a menu category (`Name`, `Time`,
//! `Actions`, ...) to an ordered list of option descriptors. The command
//! model never validates against it; the catalog only feeds menus and the
//! option-name vocabulary used by completion.
//!
//! # Example
//!
//! ```
//! use findtui_catalog::{Catalog, Dialect};
//!
//! let catalog = Catalog::builtin(Dialect::Gnu)?;
//! assert!(catalog.get("-type").is_some());
//! assert!(catalog.is_action("delete"));
//! # Ok::<(), findtui_catalog::CatalogError>(())
//! ```
//!
//! Extra options can be layered on top from a TOML file:
//!
//! ```toml
//! [[categories.Name]]
//! name = "wholename"
//! kind = "path_input"
//! description = "full path matches pattern given"
//! ```

mod builtin;
mod catalog;
mod error;
mod option;

pub use builtin::Dialect;
pub use catalog::{ACTIONS_CATEGORY, Catalog, CatalogFile, VocabularyEntry};
pub use error::{CatalogError, CatalogResult};
pub use option::{OptionDescriptor, OptionEntry, OptionKind};
