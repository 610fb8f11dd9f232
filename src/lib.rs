//! # Twig
//!
//! `twig` renders a directory's structure as an indented text tree, similar to the
//! `tree` utility, with a selectable traversal order, an optional depth limit, and
//! an optional left-aligned size column.
//!
//! The whole build is a single blocking call ([`twig`]): it walks the root
//! directory according to the configured [`Mode`], produces one display line per
//! entry with box-drawing prefixes that encode nesting, and pairs every
//! non-separator line with metadata (path, file flag, formatted size or child
//! count).
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use twig::{Mode, TwigBuilder, twig};
//!
//! let options = TwigBuilder::new(".")
//!     .mode(Mode::FileFirst)
//!     .max_depth(3)
//!     .show_size(true)
//!     .build();
//!
//! let result = twig(options).expect("Failed to build tree");
//!
//! print!("{}", result.text);
//! for record in &result.records {
//!     if let Some(meta) = &record.meta {
//!         println!("{} (file: {})", meta.path.display(), meta.is_file);
//!     }
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::twig;
pub use error::TwigError;
pub use options::{Mode, TwigBuilder, TwigOptions};
pub use tree::human_size;
pub use types::{LineMeta, LineRecord, TwigResult};
