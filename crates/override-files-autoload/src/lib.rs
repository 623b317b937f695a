//! Override resolution and autoload rewriting.
//!
//! The pipeline runs in four steps:
//!
//! 1. [`OverrideDiscovery`] walks the override directory and pairs every file
//!    with the vendor file it mirrors, failing on the first dangling override.
//! 2. Each [`OverrideEntry`] reads its vendor file once to learn the declared
//!    namespace and class ([`introspect`]).
//! 3. With origin delegation, [`OriginFileGenerator`] writes an
//!    `Origin<Name>` copy next to each vendor file.
//! 4. [`AutoloadRewriter`] excludes the vendor files from the classmap and
//!    maps their namespaces to the override directories.
//!
//! # Example
//!
//! ```rust,no_run
//! use override_files_autoload::{AutoloadRewriter, OverrideDiscovery, OverrideRoots, Strategy};
//! use override_files_config::AutoloadConfig;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let roots = OverrideRoots::resolve(Path::new("."), "overrides", Path::new("vendor"))?;
//! let entries = OverrideDiscovery::new(Arc::new(roots)).discover()?;
//! let outcome = AutoloadRewriter::new(Strategy::PlainOverride)
//!     .rewrite(&entries, AutoloadConfig::default())?;
//! # Ok::<(), override_files_core::Error>(())
//! ```

pub mod discovery;
pub mod entry;
pub mod introspect;
pub mod origin;
pub mod rewriter;

pub use discovery::OverrideDiscovery;
pub use entry::{EntryRecord, ORIGIN_PREFIX, OverrideEntry, OverrideRoots, origin_path_for};
pub use introspect::{extract_class_name, extract_namespace};
pub use origin::{OriginFileGenerator, rename_class};
pub use rewriter::{
    AutoloadRewriter, NamespaceConflict, RewriteOutcome, SkipReason, SkippedEntry, Strategy,
};
