//! `pre-autoload-dump` plugin for project file overrides.
//!
//! The plugin is written against a small host surface ([`Host`], [`Io`]) so
//! the same code runs inside any dependency-manager front end. On
//! [`Hook::PreAutoloadDump`] it reads `extra.override_files`, matches every
//! override file with its vendor file and hands an updated autoload
//! configuration back to the host.
//!
//! ```json
//! {
//!     "extra": {
//!         "override_files": {
//!             "path": "overrides",
//!             "base_vendor_dir": "monolog/monolog/src",
//!             "generate_origin_file": true
//!         }
//!     }
//! }
//! ```

pub mod dispatch;
pub mod hooks;
pub mod host;
pub mod io;
pub mod plugin;

pub use dispatch::{HookDispatcher, Plugin};
pub use hooks::{Hook, HookPriority};
pub use host::Host;
pub use io::{BufferIo, Io, LineKind, Verbosity};
pub use plugin::OverrideFilesPlugin;
