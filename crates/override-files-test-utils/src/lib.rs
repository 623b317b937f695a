//! Testing utilities for override-files.
//!
//! # Modules
//!
//! - [`fixtures`]: PHP sources and manifests shaped like real packages
//! - [`temp_project`]: Temporary project creation and management
//!
//! # Example
//!
//! ```rust,no_run
//! use override_files_test_utils::fixtures::Fixtures;
//! use override_files_test_utils::temp_project::TempProject;
//!
//! let project = TempProject::new()
//!     .with_composer_json(Fixtures::override_composer_json("overrides", false))
//!     .with_vendor_file("acme/lib/src/Foo.php", Fixtures::php_class("Acme\\Lib", "Foo"))
//!     .with_override_file("overrides/acme/lib/src/Foo.php", Fixtures::php_class("Acme\\Lib", "Foo"))
//!     .build()
//!     .unwrap();
//! assert!(project.file_exists("vendor/acme/lib/src/Foo.php"));
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod fixtures;
pub mod temp_project;

/// Re-export commonly used testing utilities.
pub mod prelude {
    pub use crate::fixtures::Fixtures;
    pub use crate::temp_project::TempProject;
}
