//! Core types and utilities for override-files.
//!
//! This crate provides the foundation shared by the other crates:
//! - The error type every fatal condition is reported through
//! - Path resolution across the project, override and vendor roots
//! - JSON helpers backed by sonic-rs

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
mod json;
pub mod paths;

pub use error::{Error, OriginStep, Result};
pub use json::{from_json, to_json, to_json_pretty};
