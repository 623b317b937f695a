//! Origin file generation.
//!
//! An origin file is a copy of a vendor file whose class has been renamed to
//! `Origin<Name>` and made non-final, so an override can extend or wrap the
//! implementation it replaces.

use crate::entry::{ORIGIN_PREFIX, OverrideEntry, origin_path_for};
use override_files_core::{Error, OriginStep, Result};
use std::path::PathBuf;
use tracing::debug;

/// Writes origin copies of vendor files.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginFileGenerator;

impl OriginFileGenerator {
    /// Create a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Write the origin file for `entry`, returning its path.
    ///
    /// The vendor file is copied byte for byte, read back, renamed and written
    /// again. Running twice yields the same file.
    ///
    /// # Errors
    /// Returns [`Error::UnparseableSource`] if the vendor file declares no
    /// class, or [`Error::OriginGeneration`] naming the step that failed.
    pub fn generate(&self, entry: &OverrideEntry) -> Result<PathBuf> {
        let Some(class_name) = entry.class_name() else {
            return Err(Error::UnparseableSource {
                path: entry.vendor_file().to_path_buf(),
                what: "class",
            });
        };
        let origin_file = entry
            .origin_file()
            .map_or_else(|| origin_path_for(entry.vendor_file()), |p| p.to_path_buf());

        std::fs::copy(entry.vendor_file(), &origin_file)
            .map_err(|e| Error::origin(&origin_file, OriginStep::Copy, e))?;
        let source = std::fs::read(&origin_file)
            .map_err(|e| Error::origin(&origin_file, OriginStep::ReadBack, e))?;
        let renamed = rename_class(&source, class_name);
        std::fs::write(&origin_file, renamed)
            .map_err(|e| Error::origin(&origin_file, OriginStep::WriteBack, e))?;

        debug!(
            origin_file = %origin_file.display(),
            class = %class_name,
            "generated origin file"
        );
        Ok(origin_file)
    }
}

/// Rename the declaration of `class_name` to `Origin<class_name>` and drop
/// its `final` modifier.
///
/// Works on raw bytes: everything outside the declaration is kept as is,
/// whatever its encoding. Only whole identifiers are renamed: `class
/// FooFactory` is left alone when renaming `Foo`.
#[must_use]
pub fn rename_class(source: &[u8], class_name: &str) -> Vec<u8> {
    let declaration = format!("class {ORIGIN_PREFIX}{class_name}");
    let renamed = replace_token(
        source,
        format!("class {class_name}").as_bytes(),
        declaration.as_bytes(),
    );
    strip_final(&renamed, declaration.as_bytes())
}

/// Replace every whole-word occurrence of `from` with `to`.
fn replace_token(source: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(source.len() + to.len());
    let mut rest = source;
    while let Some(idx) = find_token(rest, from) {
        out.extend_from_slice(&rest[..idx]);
        out.extend_from_slice(to);
        rest = &rest[idx + from.len()..];
    }
    out.extend_from_slice(rest);
    out
}

/// Position of the first whole-word occurrence of `token` in `source`.
fn find_token(source: &[u8], token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    source
        .windows(token.len())
        .enumerate()
        .filter(|(_, window)| *window == token)
        .map(|(idx, _)| idx)
        .find(|&idx| {
            let before = idx.checked_sub(1).map(|i| source[i]);
            let after = source.get(idx + token.len()).copied();
            !before.is_some_and(is_identifier_byte) && !after.is_some_and(is_identifier_byte)
        })
}

const fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b == b'\\' || !b.is_ascii()
}

/// Drop `final` from the modifiers preceding `declaration` on its line.
fn strip_final(source: &[u8], declaration: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(source.len());
    for line in source.split_inclusive(|&b| b == b'\n') {
        if let Some(idx) = find_token(line, declaration) {
            let (head, tail) = line.split_at(idx);
            let modifiers: Vec<&[u8]> = head
                .split(u8::is_ascii_whitespace)
                .filter(|m| !m.is_empty())
                .collect();
            let only_modifiers = modifiers
                .iter()
                .all(|m| matches!(*m, b"final" | b"readonly" | b"abstract"));
            if only_modifiers && modifiers.contains(&b"final".as_slice()) {
                let indent = head.iter().take_while(|b| b.is_ascii_whitespace()).count();
                out.extend_from_slice(&head[..indent]);
                for modifier in modifiers.iter().filter(|m| **m != b"final".as_slice()) {
                    out.extend_from_slice(modifier);
                    out.push(b' ');
                }
                out.extend_from_slice(tail);
                continue;
            }
        }
        out.extend_from_slice(line);
    }
    out
}
