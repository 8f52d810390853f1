// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-place cleanup of runner-mangled benchmark XML
//!
//! Benchmark runners escape `<` in emitted labels and encode square
//! brackets as doubled braces so they survive templating. Both are undone
//! here before parsing. The file rewrite is destructive and idempotent:
//! none of the substitutions can create a new match site, so a second pass
//! is a no-op.

use std::fs;
use std::path::Path;

use crate::error::{GrowplotError, Result};

/// Undoes the runner's escaping: `&lt;` becomes `<`, `{{` becomes `[`,
/// and `}}` becomes `]`.
#[must_use]
pub fn normalize_content(input: &str) -> String {
    input.replace("&lt;", "<").replace("{{", "[").replace("}}", "]")
}

/// Rewrites `path` in place with [`normalize_content`] applied.
///
/// # Errors
///
/// Returns [`GrowplotError::Io`] when the file cannot be read or written.
pub fn normalize_file(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|source| GrowplotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, normalize_content(&text)).map_err(|source| GrowplotError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use proptest::prelude::*;

    use super::{normalize_content, normalize_file};

    #[test]
    fn unescapes_lt_entity() {
        assert_eq!(normalize_content("a &lt; b"), "a < b");
    }

    #[test]
    fn rewrites_double_braces_to_brackets() {
        assert_eq!(normalize_content("{{1, 2, 3}}"), "[1, 2, 3]");
    }

    #[test]
    fn leaves_clean_input_untouched() {
        let text = "<mean value=\"10\"/>";
        assert_eq!(normalize_content(text), text);
    }

    #[test]
    fn file_rewrite_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.bench.xml");
        fs::write(&path, "<Data value=\"{{1, 2}}\"/> &lt;").unwrap();

        normalize_file(&path).unwrap();
        let once = fs::read(&path).unwrap();
        normalize_file(&path).unwrap();
        let twice = fs::read(&path).unwrap();

        assert_eq!(once, twice);
        assert_eq!(String::from_utf8(once).unwrap(), "<Data value=\"[1, 2]\"/> <");
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(text in ".*") {
            let once = normalize_content(&text);
            prop_assert_eq!(normalize_content(&once), once);
        }
    }
}
