//! TOML document loading and deep merging.
use std::path::Path;

use toml::{Table, Value};

use crate::error::ConfigError;

/// Read and parse one TOML document.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::InvalidSyntax`] if it is not valid TOML.
pub fn load_document(path: &Path) -> Result<Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    content
        .parse::<Table>()
        .map_err(|e| ConfigError::InvalidSyntax {
            file: path.display().to_string(),
            message: e.message().to_string(),
        })
}

/// Merge `overlay` into `base`.
///
/// Tables merge key by key, recursively. Arrays concatenate with `base`
/// items first. Any other pairing is resolved in favour of `overlay`.
pub fn deep_merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}

fn merge_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base), Value::Table(overlay)) => deep_merge(base, overlay),
        (Value::Array(base), Value::Array(overlay)) => base.extend(overlay),
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn table(s: &str) -> Table {
        s.parse::<Table>().unwrap()
    }

    #[test]
    fn arrays_concatenate_in_order() {
        let mut base = table("[[aliases]]\nfrom = \"ls -la\"\nto = \"ll\"\n");
        deep_merge(
            &mut base,
            table("[[aliases]]\nfrom = \"git status\"\nto = \"gs\"\n"),
        );
        let aliases = base["aliases"].as_array().unwrap();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases[0]["to"].as_str(), Some("ll"));
        assert_eq!(aliases[1]["to"].as_str(), Some("gs"));
    }

    #[test]
    fn scalars_are_overwritten_by_overlay() {
        let mut base = table("name = \"base\"\nkeep = 1\n");
        deep_merge(&mut base, table("name = \"overlay\"\n"));
        assert_eq!(base["name"].as_str(), Some("overlay"));
        assert_eq!(base["keep"].as_integer(), Some(1));
    }

    #[test]
    fn tables_merge_recursively() {
        let mut base = table("[meta]\nauthor = \"a\"\ntags = [\"x\"]\n");
        deep_merge(&mut base, table("[meta]\nversion = 2\ntags = [\"y\"]\n"));
        let meta = base["meta"].as_table().unwrap();
        assert_eq!(meta["author"].as_str(), Some("a"));
        assert_eq!(meta["version"].as_integer(), Some(2));
        assert_eq!(meta["tags"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn mismatched_kinds_take_overlay() {
        let mut base = table("value = [1, 2]\n");
        deep_merge(&mut base, table("value = \"flat\"\n"));
        assert_eq!(base["value"].as_str(), Some("flat"));
    }

    #[test]
    fn load_document_reads_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.toml");
        std::fs::write(&path, "[[paths]]\npath = \"/opt/bin\"\n").unwrap();
        let doc = load_document(&path).unwrap();
        assert!(doc.contains_key("paths"));
    }

    #[test]
    fn load_document_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_document_bad_syntax_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[paths]\npath = \n").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSyntax { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
