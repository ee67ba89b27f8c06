//! Resolves the reference table from `--table` / `--table-file`.

use crate::error::CliError;
use std::path::Path;
use swatch_core::ColorTable;

/// Loads the table to match against.
///
/// A table file takes precedence over the built-in table name.
pub fn load_table(name: &str, file: Option<&Path>) -> Result<ColorTable, CliError> {
    match file {
        Some(path) => {
            let table = ColorTable::from_json_file(path)?;
            tracing::info!(path = %path.display(), entries = table.len(), "loaded color table file");
            Ok(table)
        }
        None => {
            let table = ColorTable::from_name(name)?;
            tracing::debug!(table = name, entries = table.len(), "using built-in color table");
            Ok(table)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_builtin_table_by_name() {
        let table = load_table("basic", None).unwrap();
        assert_eq!(table.len(), 16);
    }

    #[test]
    fn unknown_builtin_name_is_input_error() {
        let err = load_table("pantone", None).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn table_file_overrides_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fabrics.json");
        fs::write(
            &path,
            r##"[{"name": "denim", "hex": "#1560bd"}, {"name": "khaki", "hex": "#c3b091"}]"##,
        )
        .unwrap();

        let table = load_table("css", Some(&path)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].name, "denim");
    }

    #[test]
    fn table_file_accepts_hex_to_name_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookup.json");
        fs::write(&path, r##"{"#000000": "black", "#ffffff": "white"}"##).unwrap();

        let table = load_table("css", Some(&path)).unwrap();
        assert_eq!(table.entries()[1].name, "white");
    }

    #[test]
    fn missing_table_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_table("css", Some(&path)).unwrap_err();
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn malformed_table_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r##"[{"name": "oops", "hex": "#12345"}]"##).unwrap();
        let err = load_table("css", Some(&path)).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("oops"), "got: {err}");
    }
}
