//! Error types for swatch-core.

use thiserror::Error;

/// Errors produced by color parsing, table construction and matching.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A reference table could not be constructed from the given entries.
    #[error("invalid color table: {0}")]
    InvalidTable(String),

    /// A requested built-in table name was not recognized.
    #[error("unknown color table: {0}")]
    UnknownTable(String),

    /// The reference table has no entries, so no match is possible.
    #[error("color table is empty")]
    EmptyTable,

    /// The distance to a reference entry was NaN or infinite.
    #[error("non-finite color distance for '{name}'")]
    NonFiniteDistance { name: String },

    /// Reading a table resource failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_message() {
        let err = ColorError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_table_includes_message() {
        let err = ColorError::InvalidTable("entry 3: empty name".into());
        let msg = format!("{err}");
        assert!(msg.contains("entry 3"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_table_includes_name() {
        let err = ColorError::UnknownTable("pantone".into());
        let msg = format!("{err}");
        assert!(msg.contains("pantone"), "missing name in: {msg}");
    }

    #[test]
    fn empty_table_displays_readable_message() {
        let msg = ColorError::EmptyTable.to_string();
        assert!(msg.contains("empty"), "got: {msg}");
    }

    #[test]
    fn non_finite_distance_includes_entry_name() {
        let err = ColorError::NonFiniteDistance {
            name: "red".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("red"), "missing entry name in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
