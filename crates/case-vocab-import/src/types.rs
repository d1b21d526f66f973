//! Import-specific types: errors, configuration and statistics.

use case_vocab::VocabularyKind;
use thiserror::Error;

/// Errors that can occur while resolving an import file.
///
/// Unrecognized labels are not errors; they are reported through
/// [`ImportReport::unresolved`](crate::ImportReport::unresolved).
#[derive(Error, Debug)]
pub enum ImportError {
    /// I/O error reading the import file.
    #[error("IO error reading import file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A bound column is missing from the header row.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// The configuration binds no columns.
    #[error("No columns bound to a vocabulary")]
    EmptyBindings,
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Associates a header column with the vocabulary its cells are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    /// Header name, matched exactly.
    pub column: String,
    /// Vocabulary used to resolve the column's cells.
    pub kind: VocabularyKind,
}

impl ColumnBinding {
    /// Creates a new binding.
    pub fn new(column: impl Into<String>, kind: VocabularyKind) -> Self {
        Self {
            column: column.into(),
            kind,
        }
    }
}

/// Configuration for label resolution.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Whether rows whose fields are all empty are skipped.
    pub skip_blank_rows: bool,
    /// Columns to resolve, in output order.
    pub bindings: Vec<ColumnBinding>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_blank_rows: true,
            bindings: Vec::new(),
        }
    }
}

impl ImportConfig {
    /// Creates a config for tab-separated exports.
    pub fn tab_separated() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Adds a column binding.
    pub fn bind(mut self, column: impl Into<String>, kind: VocabularyKind) -> Self {
        self.bindings.push(ColumnBinding::new(column, kind));
        self
    }
}

/// Statistics from resolving an import file.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImportStats {
    /// Data rows returned (blank rows excluded when skipped).
    pub total_rows: usize,
    /// Bound cells whose label resolved to a code.
    pub resolved_cells: usize,
    /// Bound cells that were empty or absent.
    pub missing_cells: usize,
    /// Bound cells carrying an unrecognized label.
    pub unresolved_cells: usize,
    /// Time taken to resolve in milliseconds.
    pub elapsed_ms: u64,
}

impl ImportStats {
    /// Returns the percentage of non-empty bound cells that resolved.
    pub fn resolution_rate(&self) -> f64 {
        let present = self.resolved_cells + self.unresolved_cells;
        if present == 0 {
            0.0
        } else {
            (self.resolved_cells as f64 / present as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_config_default() {
        let config = ImportConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(config.skip_blank_rows);
        assert!(config.bindings.is_empty());
    }

    #[test]
    fn test_import_config_tab_separated() {
        let config = ImportConfig::tab_separated().bind("性别", VocabularyKind::Gender);
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(
            config.bindings,
            vec![ColumnBinding::new("性别", VocabularyKind::Gender)]
        );
    }

    #[test]
    fn test_import_stats_resolution_rate() {
        let stats = ImportStats {
            resolved_cells: 3,
            unresolved_cells: 1,
            missing_cells: 10,
            ..Default::default()
        };
        assert!((stats.resolution_rate() - 75.0).abs() < 0.01);
        assert_eq!(ImportStats::default().resolution_rate(), 0.0);
    }

    #[test]
    fn test_import_error_display() {
        let err = ImportError::MissingColumn {
            column: "婚姻状况".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required column: 婚姻状况");
    }
}
