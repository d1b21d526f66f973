//! Resolved rows and the aggregate import report.

use case_vocab::{AnyCode, Vocabulary, VocabularyKind};

use crate::types::ImportStats;

/// One bound cell after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedValue {
    /// Header name of the bound column.
    pub column: String,
    /// Vocabulary the cell was resolved against.
    pub kind: VocabularyKind,
    /// Cell text as read. `None` when the cell was empty or absent.
    pub raw: Option<String>,
    /// Resolved code. `None` when the cell was missing or unrecognized.
    pub code: Option<AnyCode>,
}

impl ResolvedValue {
    /// Returns true if the cell was empty or absent.
    pub fn is_missing(&self) -> bool {
        self.raw.is_none()
    }

    /// Returns true if the cell had text that matched no label.
    pub fn is_unresolved(&self) -> bool {
        self.raw.is_some() && self.code.is_none()
    }
}

/// A data row with every bound column resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedRow {
    /// 1-based line of the source file on which the row starts. The header
    /// is line 1, and empty lines keep their place in the count.
    pub line: usize,
    /// One value per binding, in binding order.
    pub values: Vec<ResolvedValue>,
}

impl ResolvedRow {
    /// Returns the value for a bound column.
    pub fn get(&self, column: &str) -> Option<&ResolvedValue> {
        self.values.iter().find(|value| value.column == column)
    }

    /// Returns the resolved code for a bound column.
    pub fn code(&self, column: &str) -> Option<AnyCode> {
        self.get(column).and_then(|value| value.code)
    }

    /// Returns the resolved code for a bound column as vocabulary `V`.
    pub fn typed<V: Vocabulary>(&self, column: &str) -> Option<V> {
        self.code(column).and_then(AnyCode::downcast::<V>)
    }

    /// Returns true if no bound cell carries an unrecognized label.
    pub fn is_fully_resolved(&self) -> bool {
        !self.values.iter().any(ResolvedValue::is_unresolved)
    }
}

/// A cell whose text matched no label of its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnresolvedLabel {
    /// Source file line of the row holding the cell.
    pub line: usize,
    /// Header name of the column.
    pub column: String,
    /// Vocabulary the text was checked against.
    pub kind: VocabularyKind,
    /// The unrecognized text, unmodified.
    pub value: String,
}

impl std::fmt::Display for UnresolvedLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: column '{}' has unknown {} label '{}'",
            self.line, self.column, self.kind, self.value
        )
    }
}

/// Output of [`LabelResolver::resolve_all`](crate::LabelResolver::resolve_all).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImportReport {
    /// Every returned row.
    pub rows: Vec<ResolvedRow>,
    /// Every cell that carried an unrecognized label.
    pub unresolved: Vec<UnresolvedLabel>,
    /// Resolution statistics.
    pub stats: ImportStats,
}

impl ImportReport {
    /// Returns true if every non-empty bound cell resolved.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Records one row, updating statistics and collecting findings.
    pub(crate) fn record(&mut self, row: ResolvedRow) {
        self.stats.total_rows += 1;

        for value in &row.values {
            match (&value.raw, value.code) {
                (None, _) => self.stats.missing_cells += 1,
                (Some(_), Some(_)) => self.stats.resolved_cells += 1,
                (Some(raw), None) => {
                    self.stats.unresolved_cells += 1;
                    tracing::debug!(
                        line = row.line,
                        column = %value.column,
                        vocabulary = value.kind.name(),
                        "Unrecognized label '{}'",
                        raw
                    );
                    self.unresolved.push(UnresolvedLabel {
                        line: row.line,
                        column: value.column.clone(),
                        kind: value.kind,
                        value: raw.clone(),
                    });
                }
            }
        }

        self.rows.push(row);
    }
}
