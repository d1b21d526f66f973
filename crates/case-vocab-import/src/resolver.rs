//! Streaming label resolver.
//!
//! Reads delimited text record-by-record and resolves every bound column
//! through its vocabulary.
//!
//! Records end at LF. A CR before the LF is dropped from the last field, so
//! CRLF exports resolve the same as LF ones and line numbers stay exact.

use std::fs::File;
use std::io::{BufReader, Chain, Read};
use std::path::Path;
use std::time::Instant;

use csv::{Reader, ReaderBuilder, StringRecord, Terminator};

use crate::row::{ImportReport, ResolvedRow, ResolvedValue};
use crate::types::{ColumnBinding, ImportConfig, ImportError, ImportResult};

/// A streaming resolver for labelled import files.
///
/// Yields one [`ResolvedRow`] per data row, tagged with the file line the
/// row starts on. Cells are matched exactly as read: no trimming and no case
/// folding. An empty cell, or a row too short to reach the column, counts as
/// missing.
///
/// # Example
///
/// ```no_run
/// use case_vocab_import::case_vocab::VocabularyKind;
/// use case_vocab_import::{ImportConfig, LabelResolver};
///
/// let config = ImportConfig::tab_separated()
///     .bind("交通方式", VocabularyKind::EntryMethod);
///
/// for row in LabelResolver::from_path("arrivals.tsv", config)? {
///     let row = row?;
///     println!("{}: {:?}", row.line, row.code("交通方式"));
/// }
/// # Ok::<(), case_vocab_import::ImportError>(())
/// ```
pub struct LabelResolver<R: Read> {
    reader: Reader<Source<R>>,
    config: ImportConfig,
    /// Header position of each binding, in binding order.
    positions: Vec<usize>,
    rows_read: usize,
}

/// Input with a trailing LF appended, so the final record is always
/// terminated and its line counted.
type Source<R> = Chain<R, &'static [u8]>;

impl LabelResolver<BufReader<File>> {
    /// Creates a new resolver from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or a bound column is
    /// missing from its header.
    pub fn from_path<P: AsRef<Path>>(path: P, config: ImportConfig) -> ImportResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read> LabelResolver<R> {
    /// Creates a new resolver from a reader.
    pub fn from_reader(reader: R, config: ImportConfig) -> ImportResult<Self> {
        if config.bindings.is_empty() {
            return Err(ImportError::EmptyBindings);
        }

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .trim(csv::Trim::None)
            .from_reader(reader.chain(&b"\n"[..]));

        let positions = Self::locate_columns(&mut csv_reader, &config.bindings)?;

        Ok(Self {
            reader: csv_reader,
            config,
            positions,
            rows_read: 0,
        })
    }

    /// Finds the header position of every bound column.
    fn locate_columns(
        reader: &mut Reader<Source<R>>,
        bindings: &[ColumnBinding],
    ) -> ImportResult<Vec<usize>> {
        let headers = reader.headers()?;
        // Handle UTF-8 BOM at start of file
        let names: Vec<&str> = (0..headers.len())
            .filter_map(|i| field(headers, i))
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    name.trim_start_matches('\u{feff}')
                } else {
                    name
                }
            })
            .collect();

        bindings
            .iter()
            .map(|binding| {
                names
                    .iter()
                    .position(|name| *name == binding.column)
                    .ok_or_else(|| {
                        tracing::warn!("Bound column '{}' not found in header", binding.column);
                        ImportError::MissingColumn {
                            column: binding.column.clone(),
                        }
                    })
            })
            .collect()
    }

    /// Returns the number of records read so far, blank rows included.
    ///
    /// Empty lines are not records and are never counted.
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Returns the resolver configuration.
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Resolves every remaining row into a report.
    ///
    /// Stops at the first CSV or I/O error.
    pub fn resolve_all(mut self) -> ImportResult<ImportReport> {
        let start = Instant::now();
        let mut report = ImportReport::default();

        for row in self.by_ref() {
            report.record(row?);
        }

        report.stats.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Resolved {} rows: {} cells resolved, {} unresolved, {} missing",
            report.stats.total_rows,
            report.stats.resolved_cells,
            report.stats.unresolved_cells,
            report.stats.missing_cells
        );

        Ok(report)
    }

    /// File line on which the last record read starts. The header is line 1.
    fn record_line(&self, record: &StringRecord) -> usize {
        let embedded: u64 = record
            .iter()
            .map(|cell| cell.matches('\n').count() as u64)
            .sum();
        // The reader sits just past the record's terminating LF.
        self.reader.position().line().saturating_sub(1 + embedded) as usize
    }

    fn resolve_record(&self, record: &StringRecord, line: usize) -> ResolvedRow {
        let values = self
            .config
            .bindings
            .iter()
            .zip(&self.positions)
            .map(|(binding, &position)| {
                let raw = field(record, position)
                    .filter(|cell| !cell.is_empty())
                    .map(str::to_string);
                let code = raw.as_deref().and_then(|cell| binding.kind.resolve(cell));
                ResolvedValue {
                    column: binding.column.clone(),
                    kind: binding.kind,
                    raw,
                    code,
                }
            })
            .collect();

        ResolvedRow {
            line,
            values,
        }
    }
}

impl<R: Read> Iterator for LabelResolver<R> {
    type Item = ImportResult<ResolvedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.rows_read += 1;

                    let blank = (0..record.len())
                        .filter_map(|i| field(&record, i))
                        .all(str::is_empty);
                    if self.config.skip_blank_rows && blank {
                        continue;
                    }

                    let line = self.record_line(&record);
                    return Some(Ok(self.resolve_record(&record, line)));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Returns a field, dropping the CR of a CRLF line ending from the last one.
fn field(record: &StringRecord, index: usize) -> Option<&str> {
    let cell = record.get(index)?;
    if index + 1 == record.len() {
        Some(cell.strip_suffix('\r').unwrap_or(cell))
    } else {
        Some(cell)
    }
}
