//! # case-vocab-import
//!
//! Resolves labelled columns of delimited text (spreadsheet exports, legacy
//! extracts) into [`case_vocab`] codes.
//!
//! Each bound column is matched against one vocabulary. Cells that carry an
//! unrecognized label are never fatal: they are reported as
//! [`UnresolvedLabel`] findings and the caller decides whether to reject the
//! record, prompt for a correction, or default the field.
//!
//! ```
//! use case_vocab_import::case_vocab::{Gender, RiskLevel, VocabularyKind};
//! use case_vocab_import::{ImportConfig, LabelResolver};
//!
//! let data = "name,性别,风险等级\n张三,男,高风险\n李四,女,未知\n";
//! let config = ImportConfig::default()
//!     .bind("性别", VocabularyKind::Gender)
//!     .bind("风险等级", VocabularyKind::RiskLevel);
//!
//! let report = LabelResolver::from_reader(data.as_bytes(), config)?.resolve_all()?;
//!
//! assert_eq!(report.rows[0].typed::<Gender>("性别"), Some(Gender::Male));
//! assert_eq!(report.rows[0].typed::<RiskLevel>("风险等级"), Some(RiskLevel::High));
//! assert_eq!(report.unresolved.len(), 1);
//! assert_eq!(report.unresolved[0].value, "未知");
//! # Ok::<(), case_vocab_import::ImportError>(())
//! ```

#![warn(missing_docs)]

mod resolver;
mod row;
mod types;

pub use resolver::LabelResolver;
pub use row::{ImportReport, ResolvedRow, ResolvedValue, UnresolvedLabel};
pub use types::{ColumnBinding, ImportConfig, ImportError, ImportResult, ImportStats};

// Re-export case-vocab for convenience
pub use case_vocab;
