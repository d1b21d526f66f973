//! # case-vocab
//!
//! Controlled vocabularies for case-management records.
//!
//! Each vocabulary is a closed set of symbolic codes. Every code carries one
//! display label (Simplified Chinese) and one stable code string. Labels can
//! be looked up in both directions; reverse lookup never fails loudly and
//! returns `None` for anything it does not recognize.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Codes serialize as their code string (e.g. `"HIGH_SPEED_RAIL"`).
//!
//! ## Usage
//!
//! ```rust
//! use case_vocab::{EntryMethod, Gender, RiskLevel, Vocabulary};
//!
//! assert_eq!(Gender::Male.label(), "男");
//! assert_eq!(Gender::from_label("女"), Some(Gender::Female));
//! assert_eq!(Gender::from_label("other"), None);
//! assert_eq!(Gender::from_optional_label(None), None);
//!
//! assert_eq!(EntryMethod::from_label("高铁"), Some(EntryMethod::HighSpeedRail));
//! assert_eq!(EntryMethod::HighSpeedRail.to_string(), "高铁");
//!
//! assert!(RiskLevel::High.is_at_least(RiskLevel::Medium));
//! assert!(RiskLevel::Low < RiskLevel::Critical);
//!
//! // Generic code works across every vocabulary
//! fn labels<V: Vocabulary>() -> Vec<&'static str> {
//!     V::entries().map(|(_, label)| label).collect()
//! }
//! assert_eq!(labels::<Gender>(), vec!["男", "女"]);
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! case-vocab = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod document;
mod education;
mod entry_method;
mod error;
mod gender;
pub mod kind;
mod marital;
mod risk;
mod vocabulary;

// Re-export all public types at crate root
pub use document::DocumentType;
pub use education::EducationLevel;
pub use entry_method::EntryMethod;
pub use error::UnknownLabel;
pub use gender::Gender;
pub use kind::{AnyCode, VocabularyKind};
pub use marital::MaritalStatus;
pub use risk::RiskLevel;
pub use vocabulary::{LabelIndex, RankedVocabulary, Vocabulary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _gender = Gender::Female;
        let _education = EducationLevel::Bachelor;
        let _marital = MaritalStatus::Married;
        let _entry = EntryMethod::Airplane;
        let _document = DocumentType::Passport;
        let _risk = RiskLevel::Critical;
        let _kind = VocabularyKind::RiskLevel;
    }

    #[test]
    fn test_vocabularies_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Gender>();
        assert_send_sync::<EducationLevel>();
        assert_send_sync::<MaritalStatus>();
        assert_send_sync::<EntryMethod>();
        assert_send_sync::<DocumentType>();
        assert_send_sync::<RiskLevel>();
        assert_send_sync::<AnyCode>();
    }

    #[test]
    fn test_concurrent_reverse_lookup() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    EducationLevel::ALL
                        .iter()
                        .all(|&level| EducationLevel::from_label(level.label()) == Some(level))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let method = EntryMethod::HighSpeedRail;
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, "\"HIGH_SPEED_RAIL\"");
        let parsed: EntryMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(method, parsed);
    }
}
