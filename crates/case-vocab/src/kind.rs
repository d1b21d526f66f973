//! Runtime selection of a vocabulary.
//!
//! Typed code is preferred wherever the vocabulary is known at compile time.
//! [`VocabularyKind`] and [`AnyCode`] exist for consumers that only learn
//! which vocabulary applies at runtime, such as a column mapping loaded with
//! a spreadsheet.
//!
//! # Examples
//!
//! ```
//! use case_vocab::kind::{AnyCode, VocabularyKind};
//! use case_vocab::EntryMethod;
//!
//! let kind = VocabularyKind::from_name("entry_method").unwrap();
//! let code = kind.resolve("高铁").unwrap();
//! assert_eq!(code, AnyCode::EntryMethod(EntryMethod::HighSpeedRail));
//! assert_eq!(code.label(), "高铁");
//! assert_eq!(code.downcast::<EntryMethod>(), Some(EntryMethod::HighSpeedRail));
//!
//! assert_eq!(kind.resolve("步行"), None);
//! ```

use crate::{
    DocumentType, EducationLevel, EntryMethod, Gender, MaritalStatus, RiskLevel, Vocabulary,
};

/// One of the declared vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VocabularyKind {
    /// [`Gender`].
    Gender,
    /// [`EducationLevel`].
    EducationLevel,
    /// [`MaritalStatus`].
    MaritalStatus,
    /// [`EntryMethod`].
    EntryMethod,
    /// [`DocumentType`].
    DocumentType,
    /// [`RiskLevel`].
    RiskLevel,
}

impl VocabularyKind {
    /// Every vocabulary kind.
    pub const ALL: [VocabularyKind; 6] = [
        Self::Gender,
        Self::EducationLevel,
        Self::MaritalStatus,
        Self::EntryMethod,
        Self::DocumentType,
        Self::RiskLevel,
    ];

    /// Returns the vocabulary name (e.g. `"risk_level"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Gender => Gender::NAME,
            Self::EducationLevel => EducationLevel::NAME,
            Self::MaritalStatus => MaritalStatus::NAME,
            Self::EntryMethod => EntryMethod::NAME,
            Self::DocumentType => DocumentType::NAME,
            Self::RiskLevel => RiskLevel::NAME,
        }
    }

    /// Looks up a kind by its exact vocabulary name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns true if codes of this vocabulary carry a severity rank.
    pub fn is_ranked(self) -> bool {
        matches!(self, Self::RiskLevel)
    }

    /// Number of declared codes.
    pub fn entry_count(self) -> usize {
        match self {
            Self::Gender => Gender::ALL.len(),
            Self::EducationLevel => EducationLevel::ALL.len(),
            Self::MaritalStatus => MaritalStatus::ALL.len(),
            Self::EntryMethod => EntryMethod::ALL.len(),
            Self::DocumentType => DocumentType::ALL.len(),
            Self::RiskLevel => RiskLevel::ALL.len(),
        }
    }

    /// Returns all labels of this vocabulary in declaration order.
    pub fn labels(self) -> Vec<&'static str> {
        fn collect<V: Vocabulary>() -> Vec<&'static str> {
            V::entries().map(|(_, label)| label).collect()
        }

        match self {
            Self::Gender => collect::<Gender>(),
            Self::EducationLevel => collect::<EducationLevel>(),
            Self::MaritalStatus => collect::<MaritalStatus>(),
            Self::EntryMethod => collect::<EntryMethod>(),
            Self::DocumentType => collect::<DocumentType>(),
            Self::RiskLevel => collect::<RiskLevel>(),
        }
    }

    /// Resolves a display label within this vocabulary.
    ///
    /// Same matching rules as [`Vocabulary::from_label`].
    pub fn resolve(self, label: &str) -> Option<AnyCode> {
        match self {
            Self::Gender => Gender::from_label(label).map(AnyCode::Gender),
            Self::EducationLevel => EducationLevel::from_label(label).map(AnyCode::EducationLevel),
            Self::MaritalStatus => MaritalStatus::from_label(label).map(AnyCode::MaritalStatus),
            Self::EntryMethod => EntryMethod::from_label(label).map(AnyCode::EntryMethod),
            Self::DocumentType => DocumentType::from_label(label).map(AnyCode::DocumentType),
            Self::RiskLevel => RiskLevel::from_label(label).map(AnyCode::RiskLevel),
        }
    }
}

impl std::fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A code from any vocabulary, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnyCode {
    /// A [`Gender`] code.
    Gender(Gender),
    /// An [`EducationLevel`] code.
    EducationLevel(EducationLevel),
    /// A [`MaritalStatus`] code.
    MaritalStatus(MaritalStatus),
    /// An [`EntryMethod`] code.
    EntryMethod(EntryMethod),
    /// A [`DocumentType`] code.
    DocumentType(DocumentType),
    /// A [`RiskLevel`] code.
    RiskLevel(RiskLevel),
}

impl AnyCode {
    /// Returns the vocabulary this code belongs to.
    pub fn kind(self) -> VocabularyKind {
        match self {
            Self::Gender(_) => VocabularyKind::Gender,
            Self::EducationLevel(_) => VocabularyKind::EducationLevel,
            Self::MaritalStatus(_) => VocabularyKind::MaritalStatus,
            Self::EntryMethod(_) => VocabularyKind::EntryMethod,
            Self::DocumentType(_) => VocabularyKind::DocumentType,
            Self::RiskLevel(_) => VocabularyKind::RiskLevel,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gender(code) => code.label(),
            Self::EducationLevel(code) => code.label(),
            Self::MaritalStatus(code) => code.label(),
            Self::EntryMethod(code) => code.label(),
            Self::DocumentType(code) => code.label(),
            Self::RiskLevel(code) => code.label(),
        }
    }

    /// Returns the symbolic code string.
    pub fn code(self) -> &'static str {
        match self {
            Self::Gender(code) => code.code(),
            Self::EducationLevel(code) => code.code(),
            Self::MaritalStatus(code) => code.code(),
            Self::EntryMethod(code) => code.code(),
            Self::DocumentType(code) => code.code(),
            Self::RiskLevel(code) => code.code(),
        }
    }

    /// Returns the typed code if it belongs to vocabulary `V`.
    pub fn downcast<V: Vocabulary>(self) -> Option<V> {
        if self.kind().name() == V::NAME {
            V::from_code(self.code())
        } else {
            None
        }
    }
}

impl std::fmt::Display for AnyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

macro_rules! impl_from_code {
    ($($ty:ident),+) => {
        $(
            impl From<$ty> for AnyCode {
                fn from(code: $ty) -> Self {
                    Self::$ty(code)
                }
            }
        )+
    };
}

impl_from_code!(Gender, EducationLevel, MaritalStatus, EntryMethod, DocumentType, RiskLevel);
