//! The generic vocabulary abstraction.
//!
//! Every concrete vocabulary implements [`Vocabulary`], which provides label
//! lookup in both directions on top of a precomputed [`LabelIndex`]. The
//! risk-level vocabulary additionally implements [`RankedVocabulary`].

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A closed, immutable set of (code, label) pairs.
///
/// Implementors are generated by the `vocabulary!` macro; only [`label`],
/// [`code`] and [`index`] are required, all lookups are derived from them.
///
/// [`label`]: Vocabulary::label
/// [`code`]: Vocabulary::code
/// [`index`]: Vocabulary::index
///
/// # Examples
///
/// ```
/// use case_vocab::{MaritalStatus, Vocabulary};
///
/// assert_eq!(MaritalStatus::NAME, "marital_status");
/// assert_eq!(MaritalStatus::ALL.len(), 4);
/// assert_eq!(
///     <MaritalStatus as Vocabulary>::from_label("已婚"),
///     Some(MaritalStatus::Married)
/// );
/// ```
pub trait Vocabulary: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Vocabulary name, in snake case.
    const NAME: &'static str;

    /// Every code in declaration order.
    const ALL: &'static [Self];

    /// Returns the display label for this code.
    fn label(self) -> &'static str;

    /// Returns the symbolic code string.
    fn code(self) -> &'static str;

    /// Returns the process-wide reverse index for this vocabulary.
    fn index() -> &'static LabelIndex<Self>;

    /// Looks up a code by its exact display label.
    fn from_label(label: &str) -> Option<Self> {
        Self::index().by_label(label)
    }

    /// Looks up a code by a label that may be missing.
    fn from_optional_label(label: Option<&str>) -> Option<Self> {
        label.and_then(Self::from_label)
    }

    /// Looks up a code by its exact code string.
    fn from_code(code: &str) -> Option<Self> {
        Self::index().by_code(code)
    }

    /// Iterates over (code, label) pairs in declaration order.
    fn entries() -> impl Iterator<Item = (Self, &'static str)> {
        Self::ALL.iter().map(|&code| (code, code.label()))
    }
}

/// A vocabulary whose codes carry an explicit severity rank.
///
/// Ranks form a dense 0-based sequence. Comparison goes through the rank
/// only, never through variant position.
pub trait RankedVocabulary: Vocabulary {
    /// Returns the rank of this code. Lower means less severe.
    fn rank(self) -> u8;

    /// Looks up the code holding the given rank.
    fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.rank() == rank)
    }

    /// Compares two codes by rank.
    fn compare(self, other: Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Returns true if this code ranks at or above `threshold`.
    fn is_at_least(self, threshold: Self) -> bool {
        self.compare(threshold) != Ordering::Less
    }
}

/// Precomputed reverse lookup tables for one vocabulary.
///
/// Built once from [`Vocabulary::ALL`]. If two entries ever shared a label
/// or code, the first declared entry would win.
pub struct LabelIndex<C> {
    by_label: HashMap<&'static str, C>,
    by_code: HashMap<&'static str, C>,
}

impl<C: Vocabulary> LabelIndex<C> {
    /// Builds the index from the vocabulary's declared entries.
    pub fn build() -> Self {
        let mut by_label = HashMap::with_capacity(C::ALL.len());
        let mut by_code = HashMap::with_capacity(C::ALL.len());

        for &entry in C::ALL {
            debug_assert!(
                !by_label.contains_key(entry.label()),
                "duplicate label '{}' in vocabulary {}",
                entry.label(),
                C::NAME
            );
            by_label.entry(entry.label()).or_insert(entry);
            by_code.entry(entry.code()).or_insert(entry);
        }

        Self { by_label, by_code }
    }

    /// Returns the code carrying exactly this label.
    pub fn by_label(&self, label: &str) -> Option<C> {
        self.by_label.get(label).copied()
    }

    /// Returns the code with exactly this code string.
    pub fn by_code(&self, code: &str) -> Option<C> {
        self.by_code.get(code).copied()
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// Returns true if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }
}

impl<C> fmt::Debug for LabelIndex<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelIndex")
            .field("labels", &self.by_label.len())
            .field("codes", &self.by_code.len())
            .finish()
    }
}

/// Checks the invariants every vocabulary must hold.
///
/// Shared by the per-vocabulary test modules.
#[cfg(test)]
pub(crate) fn assert_well_formed<V: Vocabulary>() {
    use std::collections::HashSet;

    assert!(!V::ALL.is_empty(), "{} has no entries", V::NAME);

    let mut labels = HashSet::new();
    let mut codes = HashSet::new();
    let mut variants = HashSet::new();
    for &entry in V::ALL {
        assert!(variants.insert(entry), "{:?} declared twice", entry);
        assert!(!entry.label().is_empty(), "{:?} has an empty label", entry);
        assert!(labels.insert(entry.label()), "duplicate label {}", entry.label());
        assert!(codes.insert(entry.code()), "duplicate code {}", entry.code());

        assert_eq!(V::from_label(entry.label()), Some(entry));
        assert_eq!(V::from_optional_label(Some(entry.label())), Some(entry));
        assert_eq!(V::from_code(entry.code()), Some(entry));
    }

    assert_eq!(V::index().len(), V::ALL.len());
    assert_eq!(V::from_optional_label(None), None);
    assert_eq!(V::from_label(""), None);
    assert_eq!(V::from_label("no-such-label-xyz"), None);
}
