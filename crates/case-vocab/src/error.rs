//! Error type for strict label parsing.

/// A label that no entry of the named vocabulary carries.
///
/// Returned by the `FromStr` impls. Plain lookups return `None` instead.
///
/// # Examples
///
/// ```
/// use case_vocab::Gender;
///
/// let err = "other".parse::<Gender>().unwrap_err();
/// assert_eq!(err.vocabulary(), "gender");
/// assert_eq!(err.label(), "other");
/// assert_eq!(err.to_string(), "unknown gender label: 'other'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    vocabulary: &'static str,
    label: String,
}

impl UnknownLabel {
    /// Creates an error for `label` rejected by `vocabulary`.
    pub fn new(vocabulary: &'static str, label: impl Into<String>) -> Self {
        Self {
            vocabulary,
            label: label.into(),
        }
    }

    /// Name of the vocabulary that rejected the label.
    pub fn vocabulary(&self) -> &'static str {
        self.vocabulary
    }

    /// The rejected text, unmodified.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} label: '{}'", self.vocabulary, self.label)
    }
}

impl std::error::Error for UnknownLabel {}
