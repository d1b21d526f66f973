//! Declaration macro shared by every vocabulary.

/// Declares a closed vocabulary enum.
///
/// Each variant is declared as `Variant => ("CODE", "label")`. The macro
/// generates the enum, its forward tables, the lazily built reverse index,
/// and the `Vocabulary`, `Display` and `FromStr` impls.
///
/// A ranked vocabulary declares `Variant => ("CODE", "label", rank)` and also
/// gets `RankedVocabulary`, plus `Ord` by rank. Declaration order and
/// discriminants play no part in ordering.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $vocab_name:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($code:literal, $label:literal, $rank:literal)
            ),+ $(,)?
        }
    ) => {
        vocabulary! {
            $(#[$meta])*
            $vis enum $name as $vocab_name {
                $(
                    $(#[$variant_meta])*
                    $variant => ($code, $label)
                ),+
            }
        }

        impl $name {
            /// Returns the rank of this code (0 = least severe).
            pub const fn rank(self) -> u8 {
                match self {
                    $(Self::$variant => $rank,)+
                }
            }

            /// Returns the code holding `rank`, or `None` if no code does.
            pub fn from_rank(rank: u8) -> Option<Self> {
                <Self as $crate::RankedVocabulary>::from_rank(rank)
            }

            /// Compares two codes by rank.
            pub fn compare(self, other: Self) -> ::std::cmp::Ordering {
                <Self as $crate::RankedVocabulary>::compare(self, other)
            }

            /// Returns true if this code ranks at or above `threshold`.
            pub fn is_at_least(self, threshold: Self) -> bool {
                <Self as $crate::RankedVocabulary>::is_at_least(self, threshold)
            }
        }

        impl $crate::RankedVocabulary for $name {
            fn rank(self) -> u8 {
                $name::rank(self)
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                <Self as $crate::RankedVocabulary>::compare(*self, *other)
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $vocab_name:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($code:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "serde", serde(rename = $code))]
                $variant,
            )+
        }

        impl $name {
            /// Returns the display label for this code.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Returns the symbolic code string (e.g. `"HIGH_SPEED_RAIL"`).
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Looks up a code by its exact display label.
            ///
            /// Matching is case-sensitive with no trimming. Returns `None` if
            /// no entry carries this label.
            pub fn from_label(label: &str) -> Option<Self> {
                <Self as $crate::Vocabulary>::from_label(label)
            }

            /// Looks up a code by a label that may be missing.
            ///
            /// A missing label and an unrecognized label both return `None`.
            pub fn from_optional_label(label: Option<&str>) -> Option<Self> {
                <Self as $crate::Vocabulary>::from_optional_label(label)
            }
        }

        impl $crate::Vocabulary for $name {
            const NAME: &'static str = $vocab_name;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                $name::label(self)
            }

            fn code(self) -> &'static str {
                $name::code(self)
            }

            fn index() -> &'static $crate::LabelIndex<Self> {
                static INDEX: ::once_cell::sync::Lazy<$crate::LabelIndex<$name>> =
                    ::once_cell::sync::Lazy::new($crate::LabelIndex::build);
                &INDEX
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownLabel;

            /// Parses a display label, rejecting anything not declared.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| {
                    $crate::UnknownLabel::new(<Self as $crate::Vocabulary>::NAME, s)
                })
            }
        }
    };
}
