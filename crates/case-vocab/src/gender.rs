//! Gender vocabulary.

vocabulary! {
    /// Gender of a person.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_vocab::Gender;
    ///
    /// assert_eq!(Gender::Male.label(), "男");
    /// assert_eq!(Gender::from_label("女"), Some(Gender::Female));
    /// assert_eq!(Gender::from_label("other"), None);
    /// assert_eq!(Gender::from_optional_label(None), None);
    /// ```
    pub enum Gender as "gender" {
        /// Male.
        Male => ("MALE", "男"),
        /// Female.
        Female => ("FEMALE", "女"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::assert_well_formed;
    use crate::Vocabulary;

    #[test]
    fn test_gender_well_formed() {
        assert_well_formed::<Gender>();
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::Male.label(), "男");
        assert_eq!(Gender::Female.label(), "女");
        assert_eq!(Gender::Female.to_string(), "女");
        assert_eq!(Gender::Male.code(), "MALE");
    }

    #[test]
    fn test_gender_from_label() {
        assert_eq!(Gender::from_label("男"), Some(Gender::Male));
        assert_eq!(Gender::from_label("女"), Some(Gender::Female));
        assert_eq!(Gender::from_label("other"), None);
        assert_eq!(Gender::from_optional_label(None), None);
        assert_eq!(Gender::from_optional_label(Some("女")), Some(Gender::Female));
    }

    #[test]
    fn test_gender_exact_match() {
        assert_eq!(Gender::from_label("男 "), None);
        assert_eq!(Gender::from_label(" 男"), None);
        assert_eq!(Gender::from_label("MALE"), None);
        assert_eq!(Gender::from_code("MALE"), Some(Gender::Male));
        assert_eq!(Gender::from_code("male"), None);
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("男".parse::<Gender>(), Ok(Gender::Male));
        let err = "男性".parse::<Gender>().unwrap_err();
        assert_eq!(err.vocabulary(), "gender");
        assert_eq!(err.label(), "男性");
    }
}
