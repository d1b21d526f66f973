//! Marital status vocabulary.

vocabulary! {
    /// Marital status of a person.
    pub enum MaritalStatus as "marital_status" {
        /// Never married.
        Unmarried => ("UNMARRIED", "未婚"),
        /// Currently married.
        Married => ("MARRIED", "已婚"),
        /// Divorced.
        Divorced => ("DIVORCED", "离异"),
        /// Widowed.
        Widowed => ("WIDOWED", "丧偶"),
    }
}
