//! Education level vocabulary.

vocabulary! {
    /// Highest completed level of education.
    ///
    /// Declaration order follows the schooling ladder, but the vocabulary is
    /// not ranked: codes compare for equality only.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_vocab::EducationLevel;
    ///
    /// assert_eq!(EducationLevel::from_label("本科"), Some(EducationLevel::Bachelor));
    /// assert_eq!(EducationLevel::Master.label(), "硕士研究生");
    /// ```
    pub enum EducationLevel as "education_level" {
        /// No formal schooling.
        Illiterate => ("ILLITERATE", "文盲"),
        /// Primary school.
        PrimarySchool => ("PRIMARY_SCHOOL", "小学"),
        /// Junior high school.
        JuniorHighSchool => ("JUNIOR_HIGH_SCHOOL", "初中"),
        /// Senior high school.
        SeniorHighSchool => ("SENIOR_HIGH_SCHOOL", "高中"),
        /// Technical secondary school.
        TechnicalSecondary => ("TECHNICAL_SECONDARY", "中专"),
        /// Junior college (three-year diploma).
        JuniorCollege => ("JUNIOR_COLLEGE", "大专"),
        /// Undergraduate degree.
        Bachelor => ("BACHELOR", "本科"),
        /// Master's degree.
        Master => ("MASTER", "硕士研究生"),
        /// Doctoral degree.
        Doctorate => ("DOCTORATE", "博士研究生"),
    }
}
