//! Risk level vocabulary.
//!
//! The only ranked vocabulary. Severity is carried by an explicit rank per
//! code, so reordering the declarations does not change how levels compare.

vocabulary! {
    /// Assessed risk level of a case.
    ///
    /// Levels are totally ordered by [`rank`](RiskLevel::rank), from
    /// [`Low`](RiskLevel::Low) (rank 0) to [`Critical`](RiskLevel::Critical)
    /// (rank 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use case_vocab::RiskLevel;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(RiskLevel::Low.compare(RiskLevel::High), Ordering::Less);
    /// assert!(RiskLevel::from_label("高风险").unwrap().is_at_least(RiskLevel::Medium));
    ///
    /// let mut levels = vec![RiskLevel::Critical, RiskLevel::Low, RiskLevel::High];
    /// levels.sort();
    /// assert_eq!(levels, vec![RiskLevel::Low, RiskLevel::High, RiskLevel::Critical]);
    /// ```
    pub enum RiskLevel as "risk_level" {
        /// Low risk.
        Low => ("LOW", "低风险", 0),
        /// Medium risk.
        Medium => ("MEDIUM", "中风险", 1),
        /// High risk.
        High => ("HIGH", "高风险", 2),
        /// Critical risk.
        Critical => ("CRITICAL", "极高风险", 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::assert_well_formed;
    use crate::{RankedVocabulary, Vocabulary};
    use std::cmp::Ordering;

    #[allow(dead_code)]
    mod reversed {
        vocabulary! {
            /// Declared most severe first, so position and discriminant both
            /// run against rank.
            pub enum Alert as "alert" {
                Red => ("RED", "红色", 2),
                Orange => ("ORANGE", "橙色", 1),
                Blue => ("BLUE", "蓝色", 0),
            }
        }
    }

    use reversed::Alert;

    #[test]
    fn test_risk_level_well_formed() {
        assert_well_formed::<RiskLevel>();
    }

    #[test]
    fn test_risk_level_ranks_are_dense() {
        let mut ranks: Vec<u8> = RiskLevel::ALL.iter().map(|level| level.rank()).collect();
        ranks.sort_unstable();
        let expected: Vec<u8> = (0..RiskLevel::ALL.len() as u8).collect();
        assert_eq!(ranks, expected);

        for &level in RiskLevel::ALL {
            assert_eq!(RiskLevel::from_rank(level.rank()), Some(level));
        }
        assert_eq!(RiskLevel::from_rank(RiskLevel::ALL.len() as u8), None);
    }

    #[test]
    fn test_risk_level_ord_matches_rank() {
        for &a in RiskLevel::ALL {
            for &b in RiskLevel::ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()), "{a:?} vs {b:?}");
                assert_eq!(a.partial_cmp(&b), Some(a.compare(b)));
            }
        }
        assert!(RiskLevel::Low.rank() < RiskLevel::Medium.rank());
        assert!(RiskLevel::Medium.rank() < RiskLevel::High.rank());
        assert!(RiskLevel::High.rank() < RiskLevel::Critical.rank());
    }

    #[test]
    fn test_ordering_ignores_declaration_order() {
        assert_eq!(Alert::ALL, &[Alert::Red, Alert::Orange, Alert::Blue]);
        assert_eq!(Alert::Red as u8, 0);
        assert_eq!(Alert::Red.rank(), 2);

        assert!(Alert::Blue < Alert::Orange);
        assert!(Alert::Orange < Alert::Red);
        assert!(Alert::Red.is_at_least(Alert::Orange));
        assert!(!Alert::Blue.is_at_least(Alert::Orange));
        assert_eq!(<Alert as RankedVocabulary>::from_rank(0), Some(Alert::Blue));

        let mut alerts = Alert::ALL.to_vec();
        alerts.sort();
        assert_eq!(alerts, vec![Alert::Blue, Alert::Orange, Alert::Red]);
        assert_eq!(Alert::ALL.iter().max(), Some(&Alert::Red));
    }

    #[test]
    fn test_risk_level_compare() {
        assert_eq!(RiskLevel::Low.compare(RiskLevel::High), Ordering::Less);
        assert_eq!(
            RiskLevel::Critical.compare(RiskLevel::Critical),
            Ordering::Equal
        );
        assert_eq!(RiskLevel::High.compare(RiskLevel::Medium), Ordering::Greater);
        assert_eq!(RiskLevel::Low.cmp(&RiskLevel::High), Ordering::Less);
        assert!(RiskLevel::Critical > RiskLevel::Medium);
        assert_eq!(
            RiskLevel::ALL.iter().max().copied(),
            Some(RiskLevel::Critical)
        );
    }

    #[test]
    fn test_risk_level_threshold() {
        assert!(RiskLevel::Medium.is_at_least(RiskLevel::Medium));
        assert!(RiskLevel::Critical.is_at_least(RiskLevel::Medium));
        assert!(!RiskLevel::Low.is_at_least(RiskLevel::Medium));
    }

    #[test]
    fn test_risk_level_labels() {
        assert_eq!(RiskLevel::from_label("低风险"), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::from_label("极高风险"), Some(RiskLevel::Critical));
        assert_eq!(RiskLevel::from_label("高"), None);
        assert_eq!(RiskLevel::Medium.to_string(), "中风险");
    }
}
