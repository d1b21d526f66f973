//! Entry (travel) method vocabulary.

vocabulary! {
    /// Means of transport by which a person arrived.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_vocab::EntryMethod;
    ///
    /// let method = EntryMethod::from_label("高铁");
    /// assert_eq!(method, Some(EntryMethod::HighSpeedRail));
    /// assert_eq!(EntryMethod::HighSpeedRail.code(), "HIGH_SPEED_RAIL");
    /// ```
    pub enum EntryMethod as "entry_method" {
        /// Commercial or private flight.
        Airplane => ("AIRPLANE", "飞机"),
        /// High-speed rail.
        HighSpeedRail => ("HIGH_SPEED_RAIL", "高铁"),
        /// Conventional train.
        Train => ("TRAIN", "火车"),
        /// Long-distance coach.
        Coach => ("COACH", "大巴"),
        /// Self-driven vehicle.
        SelfDriving => ("SELF_DRIVING", "自驾"),
        /// Ship or ferry.
        Ship => ("SHIP", "轮船"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::assert_well_formed;
    use crate::Vocabulary;

    #[test]
    fn test_entry_method_well_formed() {
        assert_well_formed::<EntryMethod>();
    }

    #[test]
    fn test_entry_method_roundtrip_all_labels() {
        let labels = ["飞机", "高铁", "火车", "大巴", "自驾", "轮船"];
        assert_eq!(EntryMethod::ALL.len(), labels.len());

        for label in labels {
            let method = EntryMethod::from_label(label).unwrap();
            assert_eq!(method.label(), label);
            assert_eq!(method.to_string(), label);
        }
    }

    #[test]
    fn test_entry_method_high_speed_rail() {
        assert_eq!(
            EntryMethod::from_label("高铁"),
            Some(EntryMethod::HighSpeedRail)
        );
        assert_eq!(EntryMethod::from_label("动车"), None);
    }
}
