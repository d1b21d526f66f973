//! Identity document type vocabulary.

vocabulary! {
    /// Type of identity document presented by a person.
    pub enum DocumentType as "document_type" {
        /// Mainland resident identity card.
        ResidentIdCard => ("RESIDENT_ID_CARD", "居民身份证"),
        /// Passport.
        Passport => ("PASSPORT", "护照"),
        /// Mainland travel permit for Hong Kong and Macao residents.
        HongKongMacaoPermit => ("HONG_KONG_MACAO_PERMIT", "港澳居民来往内地通行证"),
        /// Mainland travel permit for Taiwan residents.
        TaiwanPermit => ("TAIWAN_PERMIT", "台湾居民来往大陆通行证"),
        /// Foreigner's permanent residence ID card.
        ForeignerPermanentResidence => ("FOREIGNER_PERMANENT_RESIDENCE", "外国人永久居留身份证"),
        /// Any other document.
        Other => ("OTHER", "其他证件"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::assert_well_formed;
    use crate::Vocabulary;

    #[test]
    fn test_document_type_well_formed() {
        assert_well_formed::<DocumentType>();
    }

    #[test]
    fn test_document_type_conversion() {
        assert_eq!(DocumentType::from_label("护照"), Some(DocumentType::Passport));
        assert_eq!(
            DocumentType::from_label("港澳居民来往内地通行证"),
            Some(DocumentType::HongKongMacaoPermit)
        );
        assert_eq!(DocumentType::from_label("身份证"), None);
        assert_eq!(DocumentType::from_code("OTHER"), Some(DocumentType::Other));
    }
}
