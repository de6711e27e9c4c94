//! AddressType vocabulary.

use super::labeled::labeled_enum;

labeled_enum! {
    /// The purpose of an address.
    pub enum AddressType ("address type") {
        Both = "BOTH" => "Residencial ou Comercial",
        Residential = "RESIDENTIAL" => "Residencial",
        Commercial = "COMMERCIAL" => "Comercial",
        Official = "OFFICIAL" => "Endereço Oficial",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_type_labels() {
        assert_eq!(AddressType::Both.label(), "Residencial ou Comercial");
        assert_eq!(AddressType::Residential.label(), "Residencial");
        assert_eq!(AddressType::Commercial.label(), "Comercial");
        assert_eq!(AddressType::Official.label(), "Endereço Oficial");
        assert_eq!(AddressType::Official.code(), "OFFICIAL");
    }

    #[test]
    fn test_address_type_serializes_as_label() {
        let json = serde_json::to_string(&AddressType::Official).unwrap();
        assert_eq!(json, "\"Endereço Oficial\"");
    }

    #[test]
    fn test_address_type_deserialization() {
        let value: AddressType = serde_json::from_str("\"Comercial\"").unwrap();
        assert_eq!(value, AddressType::Commercial);
    }

    #[test]
    fn test_address_type_rejects_code() {
        let result: Result<AddressType, _> = serde_json::from_str("\"COMMERCIAL\"");
        assert!(result.is_err());
    }
}
