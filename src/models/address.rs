//! Address model: a postal address owned by a contact.

use super::Id;
use crate::domain::{AddressType, StreetType};
use serde::{Deserialize, Serialize};

/// An address belonging to exactly one contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    /// Identifier, absent until the store assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// Owning contact; required once persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Id>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_type: Option<StreetType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// Number in the street; free text ("S/N", "120A")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Brazilian CEP, `00000-000`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

impl Address {
    /// Create an unsaved, unowned address with its mandatory fields.
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: Some(street.into()),
            city: Some(city.into()),
            ..Default::default()
        }
    }

    pub fn owned_by(mut self, contact_id: Id) -> Self {
        self.contact_id = Some(contact_id);
        self
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }
}
