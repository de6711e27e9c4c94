//! Phone model: a telephone number owned by a contact.

use super::Id;
use crate::domain::PhoneType;
use serde::{Deserialize, Serialize};

/// A phone number belonging to exactly one contact.
///
/// The phone type is always present because it decides which number format
/// applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// Identifier, absent until the store assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// Owning contact; required once persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Id>,

    pub phone_type: PhoneType,

    /// Country calling code (DDI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddi: Option<String>,

    /// Area code (DDD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Phone {
    /// Create an unsaved, unowned phone.
    pub fn new(
        phone_type: PhoneType,
        ddi: impl Into<String>,
        ddd: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            contact_id: None,
            phone_type,
            ddi: Some(ddi.into()),
            ddd: Some(ddd.into()),
            number: Some(number.into()),
            extension: None,
        }
    }

    pub fn owned_by(mut self, contact_id: Id) -> Self {
        self.contact_id = Some(contact_id);
        self
    }
}
