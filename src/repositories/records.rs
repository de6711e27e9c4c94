//! On-disk form of child records.
//!
//! Vocabulary fields are written by code rather than label. Two StreetType
//! codes share the label "Avenida", so only the code reads back as the value
//! that was stored.

use crate::domain::{by_code, optional_by_code, AddressType, PhoneType, StreetType};
use crate::models::{Address, Id, Phone};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_id: Option<Id>,
    #[serde(default, with = "optional_by_code", skip_serializing_if = "Option::is_none")]
    address_type: Option<AddressType>,
    #[serde(default, with = "optional_by_code", skip_serializing_if = "Option::is_none")]
    street_type: Option<StreetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zip_code: Option<String>,
}

impl From<&Address> for StoredAddress {
    fn from(address: &Address) -> Self {
        let address = address.clone();
        Self {
            id: address.id,
            contact_id: address.contact_id,
            address_type: address.address_type,
            street_type: address.street_type,
            street: address.street,
            number: address.number,
            complement: address.complement,
            neighborhood: address.neighborhood,
            city: address.city,
            zip_code: address.zip_code,
        }
    }
}

impl From<StoredAddress> for Address {
    fn from(stored: StoredAddress) -> Self {
        Self {
            id: stored.id,
            contact_id: stored.contact_id,
            address_type: stored.address_type,
            street_type: stored.street_type,
            street: stored.street,
            number: stored.number,
            complement: stored.complement,
            neighborhood: stored.neighborhood,
            city: stored.city,
            zip_code: stored.zip_code,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPhone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_id: Option<Id>,
    #[serde(with = "by_code")]
    phone_type: PhoneType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ddi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ddd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
}

impl From<&Phone> for StoredPhone {
    fn from(phone: &Phone) -> Self {
        let phone = phone.clone();
        Self {
            id: phone.id,
            contact_id: phone.contact_id,
            phone_type: phone.phone_type,
            ddi: phone.ddi,
            ddd: phone.ddd,
            number: phone.number,
            extension: phone.extension,
        }
    }
}

impl From<StoredPhone> for Phone {
    fn from(stored: StoredPhone) -> Self {
        Self {
            id: stored.id,
            contact_id: stored.contact_id,
            phone_type: stored.phone_type,
            ddi: stored.ddi,
            ddd: stored.ddd,
            number: stored.number,
            extension: stored.extension,
        }
    }
}

/// `serde(with)` adapter for the address table.
pub(crate) mod addresses {
    use super::{Address, Id, StoredAddress};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        table: &BTreeMap<Id, Address>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(table.iter().map(|(id, a)| (id, StoredAddress::from(a))))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Id, Address>, D::Error> {
        let stored = BTreeMap::<Id, StoredAddress>::deserialize(deserializer)?;
        Ok(stored.into_iter().map(|(id, a)| (id, a.into())).collect())
    }
}

/// `serde(with)` adapter for the phone table.
pub(crate) mod phones {
    use super::{Id, Phone, StoredPhone};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        table: &BTreeMap<Id, Phone>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(table.iter().map(|(id, p)| (id, StoredPhone::from(p))))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Id, Phone>, D::Error> {
        let stored = BTreeMap::<Id, StoredPhone>::deserialize(deserializer)?;
        Ok(stored.into_iter().map(|(id, p)| (id, p.into())).collect())
    }
}
