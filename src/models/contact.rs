//! Contact model representing a person in the registry.

use super::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contact: the owner of addresses and phones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Identifier, absent until the store assigns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// Full name, upper case
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Date of birth (wire format: dd-MM-yyyy)
    #[serde(skip_serializing_if = "Option::is_none", with = "birthdate_format")]
    pub birthdate: Option<NaiveDate>,

    /// Brazilian national taxpayer number, 11 digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
}

impl Contact {
    /// Create an unsaved contact with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }
}

/// Serde adapter for `Option<NaiveDate>` in `dd-MM-yyyy` form.
mod birthdate_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
