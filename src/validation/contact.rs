use super::{check_format, check_optional_format, require, ValidationRules};
use crate::error::ServiceResult;
use crate::models::Contact;

impl ValidationRules {
    /// Check a contact: name mandatory and well-formed, then CPF if present.
    pub fn validate_contact(&self, contact: &Contact) -> ServiceResult<()> {
        let name = require(contact.name.as_deref(), "name")?;
        check_format(name, &self.contact_name, "name")?;
        check_optional_format(contact.cpf.as_deref(), &self.cpf, "CPF")?;
        Ok(())
    }
}
