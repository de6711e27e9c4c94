use super::{check_optional_format, require, ValidationRules};
use crate::error::ServiceResult;
use crate::models::Address;

impl ValidationRules {
    /// Check an address: street, city, then zip code if present.
    pub fn validate_address(&self, address: &Address) -> ServiceResult<()> {
        require(address.street.as_deref(), "street")?;
        require(address.city.as_deref(), "city")?;
        check_optional_format(address.zip_code.as_deref(), &self.zip_code, "zip code")?;
        Ok(())
    }
}
