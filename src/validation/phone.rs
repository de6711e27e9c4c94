use super::{check_format, require, ValidationRules};
use crate::domain::PhoneType;
use crate::error::ServiceResult;
use crate::models::Phone;

impl ValidationRules {
    /// Check a phone.
    ///
    /// All three mandatory parts are checked first (DDI, DDD, number), then
    /// their formats in the same order. The number format follows the phone
    /// type.
    pub fn validate_phone(&self, phone: &Phone) -> ServiceResult<()> {
        let ddi = require(phone.ddi.as_deref(), "DDI")?;
        let ddd = require(phone.ddd.as_deref(), "DDD")?;
        let number = require(phone.number.as_deref(), "phone number")?;

        check_format(ddi, &self.ddi, "DDI")?;
        check_format(ddd, &self.ddd, "DDD")?;

        let number_rule = match phone.phone_type {
            PhoneType::Fix => &self.fix_number,
            PhoneType::Mobile => &self.mobile_number,
        };
        check_format(number, number_rule, "phone number")
    }
}
