//! PhoneType vocabulary.

use super::labeled::labeled_enum;

labeled_enum! {
    /// Landline or mobile. Selects the number format rule.
    pub enum PhoneType ("phone type") {
        Fix = "FIX" => "Fixo",
        Mobile = "MOBILE" => "Móvel",
    }
}
