//! Domain vocabularies.
//!
//! Fixed-vocabulary enumerations used by addresses and phones. Each value
//! carries a stable code and a display label; the label is what callers send
//! and receive, so the tables here are part of the external contract.

mod labeled;

pub mod address_type;
pub mod errors;
pub mod phone_type;
pub mod street_type;

pub use address_type::AddressType;
pub use errors::DomainError;
pub use labeled::{by_code, optional_by_code, Vocabulary};
pub use phone_type::PhoneType;
pub use street_type::StreetType;
