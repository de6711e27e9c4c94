//! Data models for the contact registry.
//!
//! A contact owns zero or more addresses and phones. Children hold a plain
//! `contact_id` back-reference to their owner; a contact never holds its
//! children in memory, they are queried from the store on demand.

pub mod address;
pub mod contact;
pub mod phone;

pub use address::Address;
pub use contact::Contact;
pub use phone::Phone;

/// Identifier assigned by the store when a record is first saved.
pub type Id = i64;
