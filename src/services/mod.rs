//! Application service layer.
//!
//! Services hold the business rules (validation, ownership and existence
//! checks) and sit between the MCP handlers and the repositories.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};

// Re-export common types used by services
pub use crate::models::{Address, Contact, Id, Phone};
