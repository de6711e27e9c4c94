//! Contacts Service - contact registry with validated addresses and phones.
//!
//! Keeps contacts together with the addresses and phones they own, rejects
//! malformed records, and refuses to read or change a child record through a
//! contact that does not own it. The service is exposed over the Model
//! Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Controlled vocabularies (address, street and phone types)
//! - **models**: Contact, address and phone records
//! - **error**: Error types for the service, storage and configuration
//! - **config**: Configuration management from environment variables
//! - **validation**: Field format rules and per-record validators
//! - **ownership**: The contact/child ownership guard
//! - **repositories**: Storage traits and the in-memory store
//! - **services**: The contact service business operations
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod ownership;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use domain::{AddressType, PhoneType, StreetType};
pub use error::{ConfigError, ContactError, StorageError};
pub use models::{Address, Contact, Id, Phone};
pub use repositories::InMemoryStore;
pub use server::ContactsMcpServer;
pub use services::{ContactService, ContactServiceImpl};
pub use validation::ValidationRules;
