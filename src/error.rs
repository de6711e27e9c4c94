//! Error types for the contacts service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::models::Id;
use thiserror::Error;

/// Errors raised by the contact service when a request is rejected.
///
/// Every variant except [`ContactError::Storage`] is produced by the service
/// itself; the transport layer decides how each kind is presented.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The input record was absent
    #[error("{0} record was not supplied")]
    RecordNotSupplied(String),

    /// An identifier was supplied on an add request
    #[error("{0} ID must not be supplied for new records")]
    IdSuppliedForNew(String),

    /// A required field is missing or blank
    #[error("{0} is mandatory")]
    Mandatory(String),

    /// A field failed its format rule, or a required identifier is absent
    #[error("{0} is invalid")]
    Invalid(String),

    /// No stored record matches the identifier
    #[error("Resource for {resource} with id = {id} was not found")]
    ResourceNotFound { resource: String, id: Id },

    /// A child record is not owned by the scoping contact
    #[error("supplied {supplied} does not belong to {owner}")]
    SuppliedDoesNotBelongTo { supplied: String, owner: String },

    /// The persistence collaborator failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ContactError {
    pub fn record_not_supplied(element: impl Into<String>) -> Self {
        Self::RecordNotSupplied(element.into())
    }

    pub fn id_supplied_for_new(element: impl Into<String>) -> Self {
        Self::IdSuppliedForNew(element.into())
    }

    pub fn mandatory(element: impl Into<String>) -> Self {
        Self::Mandatory(element.into())
    }

    pub fn invalid(element: impl Into<String>) -> Self {
        Self::Invalid(element.into())
    }

    pub fn not_found(resource: impl Into<String>, id: Id) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
            id,
        }
    }

    pub fn does_not_belong_to(supplied: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::SuppliedDoesNotBelongTo {
            supplied: supplied.into(),
            owner: owner.into(),
        }
    }

    /// Whether the caller sent something the service refuses to accept.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::RecordNotSupplied(_)
                | Self::IdSuppliedForNew(_)
                | Self::Mandatory(_)
                | Self::Invalid(_)
                | Self::SuppliedDoesNotBelongTo { .. }
        )
    }

    /// Whether a referenced record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}

/// Errors that can occur inside the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The store state lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// A record was handed to the store in a shape it cannot persist
    #[error("Storage error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ContactError
pub type ServiceResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
