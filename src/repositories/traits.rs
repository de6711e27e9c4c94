use crate::error::StorageResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (in-memory, file-backed, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by ID.
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Contact>>;

    /// Retrieve every stored contact, ordered by ID.
    async fn find_all(&self) -> StorageResult<Vec<Contact>>;

    /// Insert the contact when it has no ID (assigning one), otherwise
    /// overwrite the stored record. Returns the stored form.
    async fn save(&self, contact: &Contact) -> StorageResult<Contact>;

    /// Delete a contact together with every address and phone it owns.
    async fn delete_by_id(&self, id: Id) -> StorageResult<()>;
}

/// Repository for managing addresses.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Retrieve a single address by ID.
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Address>>;

    /// Get the addresses owned by a contact, ordered by ID.
    async fn find_all_by_owner(&self, contact_id: Id) -> StorageResult<Vec<Address>>;

    /// Insert or overwrite an address. The owner must exist.
    async fn save(&self, address: &Address) -> StorageResult<Address>;

    /// Delete an address.
    async fn delete_by_id(&self, id: Id) -> StorageResult<()>;
}

/// Repository for managing phones.
#[async_trait]
pub trait PhoneRepository: Send + Sync {
    /// Retrieve a single phone by ID.
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Phone>>;

    /// Get the phones owned by a contact, ordered by ID.
    async fn find_all_by_owner(&self, contact_id: Id) -> StorageResult<Vec<Phone>>;

    /// Insert or overwrite a phone. The owner must exist.
    async fn save(&self, phone: &Phone) -> StorageResult<Phone>;

    /// Delete a phone.
    async fn delete_by_id(&self, id: Id) -> StorageResult<()>;
}
