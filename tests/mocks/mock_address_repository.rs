use async_trait::async_trait;
use contacts_service::error::StorageResult;
use contacts_service::models::{Address, Id};
use contacts_service::repositories::AddressRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address repository for testing.
///
/// Stores addresses in memory without checking that the owner exists and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAddressRepository {
    addresses: Arc<Mutex<HashMap<Id, Address>>>,
    next_id: Arc<Mutex<Id>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressRepository {
    /// Create a new empty MockAddressRepository.
    pub fn new() -> Self {
        Self {
            addresses: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(0)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a stored address. It must carry an ID.
    pub fn add_address(&self, address: Address) {
        let id = address.id.expect("seeded addresses need an id");
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(id);
        self.addresses.lock().unwrap().insert(id, address);
    }

    /// Peek at a stored address without counting a call.
    pub fn stored(&self, id: Id) -> Option<Address> {
        self.addresses.lock().unwrap().get(&id).cloned()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockAddressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for MockAddressRepository {
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Address>> {
        self.track_call("find_by_id");

        Ok(self.stored(id))
    }

    async fn find_all_by_owner(&self, contact_id: Id) -> StorageResult<Vec<Address>> {
        self.track_call("find_all_by_owner");

        let addresses = self.addresses.lock().unwrap();
        let mut result: Vec<Address> = addresses
            .values()
            .filter(|r| r.contact_id == Some(contact_id))
            .cloned()
            .collect();
        result.sort_by_key(|r| r.id);
        Ok(result)
    }

    async fn save(&self, address: &Address) -> StorageResult<Address> {
        self.track_call("save");

        let id = match address.id {
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                *next_id
            }
        };
        let saved = Address {
            id: Some(id),
            ..address.clone()
        };
        self.addresses.lock().unwrap().insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Id) -> StorageResult<()> {
        self.track_call("delete_by_id");

        self.addresses.lock().unwrap().remove(&id);
        Ok(())
    }
}
