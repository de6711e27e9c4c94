use async_trait::async_trait;
use contacts_service::error::StorageResult;
use contacts_service::models::{Id, Phone};
use contacts_service::repositories::PhoneRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock phone repository for testing.
///
/// Stores phones in memory without checking that the owner exists and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPhoneRepository {
    phones: Arc<Mutex<HashMap<Id, Phone>>>,
    next_id: Arc<Mutex<Id>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockPhoneRepository {
    /// Create a new empty MockPhoneRepository.
    pub fn new() -> Self {
        Self {
            phones: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(0)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a stored phone. It must carry an ID.
    pub fn add_phone(&self, phone: Phone) {
        let id = phone.id.expect("seeded phones need an id");
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(id);
        self.phones.lock().unwrap().insert(id, phone);
    }

    /// Peek at a stored phone without counting a call.
    pub fn stored(&self, id: Id) -> Option<Phone> {
        self.phones.lock().unwrap().get(&id).cloned()
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

impl Default for MockPhoneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhoneRepository for MockPhoneRepository {
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Phone>> {
        self.track_call("find_by_id");

        Ok(self.stored(id))
    }

    async fn find_all_by_owner(&self, contact_id: Id) -> StorageResult<Vec<Phone>> {
        self.track_call("find_all_by_owner");

        let phones = self.phones.lock().unwrap();
        let mut result: Vec<Phone> = phones
            .values()
            .filter(|r| r.contact_id == Some(contact_id))
            .cloned()
            .collect();
        result.sort_by_key(|r| r.id);
        Ok(result)
    }

    async fn save(&self, phone: &Phone) -> StorageResult<Phone> {
        self.track_call("save");

        let id = match phone.id {
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                *next_id
            }
        };
        let saved = Phone {
            id: Some(id),
            ..phone.clone()
        };
        self.phones.lock().unwrap().insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Id) -> StorageResult<()> {
        self.track_call("delete_by_id");

        self.phones.lock().unwrap().remove(&id);
        Ok(())
    }
}
