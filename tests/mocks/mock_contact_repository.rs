use async_trait::async_trait;
use contacts_service::error::{StorageError, StorageResult};
use contacts_service::models::{Contact, Id};
use contacts_service::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
/// Deleting a contact here does not cascade; use the real store for that.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<Id, Contact>>>,
    next_id: Arc<Mutex<Id>>,
    failing: Arc<AtomicBool>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(0)),
            failing: Arc::new(AtomicBool::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a stored contact. It must carry an ID.
    pub fn add_contact(&self, contact: Contact) {
        let id = contact.id.expect("seeded contacts need an id");
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(id);
        self.contacts.lock().unwrap().insert(id, contact);
    }

    /// Make every later call fail with a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
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

    /// Number of stored contacts.
    pub fn count(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) -> StorageResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Other("mock contact store is down".to_string()));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Contact>> {
        self.track_call("find_by_id")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.get(&id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Contact>> {
        self.track_call("find_all")?;

        let contacts = self.contacts.lock().unwrap();
        let mut result: Vec<Contact> = contacts.values().cloned().collect();
        result.sort_by_key(|c| c.id);
        Ok(result)
    }

    async fn save(&self, contact: &Contact) -> StorageResult<Contact> {
        self.track_call("save")?;

        let id = match contact.id {
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.lock().unwrap();
                *next_id += 1;
                *next_id
            }
        };
        let saved = Contact {
            id: Some(id),
            ..contact.clone()
        };
        self.contacts.lock().unwrap().insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Id) -> StorageResult<()> {
        self.track_call("delete_by_id")?;

        self.contacts.lock().unwrap().remove(&id);
        Ok(())
    }
}
