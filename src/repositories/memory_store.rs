use crate::error::{StorageError, StorageResult};
use crate::models::{Address, Contact, Id, Phone};
use crate::repositories::{records, snapshot};
use crate::repositories::traits::{AddressRepository, ContactRepository, PhoneRepository};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// Monotonic identifier source for one record kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Sequence {
    last: Id,
}

impl Sequence {
    /// Hand out the next id, or accept a caller-chosen one and move past it.
    fn assign(&mut self, requested: Option<Id>) -> Id {
        match requested {
            Some(id) => {
                self.last = self.last.max(id);
                id
            }
            None => {
                self.last += 1;
                self.last
            }
        }
    }
}

/// Everything the store holds. Child tables are persisted with their
/// vocabulary fields by code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreState {
    contact_seq: Sequence,
    address_seq: Sequence,
    phone_seq: Sequence,
    contacts: BTreeMap<Id, Contact>,
    #[serde(with = "records::addresses")]
    addresses: BTreeMap<Id, Address>,
    #[serde(with = "records::phones")]
    phones: BTreeMap<Id, Phone>,
}

impl StoreState {
    fn require_owner(&self, kind: &str, contact_id: Option<Id>) -> StorageResult<Id> {
        match contact_id {
            Some(id) if self.contacts.contains_key(&id) => Ok(id),
            Some(id) => Err(StorageError::Other(format!(
                "{} owner contact {} does not exist",
                kind, id
            ))),
            None => Err(StorageError::Other(format!("{} has no owner contact", kind))),
        }
    }
}

/// Store implementation backing all three repositories.
///
/// State lives in memory behind one lock, so every call is atomic with
/// respect to the others (deleting a contact and its children included).
/// When opened with a snapshot path, the state is loaded from that JSON file
/// and rewritten after each successful mutation; a mutation whose snapshot
/// write fails is rolled back.
pub struct InMemoryStore {
    state: RwLock<StoreState>,
    snapshot_path: Option<PathBuf>,
}

impl InMemoryStore {
    /// Create an empty, purely in-memory store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            snapshot_path: None,
        }
    }

    /// Open a store persisted to `path`, loading it if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let state = snapshot::load::<StoreState>(&path)?.unwrap_or_default();

        tracing::info!(
            "Opened contact store at {} ({} contacts, {} addresses, {} phones)",
            path.display(),
            state.contacts.len(),
            state.addresses.len(),
            state.phones.len()
        );

        Ok(Self {
            state: RwLock::new(state),
            snapshot_path: Some(path),
        })
    }

    fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> StorageResult<T> {
        let state = self.state.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(f(&*state))
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> StorageResult<T>,
    ) -> StorageResult<T> {
        let mut state = self.state.write().map_err(|_| StorageError::LockPoisoned)?;

        let Some(path) = &self.snapshot_path else {
            return f(&mut *state);
        };

        let before = state.clone();
        let result = f(&mut *state).and_then(|value| {
            snapshot::write(path, &*state)?;
            Ok(value)
        });
        if result.is_err() {
            tracing::warn!("Rolling back store mutation after failure");
            *state = before;
        }
        result
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Contact>> {
        self.read(|state| state.contacts.get(&id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Contact>> {
        self.read(|state| state.contacts.values().cloned().collect())
    }

    async fn save(&self, contact: &Contact) -> StorageResult<Contact> {
        let contact = contact.clone();
        self.write(move |state| {
            let id = state.contact_seq.assign(contact.id);
            let saved = Contact {
                id: Some(id),
                ..contact
            };
            state.contacts.insert(id, saved.clone());
            Ok(saved)
        })
    }

    async fn delete_by_id(&self, id: Id) -> StorageResult<()> {
        self.write(|state| {
            if state.contacts.remove(&id).is_some() {
                state.addresses.retain(|_, a| a.contact_id != Some(id));
                state.phones.retain(|_, p| p.contact_id != Some(id));
            }
            Ok(())
        })
    }
}

#[async_trait]
impl AddressRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Address>> {
        self.read(|state| state.addresses.get(&id).cloned())
    }

    async fn find_all_by_owner(&self, contact_id: Id) -> StorageResult<Vec<Address>> {
        self.read(|state| {
            state
                .addresses
                .values()
                .filter(|a| a.contact_id == Some(contact_id))
                .cloned()
                .collect()
        })
    }

    async fn save(&self, address: &Address) -> StorageResult<Address> {
        let address = address.clone();
        self.write(move |state| {
            state.require_owner("address", address.contact_id)?;
            let id = state.address_seq.assign(address.id);
            let saved = Address {
                id: Some(id),
                ..address
            };
            state.addresses.insert(id, saved.clone());
            Ok(saved)
        })
    }

    async fn delete_by_id(&self, id: Id) -> StorageResult<()> {
        self.write(|state| {
            state.addresses.remove(&id);
            Ok(())
        })
    }
}

#[async_trait]
impl PhoneRepository for InMemoryStore {
    async fn find_by_id(&self, id: Id) -> StorageResult<Option<Phone>> {
        self.read(|state| state.phones.get(&id).cloned())
    }

    async fn find_all_by_owner(&self, contact_id: Id) -> StorageResult<Vec<Phone>> {
        self.read(|state| {
            state
                .phones
                .values()
                .filter(|p| p.contact_id == Some(contact_id))
                .cloned()
                .collect()
        })
    }

    async fn save(&self, phone: &Phone) -> StorageResult<Phone> {
        let phone = phone.clone();
        self.write(move |state| {
            state.require_owner("phone", phone.contact_id)?;
            let id = state.phone_seq.assign(phone.id);
            let saved = Phone {
                id: Some(id),
                ..phone
            };
            state.phones.insert(id, saved.clone());
            Ok(saved)
        })
    }

    async fn delete_by_id(&self, id: Id) -> StorageResult<()> {
        self.write(|state| {
            state.phones.remove(&id);
            Ok(())
        })
    }
}
