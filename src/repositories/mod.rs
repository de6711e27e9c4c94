mod memory_store;
mod records;
mod snapshot;
mod traits;

pub use memory_store::InMemoryStore;
pub use traits::{AddressRepository, ContactRepository, PhoneRepository};
