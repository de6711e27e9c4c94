//! In-memory repository doubles that record how often each method ran.

mod mock_address_repository;
mod mock_contact_repository;
mod mock_phone_repository;

#[allow(unused_imports)]
pub use mock_address_repository::MockAddressRepository;
#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_phone_repository::MockPhoneRepository;

use contacts_service::services::ContactServiceImpl;
use contacts_service::ValidationRules;
use std::sync::Arc;

/// A contact service wired to fresh mocks, with handles kept for assertions.
#[allow(dead_code)]
pub struct MockedService {
    pub contacts: MockContactRepository,
    pub addresses: MockAddressRepository,
    pub phones: MockPhoneRepository,
    pub service: ContactServiceImpl,
}

#[allow(dead_code)]
pub fn mocked_service() -> MockedService {
    let contacts = MockContactRepository::new();
    let addresses = MockAddressRepository::new();
    let phones = MockPhoneRepository::new();
    let service = ContactServiceImpl::new(
        Arc::new(contacts.clone()),
        Arc::new(addresses.clone()),
        Arc::new(phones.clone()),
        Arc::new(ValidationRules::default()),
    );

    MockedService {
        contacts,
        addresses,
        phones,
        service,
    }
}
