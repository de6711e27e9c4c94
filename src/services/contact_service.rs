//! Contact service layer.
//!
//! Business rules for loading, adding, updating and deleting contacts and
//! the addresses and phones they own.

use crate::error::{ContactError, ServiceResult};
use crate::models::{Address, Contact, Id, Phone};
use crate::ownership::ensure_belongs_to;
use crate::repositories::{AddressRepository, ContactRepository, PhoneRepository};
use crate::validation::ValidationRules;
use async_trait::async_trait;
use std::sync::Arc;

const CONTACT: &str = "contact";
const ADDRESS: &str = "address";
const PHONE: &str = "phone";

/// Contact service trait for business operations.
///
/// Identifiers and records arrive as `Option` because the transport may omit
/// them; an absent identifier is `Invalid`, an absent record is
/// `RecordNotSupplied`. Every operation is all-or-nothing: rejected writes
/// never reach the store.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Get every contact.
    async fn load_contacts(&self) -> ServiceResult<Vec<Contact>>;

    /// Get the addresses of an existing contact (possibly none).
    async fn load_contact_addresses(&self, contact_id: Option<Id>) -> ServiceResult<Vec<Address>>;

    /// Get the phones of an existing contact (possibly none).
    async fn load_contact_phones(&self, contact_id: Option<Id>) -> ServiceResult<Vec<Phone>>;

    /// Look a contact up. A missing contact is `Ok(None)`.
    async fn load_contact_by_id(&self, contact_id: Option<Id>) -> ServiceResult<Option<Contact>>;

    /// Look an address up. A missing address is `Ok(None)`.
    async fn load_address_by_id(&self, address_id: Option<Id>) -> ServiceResult<Option<Address>>;

    /// Look a phone up. A missing phone is `Ok(None)`.
    async fn load_phone_by_id(&self, phone_id: Option<Id>) -> ServiceResult<Option<Phone>>;

    /// Get one address through its owning contact.
    async fn load_contact_address(
        &self,
        contact_id: Option<Id>,
        address_id: Option<Id>,
    ) -> ServiceResult<Address>;

    /// Get one phone through its owning contact.
    async fn load_contact_phone(
        &self,
        contact_id: Option<Id>,
        phone_id: Option<Id>,
    ) -> ServiceResult<Phone>;

    /// Create a contact. Returns it with its new identifier.
    async fn add_contact(&self, contact: Option<Contact>) -> ServiceResult<Contact>;

    /// Create an address already bound to an existing owner.
    async fn add_address(&self, address: Option<Address>) -> ServiceResult<Address>;

    /// Create a phone already bound to an existing owner.
    async fn add_phone(&self, phone: Option<Phone>) -> ServiceResult<Phone>;

    /// Resolve the contact, bind the address to it, then create it.
    async fn add_contact_address(
        &self,
        contact_id: Option<Id>,
        address: Option<Address>,
    ) -> ServiceResult<Address>;

    /// Resolve the contact, bind the phone to it, then create it.
    async fn add_contact_phone(
        &self,
        contact_id: Option<Id>,
        phone: Option<Phone>,
    ) -> ServiceResult<Phone>;

    /// Overwrite an existing contact.
    async fn update_contact(&self, contact: Option<Contact>) -> ServiceResult<Contact>;

    /// Overwrite an existing address.
    async fn update_address(&self, address: Option<Address>) -> ServiceResult<Address>;

    /// Overwrite an existing address that must belong to `contact_id`.
    async fn update_address_for_contact(
        &self,
        contact_id: Option<Id>,
        address: Option<Address>,
    ) -> ServiceResult<Address>;

    /// Overwrite an existing phone.
    async fn update_phone(&self, phone: Option<Phone>) -> ServiceResult<Phone>;

    /// Overwrite an existing phone that must belong to `contact_id`.
    async fn update_phone_for_contact(
        &self,
        contact_id: Option<Id>,
        phone: Option<Phone>,
    ) -> ServiceResult<Phone>;

    /// Remove a contact along with its addresses and phones.
    async fn delete_contact(&self, contact_id: Option<Id>) -> ServiceResult<()>;

    /// Remove an address.
    async fn delete_address(&self, address_id: Option<Id>) -> ServiceResult<()>;

    /// Remove an address that must belong to `contact_id`.
    async fn delete_address_for_contact(
        &self,
        contact_id: Option<Id>,
        address_id: Option<Id>,
    ) -> ServiceResult<()>;

    /// Remove a phone.
    async fn delete_phone(&self, phone_id: Option<Id>) -> ServiceResult<()>;

    /// Remove a phone that must belong to `contact_id`.
    async fn delete_phone_for_contact(
        &self,
        contact_id: Option<Id>,
        phone_id: Option<Id>,
    ) -> ServiceResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contacts: Arc<dyn ContactRepository>,
    addresses: Arc<dyn AddressRepository>,
    phones: Arc<dyn PhoneRepository>,
    rules: Arc<ValidationRules>,
}

/// Request shape checks shared by every operation.
impl ContactServiceImpl {
    fn require_id(element: &str, id: Option<Id>) -> ServiceResult<Id> {
        id.ok_or_else(|| ContactError::invalid(format!("{} ID", element)))
    }

    fn supplied<T>(element: &str, record: Option<T>) -> ServiceResult<T> {
        record.ok_or_else(|| ContactError::record_not_supplied(element))
    }

    fn ensure_new(element: &str, id: Option<Id>) -> ServiceResult<()> {
        match id {
            Some(_) => Err(ContactError::id_supplied_for_new(element)),
            None => Ok(()),
        }
    }

    fn rejected(operation: &str, err: ContactError) -> ContactError {
        tracing::warn!("{} rejected: {}", operation, err);
        err
    }
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        addresses: Arc<dyn AddressRepository>,
        phones: Arc<dyn PhoneRepository>,
        rules: Arc<ValidationRules>,
    ) -> Self {
        Self {
            contacts,
            addresses,
            phones,
            rules,
        }
    }

    async fn require_contact(&self, contact_id: Id) -> ServiceResult<Contact> {
        self.contacts
            .find_by_id(contact_id)
            .await?
            .ok_or_else(|| ContactError::not_found("Contact", contact_id))
    }

    async fn require_address(&self, address_id: Id) -> ServiceResult<Address> {
        self.addresses
            .find_by_id(address_id)
            .await?
            .ok_or_else(|| ContactError::not_found("Address", address_id))
    }

    async fn require_phone(&self, phone_id: Id) -> ServiceResult<Phone> {
        self.phones
            .find_by_id(phone_id)
            .await?
            .ok_or_else(|| ContactError::not_found("Phone", phone_id))
    }

    /// The owner a new child names must be present and stored.
    async fn resolve_owner(&self, contact_id: Option<Id>) -> ServiceResult<Id> {
        let contact_id = contact_id.ok_or_else(|| ContactError::mandatory(CONTACT))?;
        self.require_contact(contact_id).await?;
        Ok(contact_id)
    }

    /// The contact a child is being added through must be named and stored.
    async fn bind_contact(&self, contact_id: Option<Id>) -> ServiceResult<Id> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        self.require_contact(contact_id).await?;
        Ok(contact_id)
    }

    /// On a plain update, a child keeps its stored owner unless the incoming
    /// record names another existing contact.
    async fn reconcile_owner(&self, incoming: Option<Id>, stored: Option<Id>) -> ServiceResult<Option<Id>> {
        match incoming {
            Some(contact_id) if Some(contact_id) != stored => {
                self.require_contact(contact_id).await?;
                Ok(Some(contact_id))
            }
            Some(contact_id) => Ok(Some(contact_id)),
            None => Ok(stored),
        }
    }

    async fn insert_contact(&self, contact: Option<Contact>) -> ServiceResult<Contact> {
        let contact = Self::supplied(CONTACT, contact)?;
        Self::ensure_new(CONTACT, contact.id)?;
        self.rules.validate_contact(&contact)?;

        Ok(self.contacts.save(&contact).await?)
    }

    async fn insert_address(&self, address: Option<Address>) -> ServiceResult<Address> {
        let address = Self::supplied(ADDRESS, address)?;
        Self::ensure_new(ADDRESS, address.id)?;
        self.resolve_owner(address.contact_id).await?;
        self.rules.validate_address(&address)?;

        Ok(self.addresses.save(&address).await?)
    }

    async fn insert_phone(&self, phone: Option<Phone>) -> ServiceResult<Phone> {
        let phone = Self::supplied(PHONE, phone)?;
        Self::ensure_new(PHONE, phone.id)?;
        self.resolve_owner(phone.contact_id).await?;
        self.rules.validate_phone(&phone)?;

        Ok(self.phones.save(&phone).await?)
    }

    async fn replace_contact(&self, contact: Option<Contact>) -> ServiceResult<Contact> {
        let contact = Self::supplied(CONTACT, contact)?;
        let id = Self::require_id(CONTACT, contact.id)?;
        self.require_contact(id).await?;
        self.rules.validate_contact(&contact)?;

        Ok(self.contacts.save(&contact).await?)
    }

    async fn replace_address(&self, address: Option<Address>) -> ServiceResult<Address> {
        let mut address = Self::supplied(ADDRESS, address)?;
        let id = Self::require_id(ADDRESS, address.id)?;
        let stored = self.require_address(id).await?;
        address.contact_id = self
            .reconcile_owner(address.contact_id, stored.contact_id)
            .await?;
        self.rules.validate_address(&address)?;

        Ok(self.addresses.save(&address).await?)
    }

    async fn replace_scoped_address(
        &self,
        contact_id: Option<Id>,
        address: Option<Address>,
    ) -> ServiceResult<Address> {
        let mut address = Self::supplied(ADDRESS, address)?;
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        let id = Self::require_id(ADDRESS, address.id)?;

        self.require_contact(contact_id).await?;
        let stored = self.require_address(id).await?;
        ensure_belongs_to(ADDRESS, stored.contact_id, contact_id)?;
        self.rules.validate_address(&address)?;

        address.contact_id = Some(contact_id);
        Ok(self.addresses.save(&address).await?)
    }

    async fn replace_phone(&self, phone: Option<Phone>) -> ServiceResult<Phone> {
        let mut phone = Self::supplied(PHONE, phone)?;
        let id = Self::require_id(PHONE, phone.id)?;
        let stored = self.require_phone(id).await?;
        phone.contact_id = self
            .reconcile_owner(phone.contact_id, stored.contact_id)
            .await?;
        self.rules.validate_phone(&phone)?;

        Ok(self.phones.save(&phone).await?)
    }

    async fn replace_scoped_phone(
        &self,
        contact_id: Option<Id>,
        phone: Option<Phone>,
    ) -> ServiceResult<Phone> {
        let mut phone = Self::supplied(PHONE, phone)?;
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        let id = Self::require_id(PHONE, phone.id)?;

        self.require_contact(contact_id).await?;
        let stored = self.require_phone(id).await?;
        ensure_belongs_to(PHONE, stored.contact_id, contact_id)?;
        self.rules.validate_phone(&phone)?;

        phone.contact_id = Some(contact_id);
        Ok(self.phones.save(&phone).await?)
    }

    async fn remove_scoped_address(&self, contact_id: Option<Id>, address_id: Option<Id>) -> ServiceResult<()> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        let address_id = Self::require_id(ADDRESS, address_id)?;

        self.require_contact(contact_id).await?;
        let address = self.require_address(address_id).await?;
        ensure_belongs_to(ADDRESS, address.contact_id, contact_id)?;

        Ok(self.addresses.delete_by_id(address_id).await?)
    }

    async fn remove_scoped_phone(&self, contact_id: Option<Id>, phone_id: Option<Id>) -> ServiceResult<()> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        let phone_id = Self::require_id(PHONE, phone_id)?;

        self.require_contact(contact_id).await?;
        let phone = self.require_phone(phone_id).await?;
        // owner against the contact id, never against the phone id
        ensure_belongs_to(PHONE, phone.contact_id, contact_id)?;

        Ok(self.phones.delete_by_id(phone_id).await?)
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn load_contacts(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.contacts.find_all().await?)
    }

    async fn load_contact_addresses(&self, contact_id: Option<Id>) -> ServiceResult<Vec<Address>> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        self.require_contact(contact_id).await?;

        Ok(self.addresses.find_all_by_owner(contact_id).await?)
    }

    async fn load_contact_phones(&self, contact_id: Option<Id>) -> ServiceResult<Vec<Phone>> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        self.require_contact(contact_id).await?;

        Ok(self.phones.find_all_by_owner(contact_id).await?)
    }

    async fn load_contact_by_id(&self, contact_id: Option<Id>) -> ServiceResult<Option<Contact>> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        Ok(self.contacts.find_by_id(contact_id).await?)
    }

    async fn load_address_by_id(&self, address_id: Option<Id>) -> ServiceResult<Option<Address>> {
        let address_id = Self::require_id(ADDRESS, address_id)?;
        Ok(self.addresses.find_by_id(address_id).await?)
    }

    async fn load_phone_by_id(&self, phone_id: Option<Id>) -> ServiceResult<Option<Phone>> {
        let phone_id = Self::require_id(PHONE, phone_id)?;
        Ok(self.phones.find_by_id(phone_id).await?)
    }

    async fn load_contact_address(
        &self,
        contact_id: Option<Id>,
        address_id: Option<Id>,
    ) -> ServiceResult<Address> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        let address_id = Self::require_id(ADDRESS, address_id)?;

        self.require_contact(contact_id).await?;
        let address = self.require_address(address_id).await?;
        ensure_belongs_to(ADDRESS, address.contact_id, contact_id)?;

        Ok(address)
    }

    async fn load_contact_phone(
        &self,
        contact_id: Option<Id>,
        phone_id: Option<Id>,
    ) -> ServiceResult<Phone> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        let phone_id = Self::require_id(PHONE, phone_id)?;

        self.require_contact(contact_id).await?;
        let phone = self.require_phone(phone_id).await?;
        ensure_belongs_to(PHONE, phone.contact_id, contact_id)?;

        Ok(phone)
    }

    async fn add_contact(&self, contact: Option<Contact>) -> ServiceResult<Contact> {
        let contact = self
            .insert_contact(contact)
            .await
            .map_err(|e| Self::rejected("add_contact", e))?;

        tracing::info!("Contact created: id={:?}", contact.id);
        Ok(contact)
    }

    async fn add_address(&self, address: Option<Address>) -> ServiceResult<Address> {
        let address = self
            .insert_address(address)
            .await
            .map_err(|e| Self::rejected("add_address", e))?;

        tracing::info!(
            "Address created: id={:?}, contact_id={:?}",
            address.id,
            address.contact_id
        );
        Ok(address)
    }

    async fn add_phone(&self, phone: Option<Phone>) -> ServiceResult<Phone> {
        let phone = self
            .insert_phone(phone)
            .await
            .map_err(|e| Self::rejected("add_phone", e))?;

        tracing::info!(
            "Phone created: id={:?}, contact_id={:?}",
            phone.id,
            phone.contact_id
        );
        Ok(phone)
    }

    async fn add_contact_address(
        &self,
        contact_id: Option<Id>,
        address: Option<Address>,
    ) -> ServiceResult<Address> {
        let contact_id = self
            .bind_contact(contact_id)
            .await
            .map_err(|e| Self::rejected("add_contact_address", e))?;

        let address = address.map(|address| address.owned_by(contact_id));
        self.add_address(address).await
    }

    async fn add_contact_phone(
        &self,
        contact_id: Option<Id>,
        phone: Option<Phone>,
    ) -> ServiceResult<Phone> {
        let contact_id = self
            .bind_contact(contact_id)
            .await
            .map_err(|e| Self::rejected("add_contact_phone", e))?;

        let phone = phone.map(|phone| phone.owned_by(contact_id));
        self.add_phone(phone).await
    }

    async fn update_contact(&self, contact: Option<Contact>) -> ServiceResult<Contact> {
        let contact = self
            .replace_contact(contact)
            .await
            .map_err(|e| Self::rejected("update_contact", e))?;

        tracing::info!("Contact updated: id={:?}", contact.id);
        Ok(contact)
    }

    async fn update_address(&self, address: Option<Address>) -> ServiceResult<Address> {
        let address = self
            .replace_address(address)
            .await
            .map_err(|e| Self::rejected("update_address", e))?;

        tracing::info!("Address updated: id={:?}", address.id);
        Ok(address)
    }

    async fn update_address_for_contact(
        &self,
        contact_id: Option<Id>,
        address: Option<Address>,
    ) -> ServiceResult<Address> {
        tracing::debug!("update_address_for_contact: contact_id={:?}", contact_id);

        let address = self
            .replace_scoped_address(contact_id, address)
            .await
            .map_err(|e| Self::rejected("update_address_for_contact", e))?;

        tracing::info!("Address updated: id={:?}", address.id);
        Ok(address)
    }

    async fn update_phone(&self, phone: Option<Phone>) -> ServiceResult<Phone> {
        let phone = self
            .replace_phone(phone)
            .await
            .map_err(|e| Self::rejected("update_phone", e))?;

        tracing::info!("Phone updated: id={:?}", phone.id);
        Ok(phone)
    }

    async fn update_phone_for_contact(
        &self,
        contact_id: Option<Id>,
        phone: Option<Phone>,
    ) -> ServiceResult<Phone> {
        tracing::debug!("update_phone_for_contact: contact_id={:?}", contact_id);

        let phone = self
            .replace_scoped_phone(contact_id, phone)
            .await
            .map_err(|e| Self::rejected("update_phone_for_contact", e))?;

        tracing::info!("Phone updated: id={:?}", phone.id);
        Ok(phone)
    }

    async fn delete_contact(&self, contact_id: Option<Id>) -> ServiceResult<()> {
        let contact_id = Self::require_id(CONTACT, contact_id)?;
        self.require_contact(contact_id).await?;
        self.contacts.delete_by_id(contact_id).await?;

        tracing::info!("Contact deleted: id={}", contact_id);
        Ok(())
    }

    async fn delete_address(&self, address_id: Option<Id>) -> ServiceResult<()> {
        let address_id = Self::require_id(ADDRESS, address_id)?;
        self.require_address(address_id).await?;
        self.addresses.delete_by_id(address_id).await?;

        tracing::info!("Address deleted: id={}", address_id);
        Ok(())
    }

    async fn delete_address_for_contact(
        &self,
        contact_id: Option<Id>,
        address_id: Option<Id>,
    ) -> ServiceResult<()> {
        tracing::debug!(
            "delete_address_for_contact: contact_id={:?}, address_id={:?}",
            contact_id,
            address_id
        );

        self.remove_scoped_address(contact_id, address_id)
            .await
            .map_err(|e| Self::rejected("delete_address_for_contact", e))?;

        tracing::info!("Address deleted: id={:?}", address_id);
        Ok(())
    }

    async fn delete_phone(&self, phone_id: Option<Id>) -> ServiceResult<()> {
        let phone_id = Self::require_id(PHONE, phone_id)?;
        self.require_phone(phone_id).await?;
        self.phones.delete_by_id(phone_id).await?;

        tracing::info!("Phone deleted: id={}", phone_id);
        Ok(())
    }

    async fn delete_phone_for_contact(
        &self,
        contact_id: Option<Id>,
        phone_id: Option<Id>,
    ) -> ServiceResult<()> {
        tracing::debug!(
            "delete_phone_for_contact: contact_id={:?}, phone_id={:?}",
            contact_id,
            phone_id
        );

        self.remove_scoped_phone(contact_id, phone_id)
            .await
            .map_err(|e| Self::rejected("delete_phone_for_contact", e))?;

        tracing::info!("Phone deleted: id={:?}", phone_id);
        Ok(())
    }
}
