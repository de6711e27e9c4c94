//! Ownership guard for contact-scoped child access.
//!
//! Addresses and phones are only reachable through their owning contact
//! when a contact id scopes the request. The guard compares the child's
//! stored owner reference with the scoping contact id; it never compares
//! against the child's own id.

use crate::error::{ContactError, ServiceResult};
use crate::models::Id;

/// Whether a child whose owner is `owner_contact_id` belongs to `contact_id`.
///
/// A child with no owner belongs to nobody.
pub fn belongs_to(owner_contact_id: Option<Id>, contact_id: Id) -> bool {
    owner_contact_id == Some(contact_id)
}

/// Fail with `SuppliedDoesNotBelongTo` unless the child belongs to `contact_id`.
///
/// `child` names the kind of record ("address", "phone") for the message.
pub fn ensure_belongs_to(
    child: &str,
    owner_contact_id: Option<Id>,
    contact_id: Id,
) -> ServiceResult<()> {
    if belongs_to(owner_contact_id, contact_id) {
        Ok(())
    } else {
        Err(ContactError::does_not_belong_to(child, "contact"))
    }
}
