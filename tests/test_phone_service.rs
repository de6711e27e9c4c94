//! Phone operations of the contact service, run against mocks.

mod mocks;

use contacts_service::domain::PhoneType;
use contacts_service::error::ContactError;
use contacts_service::models::{Contact, Phone};
use contacts_service::services::ContactService;
use mocks::{mocked_service, MockedService};

/// Two stored contacts (1 and 2) and one mobile phone (20) owned by contact 1.
fn seeded() -> MockedService {
    let m = mocked_service();
    for (id, name) in [(1, "MARIA DA SILVA"), (2, "JOÃO PEREIRA")] {
        m.contacts.add_contact(Contact {
            id: Some(id),
            ..Contact::new(name)
        });
    }
    m.phones.add_phone(Phone {
        id: Some(20),
        ..mobile().owned_by(1)
    });
    m
}

fn mobile() -> Phone {
    Phone::new(PhoneType::Mobile, "55", "41", "912345678")
}

fn fix() -> Phone {
    Phone::new(PhoneType::Fix, "55", "41", "32345678")
}

fn stored_phone(id: i64, phone: Phone) -> Phone {
    Phone {
        id: Some(id),
        ..phone
    }
}

#[tokio::test]
async fn test_add_phone() {
    let m = seeded();

    let saved = m.service.add_phone(Some(fix().owned_by(2))).await.unwrap();
    assert_eq!(saved.id, Some(21));
    assert_eq!(saved.contact_id, Some(2));
    assert_eq!(m.phones.get_call_count("save"), 1);
}

#[tokio::test]
async fn test_added_phone_reads_back_unchanged() {
    let m = seeded();
    let phone = Phone {
        extension: Some("204".to_string()),
        ..fix().owned_by(2)
    };

    let saved = m.service.add_phone(Some(phone.clone())).await.unwrap();
    let expected = Phone {
        id: saved.id,
        ..phone
    };
    assert_eq!(saved, expected);

    let loaded = m.service.load_phone_by_id(saved.id).await.unwrap();
    assert_eq!(loaded, Some(expected.clone()));

    let scoped = m.service.load_contact_phone(Some(2), saved.id).await.unwrap();
    assert_eq!(scoped, expected);
}

#[tokio::test]
async fn test_add_phone_rejections() {
    let m = seeded();

    let err = m.service.add_phone(None).await.unwrap_err();
    assert_eq!(err.to_string(), "phone record was not supplied");

    let err = m
        .service
        .add_phone(Some(stored_phone(30, mobile().owned_by(1))))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::IdSuppliedForNew(ref e) if e == "phone"));

    let err = m.service.add_phone(Some(mobile())).await.unwrap_err();
    assert_eq!(err.to_string(), "contact is mandatory");

    let err = m
        .service
        .add_phone(Some(mobile().owned_by(9)))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Resource for Contact with id = 9 was not found");

    assert_eq!(m.phones.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_mandatory_parts_checked_before_formats() {
    let m = seeded();

    // a malformed DDI does not hide a missing number
    let phone = Phone {
        ddi: Some("5555".to_string()),
        number: None,
        ..mobile().owned_by(1)
    };
    let err = m.service.add_phone(Some(phone)).await.unwrap_err();
    assert_eq!(err.to_string(), "phone number is mandatory");

    let phone = Phone {
        ddi: None,
        ddd: None,
        ..mobile().owned_by(1)
    };
    let err = m.service.add_phone(Some(phone)).await.unwrap_err();
    assert_eq!(err.to_string(), "DDI is mandatory");

    let phone = Phone {
        ddd: Some(" ".to_string()),
        ..mobile().owned_by(1)
    };
    let err = m.service.add_phone(Some(phone)).await.unwrap_err();
    assert_eq!(err.to_string(), "DDD is mandatory");
}

#[tokio::test]
async fn test_phone_formats() {
    let m = seeded();

    let cases = [
        (Phone { ddi: Some("+55".to_string()), ..mobile() }, "DDI is invalid"),
        (Phone { ddd: Some("041".to_string()), ..mobile() }, "DDD is invalid"),
        // the number rule follows the phone type
        (Phone { number: Some("32345678".to_string()), ..mobile() }, "phone number is invalid"),
        (Phone { number: Some("912345678".to_string()), ..fix() }, "phone number is invalid"),
        (Phone { number: Some("12345678".to_string()), ..fix() }, "phone number is invalid"),
    ];

    for (phone, expected) in cases {
        let err = m
            .service
            .add_phone(Some(phone.owned_by(1)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
    assert_eq!(m.phones.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_add_contact_phone() {
    let m = seeded();

    let saved = m
        .service
        .add_contact_phone(Some(2), Some(fix()))
        .await
        .unwrap();
    assert_eq!(saved.contact_id, Some(2));

    let err = m
        .service
        .add_contact_phone(Some(3), Some(fix()))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = m
        .service
        .add_contact_phone(None, Some(fix()))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::Invalid(ref e) if e == "contact ID"));
    assert_eq!(m.phones.get_call_count("save"), 1);
}

#[tokio::test]
async fn test_load_contact_phones() {
    let m = seeded();

    let phones = m.service.load_contact_phones(Some(1)).await.unwrap();
    assert_eq!(phones.len(), 1);
    assert!(m.service.load_contact_phones(Some(2)).await.unwrap().is_empty());

    let err = m.service.load_contact_phones(Some(4)).await.unwrap_err();
    assert!(err.is_not_found());

    let err = m.service.load_contact_phones(None).await.unwrap_err();
    assert!(matches!(err, ContactError::Invalid(_)));
}

#[tokio::test]
async fn test_load_phone_by_id() {
    let m = seeded();

    let phone = m.service.load_phone_by_id(Some(20)).await.unwrap().unwrap();
    assert_eq!(phone.phone_type, PhoneType::Mobile);
    assert!(m.service.load_phone_by_id(Some(21)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_load_contact_phone() {
    let m = seeded();

    assert!(m.service.load_contact_phone(Some(1), Some(20)).await.is_ok());

    let err = m
        .service
        .load_contact_phone(Some(2), Some(20))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "supplied phone does not belong to contact");
}

#[tokio::test]
async fn test_update_phone() {
    let m = seeded();

    // switching type brings the matching number format along
    let updated = m
        .service
        .update_phone(Some(stored_phone(20, fix())))
        .await
        .unwrap();
    assert_eq!(updated.phone_type, PhoneType::Fix);
    assert_eq!(updated.contact_id, Some(1));

    let err = m
        .service
        .update_phone(Some(stored_phone(20, Phone { phone_type: PhoneType::Mobile, ..fix() })))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "phone number is invalid");
    assert_eq!(m.phones.stored(20).unwrap().phone_type, PhoneType::Fix);
}

#[tokio::test]
async fn test_update_phone_not_found() {
    let m = seeded();

    let err = m
        .service
        .update_phone(Some(stored_phone(99, mobile())))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Resource for Phone with id = 99 was not found");
}

#[tokio::test]
async fn test_update_phone_for_contact() {
    let m = seeded();

    let updated = m
        .service
        .update_phone_for_contact(Some(1), Some(stored_phone(20, fix())))
        .await
        .unwrap();
    assert_eq!(updated.contact_id, Some(1));

    let err = m
        .service
        .update_phone_for_contact(Some(2), Some(stored_phone(20, fix().owned_by(2))))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::SuppliedDoesNotBelongTo { .. }));
    assert_eq!(m.phones.stored(20).unwrap().contact_id, Some(1));
}

#[tokio::test]
async fn test_delete_phone() {
    let m = seeded();

    let err = m.service.delete_phone(Some(21)).await.unwrap_err();
    assert_eq!(err.to_string(), "Resource for Phone with id = 21 was not found");

    m.service.delete_phone(Some(20)).await.unwrap();
    assert!(m.phones.stored(20).is_none());
}

#[tokio::test]
async fn test_delete_phone_for_contact() {
    let m = seeded();

    let err = m
        .service
        .delete_phone_for_contact(Some(2), Some(20))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "supplied phone does not belong to contact");
    assert_eq!(m.phones.get_call_count("delete_by_id"), 0);

    let err = m
        .service
        .delete_phone_for_contact(Some(7), Some(20))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    m.service
        .delete_phone_for_contact(Some(1), Some(20))
        .await
        .unwrap();
    assert!(m.phones.stored(20).is_none());
}
