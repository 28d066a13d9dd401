//! Wire shape of purchase requests.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use ticket_service_core::{
    AccountId, TicketError, TicketPurchaseRequest, TicketRequest, TicketType,
};

#[test]
fn test_request_json_shape() {
    let request = TicketPurchaseRequest::new(
        42,
        vec![
            TicketRequest::new(TicketType::Adult, 2),
            TicketRequest::new(TicketType::Infant, 1),
        ],
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "account_id": 42,
            "ticket_requests": [
                { "ticket_type": "ADULT", "quantity": 2 },
                { "ticket_type": "INFANT", "quantity": 1 },
            ]
        })
    );
}

#[test]
fn test_request_from_json() {
    let request: TicketPurchaseRequest = serde_json::from_value(json!({
        "account_id": 7,
        "ticket_requests": [{ "ticket_type": "CHILD", "quantity": 3 }]
    }))
    .unwrap();

    assert_eq!(request.account_id(), AccountId::new(7));
    assert_eq!(
        request.ticket_requests(),
        &[TicketRequest::new(TicketType::Child, 3)]
    );
}

#[test]
fn test_unknown_ticket_type_fails_to_deserialize() {
    let result = serde_json::from_value::<TicketPurchaseRequest>(json!({
        "account_id": 7,
        "ticket_requests": [{ "ticket_type": "SENIOR", "quantity": 1 }]
    }));

    assert!(result.is_err());
}

#[test]
fn test_negative_quantity_fails_to_deserialize() {
    let result = serde_json::from_value::<TicketPurchaseRequest>(json!({
        "account_id": 7,
        "ticket_requests": [{ "ticket_type": "ADULT", "quantity": -1 }]
    }));

    assert!(result.is_err());
}

#[test]
fn test_unknown_ticket_type_name_is_a_defect() {
    let err = "VIP".parse::<TicketType>().unwrap_err();

    assert!(!err.is_invalid_purchase());
    assert!(matches!(err, TicketError::UnknownTicketType { name } if name == "VIP"));
}
