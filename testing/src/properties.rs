//! Property-based testing utilities using proptest.
//!
//! Strategies for the domain types, plus generators that only produce
//! requests passing every purchase rule under the default policy.

use proptest::prelude::*;
use ticket_service_core::{
    AccountId, DEFAULT_MAX_TICKETS_PER_PURCHASE, TicketPurchaseRequest, TicketRequest, TicketType,
};

/// Any ticket type
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// A request line with a quantity up to `max_quantity`
pub fn ticket_request(max_quantity: u32) -> impl Strategy<Value = TicketRequest> {
    (ticket_type(), 0..=max_quantity)
        .prop_map(|(ticket_type, quantity)| TicketRequest::new(ticket_type, quantity))
}

/// Strictly positive account ids
pub fn valid_account_id() -> impl Strategy<Value = AccountId> {
    (1..=i64::MAX).prop_map(AccountId::new)
}

/// Zero or negative account ids
pub fn invalid_account_id() -> impl Strategy<Value = AccountId> {
    (i64::MIN..=0).prop_map(AccountId::new)
}

/// Arbitrary request: any account, up to six lines of up to 25 tickets each
pub fn any_purchase() -> impl Strategy<Value = TicketPurchaseRequest> {
    (
        prop_oneof![valid_account_id(), invalid_account_id()],
        prop::collection::vec(ticket_request(25), 0..6),
    )
        .prop_map(|(account_id, lines)| TicketPurchaseRequest::new(account_id.value(), lines))
}

/// Quantities `(adult, child, infant)` with at least one adult and a total
/// within the default ticket limit
pub fn valid_quantities() -> impl Strategy<Value = (u32, u32, u32)> {
    let max = DEFAULT_MAX_TICKETS_PER_PURCHASE;
    (1..=max)
        .prop_flat_map(move |adults| (Just(adults), 0..=max - adults))
        .prop_flat_map(move |(adults, children)| {
            (Just(adults), Just(children), 0..=max - adults - children)
        })
}

/// Request that passes every rule under the default policy
///
/// Lines are emitted as ADULT, CHILD, INFANT; zero-quantity lines are kept.
pub fn valid_purchase() -> impl Strategy<Value = TicketPurchaseRequest> {
    (valid_account_id(), valid_quantities()).prop_map(|(account_id, (adults, children, infants))| {
        TicketPurchaseRequest::new(
            account_id.value(),
            vec![
                TicketRequest::new(TicketType::Adult, adults),
                TicketRequest::new(TicketType::Child, children),
                TicketRequest::new(TicketType::Infant, infants),
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_quantities_respect_limit((adults, children, infants) in valid_quantities()) {
            prop_assert!(adults >= 1);
            prop_assert!(adults + children + infants <= DEFAULT_MAX_TICKETS_PER_PURCHASE);
        }

        #[test]
        fn account_strategies_split_on_zero(
            valid in valid_account_id(),
            invalid in invalid_account_id(),
        ) {
            prop_assert!(valid.is_valid());
            prop_assert!(!invalid.is_valid());
        }
    }
}
