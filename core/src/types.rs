//! Domain types for ticket purchases.
//!
//! Value objects only: nothing here is persisted and nothing is mutated after
//! construction. A [`TicketPurchaseRequest`] is built per call, validated and
//! priced once, then discarded.

use crate::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account making a purchase
///
/// Any `i64` can be wrapped; only strictly positive values are accepted by
/// the purchase rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId` from its raw value
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns `true` if the id is strictly positive
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket types
// ============================================================================

/// Kind of ticket, each with a fixed unit price
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket
    Adult,
    /// Child ticket, requires an adult on the same purchase
    Child,
    /// Infant ticket, requires an adult and sits on their lap
    Infant,
}

impl TicketType {
    /// All ticket types, in price-table order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of one ticket of this type
    #[must_use]
    pub const fn unit_price(self) -> u64 {
        match self {
            Self::Adult => 20,
            Self::Child => 10,
            Self::Infant => 0,
        }
    }

    /// Whether a ticket of this type is allocated a seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }

    /// Whether this type may only be bought alongside an adult ticket
    #[must_use]
    pub const fn requires_adult(self) -> bool {
        matches!(self, Self::Child | Self::Infant)
    }

    /// Upper-case name as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ticket_type| ticket_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TicketError::UnknownTicketType {
                name: s.to_string(),
            })
    }
}

// ============================================================================
// Requests
// ============================================================================

/// One line of a purchase: a ticket type and how many of it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketRequest {
    /// Creates a new request line
    #[must_use]
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Ticket type of this line
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Number of tickets on this line
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of this line
    #[must_use]
    pub fn price(&self) -> u64 {
        self.ticket_type.unit_price() * u64::from(self.quantity)
    }

    /// Seats this line needs
    #[must_use]
    pub fn seats(&self) -> u64 {
        if self.ticket_type.occupies_seat() {
            u64::from(self.quantity)
        } else {
            0
        }
    }
}

/// A purchase submitted by one account
///
/// Fields are fixed at construction and only readable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPurchaseRequest {
    account_id: AccountId,
    ticket_requests: Vec<TicketRequest>,
}

impl TicketPurchaseRequest {
    /// Creates a new purchase request
    #[must_use]
    pub const fn new(account_id: i64, ticket_requests: Vec<TicketRequest>) -> Self {
        Self {
            account_id: AccountId::new(account_id),
            ticket_requests,
        }
    }

    /// Account making the purchase
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Request lines, in submission order
    #[must_use]
    pub fn ticket_requests(&self) -> &[TicketRequest] {
        &self.ticket_requests
    }

    /// Total number of tickets across all lines
    #[must_use]
    pub fn total_tickets(&self) -> u64 {
        self.ticket_requests
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Number of tickets of the given type across all lines
    #[must_use]
    pub fn quantity_of(&self, ticket_type: TicketType) -> u64 {
        self.ticket_requests
            .iter()
            .filter(|line| line.ticket_type() == ticket_type)
            .map(|line| u64::from(line.quantity()))
            .sum()
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Totals for a request that passed validation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    /// Account to charge and reserve for
    pub account_id: AccountId,
    /// Amount owed
    pub total_price: u64,
    /// Seats to reserve
    pub total_seats: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table() {
        assert_eq!(TicketType::Adult.unit_price(), 20);
        assert_eq!(TicketType::Child.unit_price(), 10);
        assert_eq!(TicketType::Infant.unit_price(), 0);
    }

    #[test]
    fn test_infants_take_no_seat() {
        assert!(TicketType::Adult.occupies_seat());
        assert!(TicketType::Child.occupies_seat());
        assert!(!TicketType::Infant.occupies_seat());

        assert_eq!(TicketRequest::new(TicketType::Infant, 3).seats(), 0);
        assert_eq!(TicketRequest::new(TicketType::Child, 3).seats(), 3);
    }

    #[test]
    fn test_parse_ticket_type() {
        assert_eq!("ADULT".parse::<TicketType>().unwrap(), TicketType::Adult);
        assert_eq!("child".parse::<TicketType>().unwrap(), TicketType::Child);
        assert_eq!(" Infant ".parse::<TicketType>().unwrap(), TicketType::Infant);
    }

    #[test]
    fn test_parse_unknown_ticket_type_is_rejected() {
        let err = "SENIOR".parse::<TicketType>().unwrap_err();
        assert_eq!(
            err,
            TicketError::UnknownTicketType {
                name: "SENIOR".to_string()
            }
        );
    }

    #[test]
    fn test_totals_span_lines() {
        let request = TicketPurchaseRequest::new(
            7,
            vec![
                TicketRequest::new(TicketType::Adult, 2),
                TicketRequest::new(TicketType::Child, 1),
                TicketRequest::new(TicketType::Adult, 3),
            ],
        );

        assert_eq!(request.total_tickets(), 6);
        assert_eq!(request.quantity_of(TicketType::Adult), 5);
        assert_eq!(request.quantity_of(TicketType::Infant), 0);
        assert_eq!(request.account_id(), AccountId::new(7));
    }

    #[test]
    fn test_total_tickets_does_not_wrap() {
        let request = TicketPurchaseRequest::new(
            1,
            vec![
                TicketRequest::new(TicketType::Adult, u32::MAX),
                TicketRequest::new(TicketType::Adult, u32::MAX),
            ],
        );

        assert_eq!(request.total_tickets(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_account_id_validity() {
        assert!(AccountId::new(1).is_valid());
        assert!(!AccountId::new(0).is_valid());
        assert!(!AccountId::new(-5).is_valid());
        assert_eq!(AccountId::new(100_000_001).to_string(), "100000001");
    }
}
