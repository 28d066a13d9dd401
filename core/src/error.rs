//! Error types for ticket purchases.

use thiserror::Error;

/// Result type alias for operations that can hit any [`TicketError`].
pub type Result<T> = std::result::Result<T, TicketError>;

/// A purchase request broke one of the purchase rules.
///
/// The caller can fix the request and resubmit. The `Display` output of each
/// variant is the message reported to the purchaser and must stay stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    /// The request contains no tickets at all.
    #[error("No tickets have been selected. Purchase unsuccessful.")]
    NoTicketsSelected,

    /// Child or infant tickets were requested without any adult ticket.
    #[error("CHILD/INFANT ticket(s) cannot be purchased without an ADULT ticket.")]
    AdultTicketRequired,

    /// More tickets were requested than one transaction allows.
    #[error("No more than {max} tickets can be purchased per transaction.")]
    TooManyTickets {
        /// Maximum tickets per transaction
        max: u32,
        /// Tickets actually requested
        requested: u64,
    },

    /// The account id is zero or negative.
    #[error("The AccountID is invalid.")]
    InvalidAccountId,
}

/// Every error the ticket service can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// The request was rejected by the purchase rules.
    #[error(transparent)]
    InvalidPurchase(#[from] InvalidPurchaseError),

    /// A ticket type name outside the closed set reached the domain.
    ///
    /// This is a caller defect, not a purchase rule violation.
    #[error("Unknown ticket type: {name}")]
    UnknownTicketType {
        /// Name that failed to parse
        name: String,
    },
}

impl TicketError {
    /// Returns `true` for purchase rule violations the caller can correct.
    #[must_use]
    pub const fn is_invalid_purchase(&self) -> bool {
        matches!(self, Self::InvalidPurchase(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(
            InvalidPurchaseError::NoTicketsSelected.to_string(),
            "No tickets have been selected. Purchase unsuccessful."
        );
        assert_eq!(
            InvalidPurchaseError::AdultTicketRequired.to_string(),
            "CHILD/INFANT ticket(s) cannot be purchased without an ADULT ticket."
        );
        assert_eq!(
            InvalidPurchaseError::TooManyTickets {
                max: 20,
                requested: 30
            }
            .to_string(),
            "No more than 20 tickets can be purchased per transaction."
        );
        assert_eq!(
            InvalidPurchaseError::InvalidAccountId.to_string(),
            "The AccountID is invalid."
        );
    }

    #[test]
    fn test_invalid_purchase_is_transparent() {
        let err = TicketError::from(InvalidPurchaseError::InvalidAccountId);
        assert!(err.is_invalid_purchase());
        assert_eq!(err.to_string(), "The AccountID is invalid.");
    }

    #[test]
    fn test_unknown_ticket_type_is_a_defect() {
        let err = TicketError::UnknownTicketType {
            name: "SENIOR".to_string(),
        };
        assert!(!err.is_invalid_purchase());
        assert_eq!(err.to_string(), "Unknown ticket type: SENIOR");
    }
}
