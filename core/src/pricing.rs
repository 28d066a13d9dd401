//! Pricing and seat counting.
//!
//! Pure arithmetic over the fixed price table in [`TicketType::unit_price`].
//! [`quote`] is the whole validate-and-price step; it never calls a
//! collaborator.
//!
//! [`TicketType::unit_price`]: crate::types::TicketType::unit_price

use crate::error::InvalidPurchaseError;
use crate::types::{PurchaseOutcome, TicketPurchaseRequest};
use crate::validation::{PurchasePolicy, validate};

/// Total price of every line in the request
#[must_use]
pub fn total_price(request: &TicketPurchaseRequest) -> u64 {
    request.ticket_requests().iter().map(|line| line.price()).sum()
}

/// Seats needed for the request; infants are not counted
#[must_use]
pub fn total_seats(request: &TicketPurchaseRequest) -> u64 {
    request.ticket_requests().iter().map(|line| line.seats()).sum()
}

/// Validates a request and computes what it costs and how many seats it needs.
///
/// Calling this twice with the same request and policy gives the same result.
///
/// # Errors
///
/// Returns the first purchase rule the request breaks, see
/// [`validate`](crate::validation::validate).
pub fn quote(
    request: &TicketPurchaseRequest,
    policy: &PurchasePolicy,
) -> Result<PurchaseOutcome, InvalidPurchaseError> {
    validate(request, policy)?;

    Ok(PurchaseOutcome {
        account_id: request.account_id(),
        total_price: total_price(request),
        total_seats: total_seats(request),
    })
}
