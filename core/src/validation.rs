//! Purchase rules.
//!
//! Rules are checked in a fixed order and the first one broken is reported:
//!
//! ```text
//! 1. at least one ticket
//! 2. CHILD/INFANT tickets only alongside an ADULT ticket
//! 3. no more than `max_tickets_per_purchase` tickets
//! 4. account id > 0
//! ```
//!
//! The order is part of the contract: a request for 30 infants reports the
//! missing adult, not the ticket limit.

use crate::error::InvalidPurchaseError;
use crate::types::{TicketPurchaseRequest, TicketType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default maximum number of tickets in one transaction
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Limits applied to every purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePolicy {
    /// Maximum tickets (of any type) per transaction
    pub max_tickets_per_purchase: u32,
}

impl PurchasePolicy {
    /// Creates a policy with the given ticket limit
    #[must_use]
    pub const fn new(max_tickets_per_purchase: u32) -> Self {
        Self {
            max_tickets_per_purchase,
        }
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKETS_PER_PURCHASE)
    }
}

/// Checks a request against every purchase rule, in order.
///
/// # Errors
///
/// Returns the [`InvalidPurchaseError`] of the first rule the request breaks.
pub fn validate(
    request: &TicketPurchaseRequest,
    policy: &PurchasePolicy,
) -> Result<(), InvalidPurchaseError> {
    let account_id = request.account_id();
    let total_tickets = request.total_tickets();

    if total_tickets == 0 {
        debug!(%account_id, "Rejected purchase with no tickets");
        return Err(InvalidPurchaseError::NoTicketsSelected);
    }

    if !has_required_adult(request) {
        debug!(%account_id, "Rejected CHILD/INFANT purchase without an ADULT ticket");
        return Err(InvalidPurchaseError::AdultTicketRequired);
    }

    if total_tickets > u64::from(policy.max_tickets_per_purchase) {
        debug!(
            %account_id,
            requested = total_tickets,
            max = policy.max_tickets_per_purchase,
            "Rejected purchase over the ticket limit"
        );
        return Err(InvalidPurchaseError::TooManyTickets {
            max: policy.max_tickets_per_purchase,
            requested: total_tickets,
        });
    }

    if !account_id.is_valid() {
        debug!(%account_id, "Rejected purchase with invalid account id");
        return Err(InvalidPurchaseError::InvalidAccountId);
    }

    Ok(())
}

/// `false` only when a CHILD or INFANT ticket is requested with no ADULT ticket.
fn has_required_adult(request: &TicketPurchaseRequest) -> bool {
    let needs_adult = request
        .ticket_requests()
        .iter()
        .any(|line| line.ticket_type().requires_adult() && line.quantity() > 0);

    !needs_adult || request.quantity_of(TicketType::Adult) > 0
}
