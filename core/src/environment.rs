//! External collaborators, injected through [`TicketEnvironment`].
//!
//! Both collaborators are assumed to succeed once called. Neither returns a
//! value the service inspects, so the traits have no error type.

use crate::types::AccountId;
use std::sync::Arc;

/// Payment gateway
pub trait TicketPaymentService: Send + Sync {
    /// Charges `amount_to_pay` to the account
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64);
}

/// Seat booking service
pub trait SeatReservationService: Send + Sync {
    /// Reserves `total_seats_to_allocate` seats for the account
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64);
}

/// Environment dependencies for the ticket service
#[derive(Clone)]
pub struct TicketEnvironment {
    /// Payment gateway
    pub payment: Arc<dyn TicketPaymentService>,
    /// Seat booking service
    pub reservation: Arc<dyn SeatReservationService>,
}

impl TicketEnvironment {
    /// Creates a new `TicketEnvironment`
    #[must_use]
    pub const fn new(
        payment: Arc<dyn TicketPaymentService>,
        reservation: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payment,
            reservation,
        }
    }
}

impl std::fmt::Debug for TicketEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketEnvironment")
            .field("payment", &"<dyn TicketPaymentService>")
            .field("reservation", &"<dyn SeatReservationService>")
            .finish()
    }
}
