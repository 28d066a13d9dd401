//! Development collaborators.
//!
//! Stand-ins for the real payment gateway and seat booking service. Every
//! call succeeds and is reported as a `tracing` event. In production these
//! are replaced with the real integrations.

use crate::environment::{SeatReservationService, TicketEnvironment, TicketPaymentService};
use crate::types::AccountId;
use std::sync::Arc;

/// Payment service that logs each payment and always succeeds
#[derive(Clone, Debug, Default)]
pub struct TracingPaymentService;

impl TracingPaymentService {
    /// Creates a new tracing payment service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TicketPaymentService for TracingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) {
        tracing::info!(%account_id, amount = amount_to_pay, "Payment taken");
    }
}

/// Seat reservation service that logs each reservation and always succeeds
#[derive(Clone, Debug, Default)]
pub struct TracingSeatReservationService;

impl TracingSeatReservationService {
    /// Creates a new tracing seat reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SeatReservationService for TracingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        tracing::info!(%account_id, seats = total_seats_to_allocate, "Seats reserved");
    }
}

impl TicketEnvironment {
    /// Environment wired with the tracing collaborators
    #[must_use]
    pub fn tracing() -> Self {
        Self::new(
            Arc::new(TracingPaymentService::new()),
            Arc::new(TracingSeatReservationService::new()),
        )
    }
}
