//! Recording collaborators.
//!
//! Both mocks append to one shared, ordered call log so tests can assert on
//! which collaborator was called, with what, and in which order.

use std::sync::{Arc, Mutex, PoisonError};
use ticket_service_core::{
    AccountId, SeatReservationService, TicketEnvironment, TicketPaymentService,
};

/// One recorded collaborator call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollaboratorCall {
    /// `make_payment` was called
    Payment {
        /// Account charged
        account_id: AccountId,
        /// Amount charged
        amount: u64,
    },
    /// `reserve_seat` was called
    Reservation {
        /// Account the seats are for
        account_id: AccountId,
        /// Seats reserved
        seats: u64,
    },
}

type CallLog = Arc<Mutex<Vec<CollaboratorCall>>>;

fn record(log: &CallLog, call: CollaboratorCall) {
    log.lock().unwrap_or_else(PoisonError::into_inner).push(call);
}

/// Payment service that records every call
#[derive(Clone, Debug, Default)]
pub struct RecordingPaymentService {
    log: CallLog,
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) {
        record(
            &self.log,
            CollaboratorCall::Payment {
                account_id,
                amount: amount_to_pay,
            },
        );
    }
}

/// Seat reservation service that records every call
#[derive(Clone, Debug, Default)]
pub struct RecordingSeatReservationService {
    log: CallLog,
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        record(
            &self.log,
            CollaboratorCall::Reservation {
                account_id,
                seats: total_seats_to_allocate,
            },
        );
    }
}

/// Pair of recording collaborators sharing one call log
///
/// # Example
///
/// ```
/// use ticket_service_testing::RecordingEnvironment;
///
/// let recording = RecordingEnvironment::new();
/// let env = recording.environment();
/// assert!(recording.calls().is_empty());
/// # drop(env);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingEnvironment {
    log: CallLog,
}

impl RecordingEnvironment {
    /// Creates an environment with an empty call log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Payment mock writing to this log
    #[must_use]
    pub fn payment(&self) -> RecordingPaymentService {
        RecordingPaymentService {
            log: Arc::clone(&self.log),
        }
    }

    /// Reservation mock writing to this log
    #[must_use]
    pub fn reservation(&self) -> RecordingSeatReservationService {
        RecordingSeatReservationService {
            log: Arc::clone(&self.log),
        }
    }

    /// `TicketEnvironment` wired with both recording mocks
    #[must_use]
    pub fn environment(&self) -> TicketEnvironment {
        TicketEnvironment::new(Arc::new(self.payment()), Arc::new(self.reservation()))
    }

    /// Every call recorded so far, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Payment calls only, in call order
    #[must_use]
    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::Payment { account_id, amount } => Some((account_id, amount)),
                CollaboratorCall::Reservation { .. } => None,
            })
            .collect()
    }

    /// Reservation calls only, in call order
    #[must_use]
    pub fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::Reservation { account_id, seats } => Some((account_id, seats)),
                CollaboratorCall::Payment { .. } => None,
            })
            .collect()
    }

    /// Forgets every recorded call
    pub fn clear(&self) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
