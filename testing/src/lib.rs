//! # Ticket Service Testing
//!
//! Testing utilities for the ticket purchase service.
//!
//! This crate provides:
//! - Recording implementations of the collaborator traits
//! - Request builders and tracing setup for tests
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use ticket_service_testing::{CollaboratorCall, RecordingEnvironment, purchase};
//! use ticket_service_core::{AccountId, TicketService, TicketServiceImpl, TicketType};
//!
//! let recording = RecordingEnvironment::new();
//! let service = TicketServiceImpl::new(recording.environment());
//!
//! assert!(service
//!     .purchase_tickets(&purchase(1, &[(TicketType::Adult, 1)]))
//!     .is_ok());
//!
//! assert_eq!(
//!     recording.calls(),
//!     vec![
//!         CollaboratorCall::Payment { account_id: AccountId::new(1), amount: 20 },
//!         CollaboratorCall::Reservation { account_id: AccountId::new(1), seats: 1 },
//!     ]
//! );
//! ```

pub mod mocks;
pub mod properties;

/// Test helpers and utilities.
pub mod helpers {
    use ticket_service_core::{TicketPurchaseRequest, TicketRequest, TicketType};

    /// Builds a purchase request from `(type, quantity)` pairs
    #[must_use]
    pub fn purchase(account_id: i64, lines: &[(TicketType, u32)]) -> TicketPurchaseRequest {
        TicketPurchaseRequest::new(
            account_id,
            lines
                .iter()
                .map(|&(ticket_type, quantity)| TicketRequest::new(ticket_type, quantity))
                .collect(),
        )
    }

    /// Installs a test-friendly tracing subscriber
    ///
    /// Safe to call from every test; only the first call installs it.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::{init_tracing, purchase};
pub use mocks::{
    CollaboratorCall, RecordingEnvironment, RecordingPaymentService,
    RecordingSeatReservationService,
};
