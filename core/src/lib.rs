//! # Ticket Service Core
//!
//! Validation, pricing and orchestration for ticket purchases.
//!
//! A purchase request is checked against a fixed, ordered rule set, priced
//! from a constant price table, and only then handed to the payment gateway
//! and the seat booking service.
//!
//! ## Architecture
//!
//! - **Functional core**: [`pricing::quote`] is a pure function
//!   `(Request, Policy) → Result<Outcome, InvalidPurchaseError>`
//! - **Effects**: a [`PurchaseOutcome`] describes its collaborator calls as
//!   [`PurchaseEffect`] values (payment, then seat reservation)
//! - **Imperative shell**: [`TicketServiceImpl`] executes those effects
//!   against the collaborators injected through [`TicketEnvironment`]
//!
//! ```text
//! TicketPurchaseRequest
//!        │
//!        ▼
//!   validate ──(first broken rule)──▶ InvalidPurchaseError, nothing called
//!        │
//!        ▼
//!   price + count seats ──▶ PurchaseOutcome
//!        │
//!        ▼
//!   MakePayment ──▶ ReserveSeats
//! ```
//!
//! ## Example
//!
//! ```
//! use ticket_service_core::{
//!     TicketEnvironment, TicketPurchaseRequest, TicketRequest, TicketService,
//!     TicketServiceImpl, TicketType,
//! };
//!
//! let service = TicketServiceImpl::new(TicketEnvironment::tracing());
//! let request = TicketPurchaseRequest::new(
//!     1,
//!     vec![
//!         TicketRequest::new(TicketType::Adult, 2),
//!         TicketRequest::new(TicketType::Infant, 1),
//!     ],
//! );
//!
//! let outcome = service.purchase_tickets(&request)?;
//! assert_eq!(outcome.total_price, 40);
//! assert_eq!(outcome.total_seats, 2);
//! # Ok::<(), ticket_service_core::InvalidPurchaseError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod collaborators;
pub mod config;
pub mod effect;
pub mod environment;
pub mod error;
pub mod pricing;
pub mod service;
pub mod types;
pub mod validation;

pub use collaborators::{TracingPaymentService, TracingSeatReservationService};
pub use config::Config;
pub use effect::{PurchaseEffect, PurchaseEffects};
pub use environment::{SeatReservationService, TicketEnvironment, TicketPaymentService};
pub use error::{InvalidPurchaseError, Result, TicketError};
pub use service::{TicketService, TicketServiceImpl};
pub use types::{AccountId, PurchaseOutcome, TicketPurchaseRequest, TicketRequest, TicketType};
pub use validation::{DEFAULT_MAX_TICKETS_PER_PURCHASE, PurchasePolicy};
