//! Ticket Service Demo
//!
//! Runs the reference purchases through the service with logging
//! collaborators:
//! - successful single and mixed purchases
//! - each purchase rule rejecting a request
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run -p ticket-service-demo
//! MAX_TICKETS_PER_PURCHASE=40 cargo run -p ticket-service-demo
//! ```

use ticket_service_core::{
    Config, TicketEnvironment, TicketPurchaseRequest, TicketRequest, TicketService,
    TicketServiceImpl, TicketType,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        max_tickets_per_purchase = config.purchase.max_tickets_per_purchase,
        "Configuration loaded"
    );

    let service = TicketServiceImpl::with_policy(TicketEnvironment::tracing(), config.policy());

    for (name, request) in scenarios() {
        match service.purchase_tickets(&request) {
            Ok(outcome) => info!(
                scenario = name,
                account_id = %outcome.account_id,
                total_price = outcome.total_price,
                total_seats = outcome.total_seats,
                "Purchase accepted"
            ),
            Err(error) => warn!(scenario = name, %error, "Purchase rejected"),
        }
    }
}

fn scenarios() -> Vec<(&'static str, TicketPurchaseRequest)> {
    use TicketType::{Adult, Child, Infant};

    vec![
        (
            "single adult",
            TicketPurchaseRequest::new(1, vec![TicketRequest::new(Adult, 1)]),
        ),
        (
            "family",
            TicketPurchaseRequest::new(
                100_000_001,
                vec![
                    TicketRequest::new(Adult, 5),
                    TicketRequest::new(Child, 6),
                    TicketRequest::new(Infant, 2),
                ],
            ),
        ),
        (
            "over the limit",
            TicketPurchaseRequest::new(100_000_001, vec![TicketRequest::new(Adult, 30)]),
        ),
        (
            "infant alone",
            TicketPurchaseRequest::new(1, vec![TicketRequest::new(Infant, 1)]),
        ),
        (
            "invalid account",
            TicketPurchaseRequest::new(0, vec![TicketRequest::new(Adult, 1)]),
        ),
        ("empty cart", TicketPurchaseRequest::new(100_000_001, vec![])),
    ]
}
