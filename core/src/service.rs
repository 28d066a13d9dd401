//! Purchase entry point.
//!
//! [`TicketServiceImpl`] is the imperative shell around [`quote`]: it
//! validates and prices the request, then executes the resulting effects
//! against the injected collaborators. Nothing is called when validation
//! fails.

use crate::environment::TicketEnvironment;
use crate::error::InvalidPurchaseError;
use crate::pricing::quote;
use crate::types::{PurchaseOutcome, TicketPurchaseRequest};
use crate::validation::PurchasePolicy;
use tracing::{debug, info, instrument};

/// Buys tickets on behalf of an account
pub trait TicketService {
    /// Validates, charges and reserves seats for a purchase
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchaseError`] if the request breaks a purchase
    /// rule. No collaborator is called in that case.
    fn purchase_tickets(
        &self,
        request: &TicketPurchaseRequest,
    ) -> Result<PurchaseOutcome, InvalidPurchaseError>;
}

/// Default [`TicketService`]
#[derive(Clone, Debug)]
pub struct TicketServiceImpl {
    env: TicketEnvironment,
    policy: PurchasePolicy,
}

impl TicketServiceImpl {
    /// Creates a service with the default purchase policy
    #[must_use]
    pub fn new(env: TicketEnvironment) -> Self {
        Self::with_policy(env, PurchasePolicy::default())
    }

    /// Creates a service with a custom purchase policy
    #[must_use]
    pub const fn with_policy(env: TicketEnvironment, policy: PurchasePolicy) -> Self {
        Self { env, policy }
    }

    /// Policy the service enforces
    #[must_use]
    pub const fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Validates and prices a request without calling any collaborator
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchaseError`] if the request breaks a purchase rule.
    pub fn quote(
        &self,
        request: &TicketPurchaseRequest,
    ) -> Result<PurchaseOutcome, InvalidPurchaseError> {
        quote(request, &self.policy)
    }
}

impl TicketService for TicketServiceImpl {
    #[instrument(skip_all, fields(account_id = %request.account_id()))]
    fn purchase_tickets(
        &self,
        request: &TicketPurchaseRequest,
    ) -> Result<PurchaseOutcome, InvalidPurchaseError> {
        let outcome = quote(request, &self.policy)?;

        for effect in outcome.effects() {
            debug!(?effect, "Executing purchase effect");
            effect.execute(&self.env);
        }

        info!(
            total_price = outcome.total_price,
            total_seats = outcome.total_seats,
            "Tickets purchased"
        );

        Ok(outcome)
    }
}
