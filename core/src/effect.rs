//! Collaborator calls as values.
//!
//! A valid purchase is turned into an ordered list of [`PurchaseEffect`]s.
//! The effects describe the calls; [`TicketServiceImpl`] runs them.
//!
//! [`TicketServiceImpl`]: crate::service::TicketServiceImpl

use crate::environment::TicketEnvironment;
use crate::types::{AccountId, PurchaseOutcome};
use smallvec::{SmallVec, smallvec};

/// Effects produced by one purchase, in execution order
pub type PurchaseEffects = SmallVec<[PurchaseEffect; 2]>;

/// One call to an external collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseEffect {
    /// Charge the account
    MakePayment {
        /// Account to charge
        account_id: AccountId,
        /// Amount to charge
        amount: u64,
    },
    /// Reserve seats for the account
    ReserveSeats {
        /// Account the seats are for
        account_id: AccountId,
        /// Number of seats
        seats: u64,
    },
}

impl PurchaseEffect {
    /// Performs the call against the environment's collaborators
    pub fn execute(self, env: &TicketEnvironment) {
        match self {
            Self::MakePayment { account_id, amount } => {
                env.payment.make_payment(account_id, amount);
            }
            Self::ReserveSeats { account_id, seats } => {
                env.reservation.reserve_seat(account_id, seats);
            }
        }
    }
}

impl PurchaseOutcome {
    /// Payment first, then seat reservation
    #[must_use]
    pub fn effects(&self) -> PurchaseEffects {
        smallvec![
            PurchaseEffect::MakePayment {
                account_id: self.account_id,
                amount: self.total_price,
            },
            PurchaseEffect::ReserveSeats {
                account_id: self.account_id,
                seats: self.total_seats,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_precedes_reservation() {
        let outcome = PurchaseOutcome {
            account_id: AccountId::new(1),
            total_price: 20,
            total_seats: 1,
        };

        assert_eq!(
            outcome.effects().as_slice(),
            &[
                PurchaseEffect::MakePayment {
                    account_id: AccountId::new(1),
                    amount: 20,
                },
                PurchaseEffect::ReserveSeats {
                    account_id: AccountId::new(1),
                    seats: 1,
                },
            ]
        );
    }

    #[test]
    fn test_effects_fit_inline() {
        let outcome = PurchaseOutcome {
            account_id: AccountId::new(9),
            total_price: 0,
            total_seats: 0,
        };
        assert!(!outcome.effects().spilled());
    }
}
