// Pure decision function for a ticket purchase.
//
// Purpose
// - Validate the request batch against the purchase policy and price it.
//
// Responsibilities
// - Enforce the gates in order, failing fast on the first violated gate:
//   non-empty batch, positive quantities, known ticket types, per-transaction
//   ticket limit, accompanying adult.
// - Aggregate total price and total seats only over a fully validated batch.
// - Never perform input or output.

use crate::core::purchase::category::{TicketCategory, UnknownCategory};
use crate::core::purchase::outcome::PurchaseOutcome;
use crate::core::purchase::policy::PurchasePolicy;
use crate::core::purchase::request::TicketRequest;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum PurchaseRejection {
    #[error("no tickets requested")]
    EmptyBatch,

    #[error("invalid ticket quantity {quantity}: must be a positive whole number")]
    InvalidQuantity { quantity: i64 },

    #[error("unknown ticket type: {0}")]
    UnknownTicketType(String),

    #[error("cannot purchase more than {max} tickets at a time")]
    TicketLimitExceeded { max: u32 },

    #[error("child and infant tickets require an accompanying adult ticket")]
    NoAdultTicket,
}

pub fn decide_purchase(
    policy: &PurchasePolicy,
    requests: &[TicketRequest],
) -> Result<PurchaseOutcome, PurchaseRejection> {
    if requests.is_empty() {
        return Err(PurchaseRejection::EmptyBatch);
    }

    for request in requests {
        if request.quantity <= 0 {
            return Err(PurchaseRejection::InvalidQuantity {
                quantity: request.quantity,
            });
        }
    }

    let mut lines: Vec<(TicketCategory, u64)> = Vec::with_capacity(requests.len());
    for request in requests {
        let category = request
            .ticket_type
            .parse::<TicketCategory>()
            .map_err(|UnknownCategory(raw)| PurchaseRejection::UnknownTicketType(raw))?;
        lines.push((category, request.quantity as u64));
    }

    // An overflowing sum is necessarily over the limit.
    let total_tickets = lines
        .iter()
        .try_fold(0u64, |total, (_, quantity)| total.checked_add(*quantity));
    match total_tickets {
        Some(total) if total <= u64::from(policy.max_tickets_per_purchase) => {}
        _ => {
            return Err(PurchaseRejection::TicketLimitExceeded {
                max: policy.max_tickets_per_purchase,
            });
        }
    }

    let includes_adult = lines
        .iter()
        .any(|(category, _)| *category == TicketCategory::Adult);
    if !includes_adult {
        return Err(PurchaseRejection::NoAdultTicket);
    }

    // The batch total is at most max_tickets_per_purchase, so each quantity
    // fits in u32.
    let total_price = lines
        .iter()
        .map(|(category, quantity)| policy.prices.price_of(*category) * (*quantity as u32))
        .sum();
    let total_seats = lines
        .iter()
        .filter(|(category, _)| category.occupies_seat())
        .map(|(_, quantity)| *quantity as u32)
        .sum();

    Ok(PurchaseOutcome {
        total_price,
        total_seats,
    })
}
