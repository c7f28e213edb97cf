// The priced result of a valid purchase batch.
//
// Purpose
// - Pair the two aggregates the sinks need: total price and total seats.
//   Derived deterministically from a validated batch, never retained.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    pub total_price: u32,
    pub total_seats: u32,
}
