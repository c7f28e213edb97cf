// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the two outbound sinks as traits: the payment gateway and the
//   seat reservation service.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
// - Per the collaborators' documented contract both operations always succeed
//   synchronously, and this system never inspects a failure from them. The
//   signatures are therefore infallible; a production adapter targeting a
//   fallible backend would need a widened contract and compensating actions,
//   which are outside this core.
//
// Testing guidance
// - Provide in memory implementations that record calls for inspection.

use crate::core::purchase::account::AccountId;
use async_trait::async_trait;

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn make_payment(&self, account_id: &AccountId, total_price_to_pay: u32);
}

#[async_trait]
pub trait SeatReservations: Send + Sync {
    async fn reserve_seats(&self, account_id: &AccountId, total_seats_to_allocate: u32);
}
