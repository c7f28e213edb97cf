// In memory implementation of the SeatReservations port.
//
// Purpose
// - Support command handler tests and local development without a real
//   seat booking backend.
//
// Responsibilities
// - Record every reservation request in a list for inspection.

use crate::core::ports::SeatReservations;
use crate::core::purchase::account::AccountId;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRecord {
    pub account_id: AccountId,
    pub total_seats_to_allocate: u32,
}

#[derive(Default)]
pub struct InMemorySeatReservations {
    pub reservations: Mutex<Vec<ReservationRecord>>,
}

impl InMemorySeatReservations {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SeatReservations for InMemorySeatReservations {
    async fn reserve_seats(&self, account_id: &AccountId, total_seats_to_allocate: u32) {
        let mut guard = self.reservations.lock().await;
        guard.push(ReservationRecord {
            account_id: account_id.clone(),
            total_seats_to_allocate,
        });
    }
}
