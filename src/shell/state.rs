use crate::adapters::in_memory::in_memory_payment_gateway::InMemoryPaymentGateway;
use crate::adapters::in_memory::in_memory_seat_reservations::InMemorySeatReservations;
use crate::application::command_handlers::purchase_tickets_handler::PurchaseTicketsHandler;
use crate::core::purchase::policy::PurchasePolicy;
use std::sync::Arc;

// The sinks stay reachable next to the handler so tests and diagnostics can
// inspect what was dispatched.
#[derive(Clone)]
pub struct AppState {
    pub purchase_handler:
        Arc<PurchaseTicketsHandler<InMemoryPaymentGateway, InMemorySeatReservations>>,
    pub payments: Arc<InMemoryPaymentGateway>,
    pub reservations: Arc<InMemorySeatReservations>,
}

impl AppState {
    pub fn new(policy: PurchasePolicy) -> Self {
        let payments = Arc::new(InMemoryPaymentGateway::new());
        let reservations = Arc::new(InMemorySeatReservations::new());
        let purchase_handler = Arc::new(PurchaseTicketsHandler::new(
            policy,
            payments.clone(),
            reservations.clone(),
        ));
        Self {
            purchase_handler,
            payments,
            reservations,
        }
    }
}
