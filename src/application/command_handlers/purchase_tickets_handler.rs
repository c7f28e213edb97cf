// Purchase command handler orchestrates the purchase flow.
//
// Responsibilities
// - Run the pure decider over the request batch.
// - On rejection, return the reason without touching either sink.
// - On success, dispatch payment first, then the seat reservation, both with
//   the same pre-validated aggregates. No batch is ever partially committed.

use crate::core::ports::{PaymentGateway, SeatReservations};
use crate::core::purchase::decider::purchase_tickets::command::PurchaseTickets;
use crate::core::purchase::decider::purchase_tickets::decide::{
    PurchaseRejection, decide_purchase,
};
use crate::core::purchase::outcome::PurchaseOutcome;
use crate::core::purchase::policy::PurchasePolicy;
use std::sync::Arc;

pub struct PurchaseTicketsHandler<TPayments, TReservations>
where
    TPayments: PaymentGateway + 'static,
    TReservations: SeatReservations + 'static,
{
    policy: PurchasePolicy,
    payments: Arc<TPayments>,
    reservations: Arc<TReservations>,
}

impl<TPayments, TReservations> PurchaseTicketsHandler<TPayments, TReservations>
where
    TPayments: PaymentGateway + 'static,
    TReservations: SeatReservations + 'static,
{
    pub fn new(
        policy: PurchasePolicy,
        payments: Arc<TPayments>,
        reservations: Arc<TReservations>,
    ) -> Self {
        Self {
            policy,
            payments,
            reservations,
        }
    }

    pub async fn handle(
        &self,
        command: PurchaseTickets,
    ) -> Result<PurchaseOutcome, PurchaseRejection> {
        let outcome = decide_purchase(&self.policy, &command.requests)?;

        self.payments
            .make_payment(&command.account_id, outcome.total_price)
            .await;
        self.reservations
            .reserve_seats(&command.account_id, outcome.total_seats)
            .await;

        tracing::info!(
            account_id = %command.account_id,
            total_price = outcome.total_price,
            total_seats = outcome.total_seats,
            "purchase dispatched"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod purchase_tickets_handler_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_payment_gateway::InMemoryPaymentGateway;
    use crate::adapters::in_memory::in_memory_seat_reservations::InMemorySeatReservations;
    use crate::core::purchase::account::AccountId;
    use crate::core::purchase::request::TicketRequest;
    use crate::test_support::fixtures::commands::purchase_tickets::PurchaseTicketsBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        PurchaseTickets,
        Arc<InMemoryPaymentGateway>,
        Arc<InMemorySeatReservations>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let command = PurchaseTicketsBuilder::new().build();
        let payments = Arc::new(InMemoryPaymentGateway::new());
        let reservations = Arc::new(InMemorySeatReservations::new());
        (command, payments, reservations)
    }

    fn make_handler(
        payments: Arc<InMemoryPaymentGateway>,
        reservations: Arc<InMemorySeatReservations>,
    ) -> PurchaseTicketsHandler<InMemoryPaymentGateway, InMemorySeatReservations> {
        PurchaseTicketsHandler::new(PurchasePolicy::default(), payments, reservations)
    }

    #[rstest]
    #[tokio::test]
    async fn handle_purchase_dispatches_both_sinks_with_the_aggregates(
        before_each: BeforeEachReturn,
    ) {
        let (command, payments, reservations) = before_each;
        let account_id = command.account_id.clone();
        let handler = make_handler(payments.clone(), reservations.clone());

        let outcome = handler.handle(command).await.expect("handle failed");

        assert_eq!(outcome.total_price, 250);
        assert_eq!(outcome.total_seats, 3);
        let recorded_payments = payments.payments.lock().await;
        assert_eq!(recorded_payments.len(), 1);
        assert_eq!(recorded_payments[0].account_id, account_id);
        assert_eq!(recorded_payments[0].total_price_to_pay, 250);
        let recorded_reservations = reservations.reservations.lock().await;
        assert_eq!(recorded_reservations.len(), 1);
        assert_eq!(recorded_reservations[0].account_id, account_id);
        assert_eq!(recorded_reservations[0].total_seats_to_allocate, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_purchase_invokes_no_sink_on_rejection(before_each: BeforeEachReturn) {
        let (_, payments, reservations) = before_each;
        let command = PurchaseTicketsBuilder::new()
            .requests(vec![TicketRequest::new("CHILD", 1)])
            .build();
        let handler = make_handler(payments.clone(), reservations.clone());

        let result = handler.handle(command).await;

        assert_eq!(result, Err(PurchaseRejection::NoAdultTicket));
        assert!(payments.payments.lock().await.is_empty());
        assert!(reservations.reservations.lock().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn handle_purchase_rejects_against_an_overridden_limit(before_each: BeforeEachReturn) {
        let (command, payments, reservations) = before_each;
        let policy = PurchasePolicy {
            max_tickets_per_purchase: 2,
            ..Default::default()
        };
        let handler =
            PurchaseTicketsHandler::new(policy, payments.clone(), reservations.clone());

        // The fixture batch holds 3 tickets, one over the overridden limit.
        let result = handler.handle(command).await;

        assert_eq!(
            result,
            Err(PurchaseRejection::TicketLimitExceeded { max: 2 })
        );
        assert!(payments.payments.lock().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn handle_purchase_passes_the_account_id_through_unchanged(
        before_each: BeforeEachReturn,
    ) {
        let (_, payments, reservations) = before_each;
        let command = PurchaseTicketsBuilder::new()
            .account_id(AccountId::new("acct-passthrough"))
            .build();
        let handler = make_handler(payments.clone(), reservations.clone());

        handler.handle(command).await.expect("handle failed");

        assert_eq!(
            payments.payments.lock().await[0].account_id,
            AccountId::new("acct-passthrough")
        );
        assert_eq!(
            reservations.reservations.lock().await[0].account_id,
            AccountId::new("acct-passthrough")
        );
    }
}
