// In memory implementation of the PaymentGateway port.
//
// Purpose
// - Support command handler tests and local development without a real
//   payment provider.
//
// Responsibilities
// - Record every payment request in a list for inspection.

use crate::core::ports::PaymentGateway;
use crate::core::purchase::account::AccountId;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub account_id: AccountId,
    pub total_price_to_pay: u32,
}

#[derive(Default)]
pub struct InMemoryPaymentGateway {
    pub payments: Mutex<Vec<PaymentRecord>>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn make_payment(&self, account_id: &AccountId, total_price_to_pay: u32) {
        let mut guard = self.payments.lock().await;
        guard.push(PaymentRecord {
            account_id: account_id.clone(),
            total_price_to_pay,
        });
    }
}

#[cfg(test)]
mod in_memory_payment_gateway_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_record_the_payment() {
        let gateway = InMemoryPaymentGateway::new();
        let account_id = AccountId::new("acct-0001");

        gateway.make_payment(&account_id, 250).await;

        let payments = gateway.payments.lock().await;
        assert_eq!(
            *payments,
            vec![PaymentRecord {
                account_id,
                total_price_to_pay: 250,
            }]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_payments_in_call_order() {
        let gateway = InMemoryPaymentGateway::new();
        gateway.make_payment(&AccountId::new("acct-1"), 100).await;
        gateway.make_payment(&AccountId::new("acct-2"), 50).await;

        let payments = gateway.payments.lock().await;
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].total_price_to_pay, 100);
        assert_eq!(payments[1].total_price_to_pay, 50);
    }
}
