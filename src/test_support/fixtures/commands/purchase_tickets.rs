// Shared test fixture for the PurchaseTickets command.
// Compiled into the crate only during tests via the `test_support` module
// declared in `src/lib.rs`.

use crate::core::purchase::account::AccountId;
use crate::core::purchase::decider::purchase_tickets::command::PurchaseTickets;
use crate::core::purchase::request::TicketRequest;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseTicketsDto {
    pub account_id: String,
    pub tickets: Vec<TicketRequest>,
}

pub struct PurchaseTicketsBuilder {
    inner: PurchaseTickets,
}

impl Default for PurchaseTicketsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PurchaseTicketsBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/commands/json/purchase_tickets.json")
                .unwrap();
        let dto: PurchaseTicketsDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: PurchaseTickets {
                account_id: AccountId::new(dto.account_id),
                requests: dto.tickets,
            },
        }
    }

    pub fn account_id(mut self, v: AccountId) -> Self {
        self.inner.account_id = v;
        self
    }

    pub fn requests(mut self, v: Vec<TicketRequest>) -> Self {
        self.inner.requests = v;
        self
    }

    pub fn push_request(mut self, v: TicketRequest) -> Self {
        self.inner.requests.push(v);
        self
    }

    pub fn build(self) -> PurchaseTickets {
        self.inner
    }
}

#[cfg(test)]
mod purchase_tickets_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = PurchaseTicketsBuilder::default().build();
        assert_eq!(built.account_id, AccountId::new("acct-fixed-0001"));
        assert_eq!(
            built.requests,
            vec![
                TicketRequest::new("ADULT", 2),
                TicketRequest::new("CHILD", 1),
            ]
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = PurchaseTicketsBuilder::new()
            .account_id(AccountId::new("acct-override"))
            .requests(vec![TicketRequest::new("ADULT", 1)])
            .push_request(TicketRequest::new("INFANT", 1))
            .build();

        assert_eq!(custom.account_id, AccountId::new("acct-override"));
        assert_eq!(
            custom.requests,
            vec![
                TicketRequest::new("ADULT", 1),
                TicketRequest::new("INFANT", 1),
            ]
        );
    }
}
