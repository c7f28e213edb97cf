// One line item of a purchase: a category plus a quantity.
//
// Responsibilities
// - Carry the caller's input exactly as supplied. Both fields are deliberately
//   raw: a request with quantity 0 or ticket type "SENIOR" is legitimate input
//   the decider must reject, not a state the type system forbids.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub ticket_type: String,
    pub quantity: i64,
}

impl TicketRequest {
    pub fn new(ticket_type: impl Into<String>, quantity: i64) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod ticket_request_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_carry_invalid_input_unchanged() {
        let request = TicketRequest::new("SENIOR", -3);
        assert_eq!(request.ticket_type, "SENIOR");
        assert_eq!(request.quantity, -3);
    }

    #[rstest]
    fn it_should_deserialize_from_the_wire_shape() {
        let request: TicketRequest =
            serde_json::from_str(r#"{"ticket_type":"ADULT","quantity":2}"#).unwrap();
        assert_eq!(request, TicketRequest::new("ADULT", 2));
    }
}
