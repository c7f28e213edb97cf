// Command data type for purchasing tickets.
//
// Purpose
// - Express user intent to buy a batch of tickets against one account.
//
// Responsibilities
// - Carry input data for the decider to validate and price.
// - Be independent of transport layer details (not tied to HTTP).

use crate::core::purchase::account::AccountId;
use crate::core::purchase::request::TicketRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseTickets {
    pub account_id: AccountId,
    pub requests: Vec<TicketRequest>,
}
