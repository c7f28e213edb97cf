// HTTP inbound adapter for the purchase-tickets use case.
//
// Responsibilities
// - Map the JSON body onto the PurchaseTickets command.
// - Provision an account id when the caller supplies none; the core treats
//   account provisioning as a collaborator concern, and at this edge the
//   shell is that collaborator.
// - Map rejection kinds onto HTTP statuses: malformed body 422, rejected
//   purchase 400 with the reason, success 200 with the totals.

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::purchase::account::AccountId;
use crate::core::purchase::decider::purchase_tickets::command::PurchaseTickets;
use crate::core::purchase::request::TicketRequest;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PurchaseTicketsBody {
    pub account_id: Option<String>,
    pub tickets: Vec<TicketRequest>,
}

#[derive(Serialize)]
pub struct PurchaseTicketsResponse {
    pub account_id: String,
    pub total_price: u32,
    pub total_seats: u32,
}

#[derive(Serialize)]
pub struct RejectionResponse {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PurchaseTicketsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let account_id = match body.account_id {
        Some(raw) => AccountId::new(raw),
        None => AccountId::new(Uuid::now_v7().to_string()),
    };

    let command = PurchaseTickets {
        account_id: account_id.clone(),
        requests: body.tickets,
    };

    match state.purchase_handler.handle(command).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(PurchaseTicketsResponse {
                account_id: account_id.to_string(),
                total_price: outcome.total_price,
                total_seats: outcome.total_seats,
            }),
        )
            .into_response(),
        Err(rejection) => (
            StatusCode::BAD_REQUEST,
            Json(RejectionResponse {
                error: rejection.to_string(),
            }),
        )
            .into_response(),
    }
}
