// This module groups ticket purchase domain components.
//
// Structure
// - account.rs: opaque account identifier passed through to the sinks
// - category.rs: the closed set of ticket categories and their seat semantics
// - policy.rs: immutable purchase configuration (price table, ticket limit)
// - request.rs: raw ticket request line items as supplied by the caller
// - outcome.rs: the priced result of a valid batch
// - decider/: pure decision logic per command intent

pub mod account;
pub mod category;
pub mod outcome;
pub mod policy;
pub mod request;
pub mod decider {
    pub mod purchase_tickets {
        pub mod command;
        pub mod decide;
    }
}
