// Composition root for the cinema tickets service.
//
// Responsibilities
// - Instantiate concrete sink implementations.
// - Wire them into the purchase command handler.
// - Expose the HTTP router the binary serves.

pub mod http;
pub mod state;
