// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests and the binary import modules from this crate root.

pub mod core {
    pub mod ports;
    pub mod purchase;
}

pub mod application {
    pub mod command_handlers {
        pub mod purchase_tickets_handler;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_payment_gateway;
        pub mod in_memory_seat_reservations;
    }
    pub mod inbound {
        pub mod http;
    }
}

pub mod shell;
