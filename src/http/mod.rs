//! HTTP serving concerns that sit outside the route handlers.
//!
//! - **negotiate**: Accept header negotiation between HTML and JSON
//! - **server**: Listener startup for plain HTTP (TLS terminates at the ingress)
//! - **shutdown**: Graceful shutdown on SIGTERM/SIGINT

pub mod negotiate;
mod server;
mod shutdown;

pub use server::{start_server, ServerError};
