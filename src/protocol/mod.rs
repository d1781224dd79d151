//! JSON boundary between a transport and the session.
//!
//! Transports hand raw request strings to `handle_message` and deliver the
//! resulting `Reply` either to everyone or to the requester only. The
//! transport itself (sockets, rooms, connection lifecycle) lives elsewhere.

pub mod handler;
pub mod message;

pub use handler::{handle_message, handle_request};
pub use message::{ErrorMessage, ProtocolError, Reply, Request};
