//! Bughouse session: the single owner of both boards and both reserves.
//!
//! ## Key Types
//!
//! - `BughouseSession`: Validates and applies move and drop requests
//! - `BoardUpdate`: State broadcast after an accepted request
//! - `BoardPair`: The two boards, addressed by `BoardId`
//! - `SharedSession`: Lock-guarded handle for multi-threaded transports

pub mod board;
pub mod bughouse;
pub mod shared;

pub use board::BoardPair;
pub use bughouse::{BoardUpdate, BughouseSession};
pub use shared::SharedSession;
