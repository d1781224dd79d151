//! Reserve system for captured pieces.
//!
//! Each team owns one pool. Captures on either board feed a pool; drops on
//! either board drain it. The session is the only writer.
//!
//! ## Key Types
//!
//! - `ReservePool`: Token storage and the capture/consume operations
//! - `ReserveSnapshot`: Copy of both pools for broadcast

pub mod pool;

pub use pool::{ReservePool, ReserveSnapshot, Tokens};
