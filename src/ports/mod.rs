//! Port traits: the seams between domain logic and I/O.

pub mod config_port;
pub mod data_port;
