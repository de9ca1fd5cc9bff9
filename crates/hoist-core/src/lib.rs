//! Core data types for the hoist upload client: artifact coordinates,
//! upload sessions, finalize requests, and client configuration.

pub mod config;
pub mod coordinate;
pub mod session;
