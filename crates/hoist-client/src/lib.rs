//! Client for the repository manager's upload API: server URL layout,
//! authentication, and the async transport operations (repository
//! listing, staging-area clear, per-file staging, finalize).

pub mod repository;
pub mod transport;
