//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;
pub mod revocation;

pub use memory::InMemoryAuthRepository;
pub use postgres::PgAuthRepository;
pub use revocation::{RevocationRegistry, spawn_revocation_sweeper};
