//! Repositories implementing the core storage contracts.
//!
//! Each repository wraps a `DatabaseConnection` and hides every `SeaORM`
//! detail from the services that consume it.

pub mod entry;
pub mod user;

pub use entry::EntryRepository;
pub use user::UserRepository;
