//! Repository implementations
//!
//! - `memory` - process-local storage (default)
//! - `mongo` - MongoDB document store (cargo feature `mongo`)

pub mod memory;
#[cfg(feature = "mongo")]
pub mod mongo;

pub use memory::InMemoryUserRepository;
#[cfg(feature = "mongo")]
pub use mongo::MongoUserRepository;
