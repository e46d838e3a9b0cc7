//! Service Layer
//!
//! Abstractions over collaborators the host supplies (token storage).
//! Components depend on the traits here, never on a concrete backend.

mod token_store;

pub use token_store::{MemoryTokenStore, TokenStore};
