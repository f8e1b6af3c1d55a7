//! Post store collaborator interface and adapters.
//!
//! The post store is owned by an external persistence service; this
//! crate defines the seam the poller and publish pipeline consume and
//! provides two implementations: an in-memory store for tests and
//! demos, and a REST adapter speaking a PostgREST-style API.

#![warn(missing_docs)]

mod memory;
mod rest;
mod traits;

pub use memory::InMemoryPostStore;
pub use rest::{RestPostStore, RestStoreConfig};
pub use traits::PostStore;
