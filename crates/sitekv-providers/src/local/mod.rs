//! Local durable store providers
//!
//! Implements [`LocalStore`](sitekv_domain::ports::LocalStore) for the client
//! persistence cache.

pub mod file;
pub mod memory;

pub use file::FileLocalStore;
pub use memory::MemoryLocalStore;
