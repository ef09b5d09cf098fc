//! Storage ports
//!
//! | Port | Side | Implementations (`sitekv-providers`) |
//! |------|------|--------------------------------------|
//! | [`BackingStore`] | proxy | Memory, Redis, Cloudflare Workers KV |
//! | [`LocalStore`] | client | Memory, JSON file |
//! | [`RemoteKv`] | client | HTTP client against the proxy |

pub mod backing_store;
pub mod local_store;
pub mod remote;

pub use backing_store::BackingStore;
pub use local_store::LocalStore;
pub use remote::RemoteKv;
