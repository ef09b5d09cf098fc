//! # sitekv Domain Layer
//!
//! Core types and contracts shared by the KV proxy endpoint and the client
//! persistence cache.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | [`Entry`] and its stored-string encoding |
//! | [`error`] | Error taxonomy and [`Result`] alias |
//! | [`ports`] | Storage traits implemented by `sitekv-providers` |
//! | [`constants`] | Wire paths, local key prefix, error messages |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;

pub use entities::Entry;
pub use error::{Error, Result};
pub use ports::{BackingStore, LocalStore, RemoteKv};
