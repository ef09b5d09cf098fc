//! Transport layer
//!
//! | Transport | Description |
//! |-----------|-------------|
//! | [`http`] | Rocket server for the KV proxy routes |

pub mod http;

pub use http::{HttpTransport, HttpTransportConfig};
