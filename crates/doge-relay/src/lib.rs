#![deny(missing_docs)]

//! # doge-relay
//!
//! HTTP client for the dogeord wallet API: fetches the unspent output
//! set for an address and broadcasts raw transactions to the Dogecoin
//! network.
//!
//! # Example
//!
//! ```no_run
//! use doge_relay::{RelayClient, RelayConfig};
//!
//! let client = RelayClient::new(RelayConfig::default());
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::RelayClient;
pub use error::RelayError;
pub use types::{RelayConfig, UtxoRecord};
