#![deny(missing_docs)]

//! Dogecoin Inscription SDK - Complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage.

pub use doge_primitives as primitives;
pub use doge_script as script;
pub use doge_transaction as transaction;
pub use doge_relay as relay;
pub use doge_inscribe as inscribe;
