//! Elliptic curve cryptography on secp256k1.
//!
//! Dogecoin uses the same curve as Bitcoin, so keys and signatures are
//! interoperable at the math level. Only the WIF network prefixes differ.

mod private_key;
mod public_key;
mod signature;

pub use private_key::{PrivateKey, MAINNET_WIF_PREFIX, TESTNET_WIF_PREFIX};
pub use public_key::PublicKey;
pub use signature::Signature;
