//! Script templates for locking and unlocking transaction outputs.
//!
//! Templates pair a locking script constructor with an unlocker that
//! produces the matching scriptSig at signing time.

pub mod p2pkh;
pub mod p2sh;

use doge_script::Script;

use crate::transaction::Transaction;
use crate::TransactionError;

/// A template capable of producing an unlocking script for a transaction
/// input.
///
/// Implementations hold whatever signing material they need (private keys,
/// redeem scripts) and are handed the full transaction plus the input
/// index at signing time.
pub trait UnlockingScriptTemplate {
    /// Sign the specified input and produce its unlocking script.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed.
    /// * `input_index` - The index of the input to sign.
    fn sign(&self, tx: &Transaction, input_index: u32) -> Result<Script, TransactionError>;

    /// Estimate the byte length of the unlocking script this template
    /// will produce, for fee estimation before signing.
    fn estimate_length(&self, tx: &Transaction, input_index: u32) -> u32;
}
