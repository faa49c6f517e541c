//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Creates standard P2PKH locking scripts (`OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`) and unlocking scripts (`<sig> <pubkey>`).

use doge_primitives::ec::PrivateKey;
use doge_script::opcodes::*;
use doge_script::{Address, Script};

use crate::sighash::SIGHASH_ALL;
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Create a P2PKH locking script from a Dogecoin address.
///
/// Produces: `OP_DUP OP_HASH160 <20-byte pubkey hash> OP_EQUALVERIFY OP_CHECKSIG`
///
/// # Arguments
/// * `address` - The address whose public key hash to lock to.
///
/// # Returns
/// The 25-byte P2PKH locking script.
pub fn lock(address: &Address) -> Script {
    let pkh = &address.public_key_hash;

    let mut bytes = Vec::with_capacity(25);
    bytes.push(OP_DUP);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(pkh);
    bytes.push(OP_EQUALVERIFY);
    bytes.push(OP_CHECKSIG);

    Script::from_bytes(&bytes)
}

/// Create a P2PKH unlocker for signing transaction inputs.
///
/// # Arguments
/// * `private_key` - The private key used to sign.
/// * `sighash_flag` - Optional sighash flag. Defaults to `SIGHASH_ALL` (0x01).
///
/// # Returns
/// A `P2PKH` instance implementing `UnlockingScriptTemplate`.
pub fn unlock(private_key: PrivateKey, sighash_flag: Option<u32>) -> P2PKH {
    P2PKH {
        private_key,
        sighash_flag: sighash_flag.unwrap_or(SIGHASH_ALL),
    }
}

/// P2PKH signing template holding a private key and sighash flag.
///
/// Implements `UnlockingScriptTemplate` to produce unlocking scripts
/// of the form `<DER_signature + sighash_byte> <compressed_pubkey>`.
pub struct P2PKH {
    /// The private key used for ECDSA signing.
    private_key: PrivateKey,

    /// The sighash flag to use (e.g. `SIGHASH_ALL`).
    sighash_flag: u32,
}

impl UnlockingScriptTemplate for P2PKH {
    /// Sign the specified input and produce the unlocking script.
    ///
    /// Computes the legacy signature hash for the input, signs it with
    /// RFC6979 deterministic ECDSA, and constructs the unlocking script:
    /// `<DER_sig || sighash_byte> <compressed_pubkey>`.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed.
    /// * `input_index` - The index of the input to sign.
    fn sign(&self, tx: &Transaction, input_index: u32) -> Result<Script, TransactionError> {
        let idx = input_index as usize;

        if idx >= tx.inputs.len() {
            return Err(TransactionError::SigningError(format!(
                "input index {} out of range (tx has {} inputs)",
                idx,
                tx.inputs.len()
            )));
        }

        let input = &tx.inputs[idx];
        if input.source_tx_output().is_none() {
            return Err(TransactionError::SigningError(
                "missing source output on input (no previous tx info)".to_string(),
            ));
        }

        let sig_hash = tx.calc_input_signature_hash(idx, self.sighash_flag)?;
        let signature = self.private_key.sign(&sig_hash)?;
        let pub_key_bytes = self.private_key.pub_key().to_compressed();

        // DER signature with the sighash flag byte appended.
        let der_sig = signature.to_der();
        let mut sig_buf = Vec::with_capacity(der_sig.len() + 1);
        sig_buf.extend_from_slice(&der_sig);
        sig_buf.push(self.sighash_flag as u8);

        let mut script = Script::new();
        script.append_push_data(&sig_buf)?;
        script.append_push_data(&pub_key_bytes)?;

        Ok(script)
    }

    /// Estimate the byte length of a P2PKH unlocking script.
    ///
    /// A typical P2PKH scriptSig is approximately 106 bytes:
    /// 1 (push len) + 72 (DER sig + sighash) + 1 (push len) + 33 (compressed pubkey).
    fn estimate_length(&self, _tx: &Transaction, _input_index: u32) -> u32 {
        106
    }
}
