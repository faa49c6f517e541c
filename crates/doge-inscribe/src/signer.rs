//! Input signing for chain links and funding coins.
//!
//! Two signing modes cover every input in an inscription chain:
//! funding inputs are ordinary P2PKH spends signed against the coin's
//! own locking script, while the chain-link input (input 0 of every
//! transaction after the first) is signed against the previous commit's
//! lock script and unlocked with the partial reveal.

use doge_primitives::ec::PrivateKey;
use doge_script::Script;
use doge_transaction::sighash::{signature_hash, SIGHASH_ALL};
use doge_transaction::Transaction;

use crate::assembler::PriorLink;
use crate::ledger::{CoinLedger, Outpoint};
use crate::lock::unlock_script;
use crate::InscribeError;

/// Produce `DER signature || sighash byte` for one input.
fn input_signature(
    tx: &Transaction,
    input_index: usize,
    script_code: &Script,
    key: &PrivateKey,
) -> Result<Vec<u8>, InscribeError> {
    let hash = signature_hash(tx, input_index, script_code.to_bytes(), SIGHASH_ALL)?;
    let signature = key.sign(&hash)?;

    let der = signature.to_der();
    let mut sig_bytes = Vec::with_capacity(der.len() + 1);
    sig_bytes.extend_from_slice(&der);
    sig_bytes.push(SIGHASH_ALL as u8);
    Ok(sig_bytes)
}

/// Sign every input whose outpoint is found in the ledger.
///
/// Each matching input receives a standard P2PKH unlocking script
/// (`<sig> <pubkey>`) computed against the coin's own locking script.
/// Inputs not present in the ledger (the chain-link input) are left
/// untouched.
pub fn sign_funding_inputs(
    tx: &mut Transaction,
    key: &PrivateKey,
    ledger: &CoinLedger,
) -> Result<(), InscribeError> {
    let pub_key_bytes = key.pub_key().to_compressed();

    for i in 0..tx.inputs.len() {
        let outpoint = Outpoint::new(tx.inputs[i].source_txid, tx.inputs[i].source_tx_out_index);
        let coin = match ledger.find(&outpoint) {
            Some(coin) => coin.clone(),
            None => continue,
        };

        let sig_bytes = input_signature(tx, i, &coin.locking_script, key)?;

        let mut script = Script::new();
        script.append_push_data(&sig_bytes)?;
        script.append_push_data(&pub_key_bytes)?;
        tx.inputs[i].unlocking_script = Some(script);
    }

    Ok(())
}

/// Sign the chain-link input (input 0) against the previous commit.
///
/// The signature hash commits to the previous lock script; the unlock
/// script reveals the previous partial, the signature, and the lock
/// script itself.
pub fn sign_chain_input(
    tx: &mut Transaction,
    key: &PrivateKey,
    prior: &PriorLink,
) -> Result<(), InscribeError> {
    if tx.inputs.is_empty() {
        return Err(InscribeError::SigningError(
            "no chain-link input to sign".to_string(),
        ));
    }

    let sig_bytes = input_signature(tx, 0, &prior.lock_script, key)?;
    let unlock = unlock_script(&prior.partial, &sig_bytes, &prior.lock_script)?;
    tx.inputs[0].unlocking_script = Some(unlock);
    Ok(())
}
