//! Signature hash computation for transaction signing.
//!
//! Computes the hash that is signed by ECDSA to authorize spending a
//! transaction input. Dogecoin uses the original pre-segwit ("legacy")
//! sighash algorithm: a modified copy of the transaction is serialized
//! with input scripts blanked, the sighash type is appended, and the
//! result is double-SHA256 hashed.

use doge_primitives::hash::sha256d;
use doge_primitives::util::{VarInt, WireWriter};

use crate::transaction::Transaction;
use crate::TransactionError;

// -----------------------------------------------------------------------
// Sighash flag constants
// -----------------------------------------------------------------------

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u32 = 0x01;

/// Sign all inputs but no outputs, allowing outputs to be modified.
pub const SIGHASH_NONE: u32 = 0x02;

/// Sign all inputs and only the output with the same index as the signed input.
pub const SIGHASH_SINGLE: u32 = 0x03;

/// Combined with another flag: only sign the current input, allowing other
/// inputs to be added later.
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;

/// Mask applied to extract the base sighash type (ALL, NONE, SINGLE).
pub const SIGHASH_MASK: u32 = 0x1f;

// -----------------------------------------------------------------------
// Legacy signature hash
// -----------------------------------------------------------------------

/// Compute the legacy signature hash for a given input.
///
/// A modified serialization of the transaction is built where every
/// input script is blanked except the signed input, which carries the
/// `script_code` (the locking script being satisfied, or the redeem
/// script for P2SH spends). The 4-byte sighash type is appended before
/// double hashing.
///
/// SIGHASH_SINGLE with an input index beyond the last output reproduces
/// the historical "one hash" consensus quirk: the value 1 as a 32-byte
/// little-endian integer is returned instead of a real digest.
///
/// # Arguments
/// * `tx`           - The transaction being signed.
/// * `input_index`  - Index of the input being signed.
/// * `script_code`  - The script committed to by the signature.
/// * `sighash_type` - The combined sighash flags (e.g. `SIGHASH_ALL`).
///
/// # Returns
/// A 32-byte double-SHA256 hash to be signed by ECDSA.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    script_code: &[u8],
    sighash_type: u32,
) -> Result<[u8; 32], TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    let base_type = sighash_type & SIGHASH_MASK;
    if base_type == SIGHASH_SINGLE && input_index >= tx.outputs.len() {
        // The "one hash" quirk. Signing this value would be insecure, but
        // consensus requires reproducing it exactly.
        let mut one = [0u8; 32];
        one[0] = 0x01;
        return Ok(one);
    }

    let preimage = calc_preimage(tx, input_index, script_code, sighash_type)?;
    Ok(sha256d(&preimage))
}

/// Build the legacy sighash preimage bytes before double-hashing.
///
/// The preimage is the transaction re-serialized with:
/// - the signed input carrying `script_code` in place of its scriptSig,
///   all other input scripts empty;
/// - under ANYONECANPAY, only the signed input present;
/// - under NONE, no outputs and other inputs' sequences zeroed;
/// - under SINGLE, outputs truncated after the signed index, earlier
///   outputs replaced by null outputs (value -1, empty script), and other
///   inputs' sequences zeroed;
/// - the 4-byte LE sighash type appended.
///
/// # Arguments
/// * `tx`           - The transaction being signed.
/// * `input_index`  - Index of the input being signed.
/// * `script_code`  - The script committed to by the signature.
/// * `sighash_type` - The combined sighash flags.
///
/// # Returns
/// The raw preimage bytes (not yet hashed).
pub fn calc_preimage(
    tx: &Transaction,
    input_index: usize,
    script_code: &[u8],
    sighash_type: u32,
) -> Result<Vec<u8>, TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    let base_type = sighash_type & SIGHASH_MASK;
    let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;

    let mut writer = WireWriter::with_capacity(256);

    writer.write_u32_le(tx.version);

    // Inputs.
    if anyone_can_pay {
        writer.write_varint(VarInt::from(1u64));
        write_preimage_input(&mut writer, tx, input_index, input_index, script_code, base_type);
    } else {
        writer.write_varint(VarInt::from(tx.inputs.len()));
        for i in 0..tx.inputs.len() {
            write_preimage_input(&mut writer, tx, i, input_index, script_code, base_type);
        }
    }

    // Outputs.
    match base_type {
        SIGHASH_NONE => {
            writer.write_varint(VarInt::from(0u64));
        }
        SIGHASH_SINGLE => {
            writer.write_varint(VarInt::from(input_index + 1));
            for (i, output) in tx.outputs.iter().take(input_index + 1).enumerate() {
                if i < input_index {
                    // Null output: value -1, empty script.
                    writer.write_u64_le(u64::MAX);
                    writer.write_varint(VarInt::from(0u64));
                } else {
                    output.write_to(&mut writer);
                }
            }
        }
        _ => {
            writer.write_varint(VarInt::from(tx.outputs.len()));
            for output in &tx.outputs {
                output.write_to(&mut writer);
            }
        }
    }

    writer.write_u32_le(tx.lock_time);
    writer.write_u32_le(sighash_type);

    Ok(writer.into_bytes())
}

/// Serialize a single input for the sighash preimage.
///
/// The signed input carries `script_code`; every other input is blanked.
/// Under NONE and SINGLE, other inputs' sequence numbers are zeroed so
/// their owners cannot be bound to this signature.
fn write_preimage_input(
    writer: &mut WireWriter,
    tx: &Transaction,
    index: usize,
    signed_index: usize,
    script_code: &[u8],
    base_type: u32,
) {
    let input = &tx.inputs[index];
    writer.write_bytes(&input.source_txid);
    writer.write_u32_le(input.source_tx_out_index);

    if index == signed_index {
        writer.write_varint(VarInt::from(script_code.len()));
        writer.write_bytes(script_code);
        writer.write_u32_le(input.sequence_number);
    } else {
        writer.write_varint(VarInt::from(0u64));
        let sequence = if base_type == SIGHASH_NONE || base_type == SIGHASH_SINGLE {
            0
        } else {
            input.sequence_number
        };
        writer.write_u32_le(sequence);
    }
}
