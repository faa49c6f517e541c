//! Transaction construction, serialization, and signature hashing.
//!
//! The central `Transaction` type with inputs, outputs, version, and
//! lock time. Serializes to and from the Bitcoin-family wire format used
//! by Dogecoin, and computes legacy signature hashes for signing.

use std::fmt;

use doge_primitives::chainhash::{double_hash_h, Hash, MAX_HASH_STRING_SIZE};
use doge_primitives::hash::sha256d;
use doge_primitives::util::{VarInt, WireReader, WireWriter};
use doge_script::Script;

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::sighash;
use crate::TransactionError;

/// Default transaction version.
pub const TRANSACTION_VERSION: u32 = 1;

/// A Dogecoin transaction.
///
/// Transfers value from `inputs` (references to unspent outputs of prior
/// transactions) to `outputs` (new spendable outputs with locking
/// scripts). Supports the full build/sign/serialize cycle:
///
/// ```text
/// let mut tx = Transaction::new();
/// tx.add_input(input);
/// tx.add_output(output);
/// let sighash = tx.calc_input_signature_hash(0, sighash::SIGHASH_ALL)?;
/// // sign, attach unlocking script, then:
/// let raw = tx.to_hex();
/// ```
#[derive(Clone, Debug)]
pub struct Transaction {
    /// Transaction format version.
    pub version: u32,

    /// The inputs spending previous outputs.
    pub inputs: Vec<TransactionInput>,

    /// The newly created outputs.
    pub outputs: Vec<TransactionOutput>,

    /// Earliest time or block height at which the transaction may be mined.
    /// Zero means immediately valid.
    pub lock_time: u32,
}

impl Transaction {
    /// Create a new empty `Transaction` with version 1 and no lock time.
    pub fn new() -> Self {
        Transaction {
            version: TRANSACTION_VERSION,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    /// Parse a transaction from its hex-encoded wire serialization.
    ///
    /// # Arguments
    /// * `hex_str` - The hex string of the raw transaction.
    ///
    /// # Returns
    /// The parsed `Transaction`, or a `TransactionError` if the hex or
    /// structure is malformed.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::SerializationError(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from its raw wire serialization.
    ///
    /// Trailing bytes after the transaction are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = WireReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::SerializationError(format!(
                "{} trailing bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Deserialize a `Transaction` from a `WireReader`.
    ///
    /// # Arguments
    /// * `reader` - The reader positioned at the start of an encoded
    ///   transaction.
    pub fn read_from(reader: &mut WireReader) -> Result<Self, TransactionError> {
        let version = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading version: {}", e))
        })?;

        let input_count = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading input count: {}", e))
        })?;
        let mut inputs = Vec::with_capacity(input_count.value() as usize);
        for _ in 0..input_count.value() {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading output count: {}", e))
        })?;
        let mut outputs = Vec::with_capacity(output_count.value() as usize);
        for _ in 0..output_count.value() {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        let lock_time = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading lock time: {}", e))
        })?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    /// Serialize this transaction to its raw wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(self.size());
        writer.write_u32_le(self.version);

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(&mut writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(&mut writer);
        }

        writer.write_u32_le(self.lock_time);
        writer.into_bytes()
    }

    /// Serialize this transaction to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Compute the transaction ID.
    ///
    /// The ID is the double-SHA256 of the serialized transaction, in
    /// internal (little-endian) byte order.
    pub fn tx_id(&self) -> [u8; 32] {
        sha256d(&self.to_bytes())
    }

    /// Compute the transaction ID as a display-order hex string.
    ///
    /// Display order reverses the internal bytes, matching block explorers
    /// and node RPC output.
    pub fn tx_id_hex(&self) -> String {
        double_hash_h(&self.to_bytes()).to_string()
    }

    /// Append an input to this transaction.
    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    /// Append an output to this transaction.
    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Build and append an input spending a known previous output.
    ///
    /// Records the previous output's locking script and satoshi value on
    /// the input so that the signature hash can be computed later without
    /// the full source transaction.
    ///
    /// # Arguments
    /// * `prev_tx_id` - Display-order hex transaction ID of the source.
    /// * `vout` - Index of the output being spent.
    /// * `prev_locking_script_hex` - Hex of the source output's locking script.
    /// * `satoshis` - Value of the source output.
    pub fn add_input_from(
        &mut self,
        prev_tx_id: &str,
        vout: u32,
        prev_locking_script_hex: &str,
        satoshis: u64,
    ) -> Result<(), TransactionError> {
        if prev_tx_id.len() != MAX_HASH_STRING_SIZE {
            return Err(TransactionError::InvalidTransaction(format!(
                "txid must be {} hex characters, got {}",
                MAX_HASH_STRING_SIZE,
                prev_tx_id.len()
            )));
        }
        let source_txid = *Hash::from_hex(prev_tx_id)?.as_bytes();

        let mut source_output = TransactionOutput::new();
        source_output.satoshis = satoshis;
        source_output.locking_script = Script::from_hex(prev_locking_script_hex)?;

        let mut input = TransactionInput::new();
        input.source_txid = source_txid;
        input.source_tx_out_index = vout;
        input.set_source_output(Some(source_output));

        self.inputs.push(input);
        Ok(())
    }

    /// Number of inputs.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of outputs.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Sum of all output satoshi values.
    pub fn total_output_satoshis(&self) -> u64 {
        self.outputs.iter().map(|o| o.satoshis).sum()
    }

    /// Sum of all input satoshi values, where known.
    ///
    /// Inputs without a recorded source output contribute zero.
    pub fn total_input_satoshis(&self) -> u64 {
        self.inputs
            .iter()
            .filter_map(|i| i.source_tx_satoshis())
            .sum()
    }

    /// Serialized size of the transaction in bytes.
    pub fn size(&self) -> usize {
        let mut size = 4 + 4; // version + lock_time
        size += VarInt::from(self.inputs.len()).length();
        for input in &self.inputs {
            size += 32 + 4 + 4;
            let script_len = input
                .unlocking_script
                .as_ref()
                .map(|s| s.len())
                .unwrap_or(0);
            size += VarInt::from(script_len).length() + script_len;
        }
        size += VarInt::from(self.outputs.len()).length();
        for output in &self.outputs {
            let script_len = output.locking_script.len();
            size += 8 + VarInt::from(script_len).length() + script_len;
        }
        size
    }

    /// Compute the legacy signature hash for one of this transaction's
    /// inputs.
    ///
    /// The input must carry a source output (see
    /// [`TransactionInput::set_source_output`] or [`Transaction::add_input_from`]);
    /// its locking script is used as the script code committed to by the
    /// signature.
    ///
    /// # Arguments
    /// * `input_index` - Index of the input being signed.
    /// * `sighash_type` - The sighash flags (e.g. `sighash::SIGHASH_ALL`).
    ///
    /// # Returns
    /// The 32-byte hash to sign.
    pub fn calc_input_signature_hash(
        &self,
        input_index: usize,
        sighash_type: u32,
    ) -> Result<[u8; 32], TransactionError> {
        let input = self.inputs.get(input_index).ok_or_else(|| {
            TransactionError::InvalidTransaction(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                self.inputs.len()
            ))
        })?;

        let script_code = input.source_tx_script().ok_or_else(|| {
            TransactionError::SigningError(format!(
                "input {} has no source output; cannot compute signature hash",
                input_index
            ))
        })?;

        sighash::signature_hash(self, input_index, script_code.to_bytes(), sighash_type)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
