//! Tests for the doge-transaction crate.
//!
//! Covers transaction parsing, serialization roundtrips, txid
//! computation, legacy sighash preimage generation, and the P2PKH and
//! P2SH script templates.

use doge_primitives::ec::PrivateKey;
use doge_primitives::hash::hash160;
use doge_primitives::util::WireReader;
use doge_script::{Address, Network, Script};

use crate::input::{TransactionInput, DEFAULT_SEQUENCE_NUMBER};
use crate::output::TransactionOutput;
use crate::sighash;
use crate::template::{p2pkh, p2sh, UnlockingScriptTemplate};
use crate::transaction::Transaction;

// -----------------------------------------------------------------------
// Test fixtures
// -----------------------------------------------------------------------

/// 20-byte public key hash used in fixture scripts (hash160 of the
/// secp256k1 generator point).
const FIXTURE_PKH: &str = "751e76e8199196d454941c45d1b3a323f1433bd6";

/// A hand-assembled raw transaction: version 1, one input spending
/// output 0 of an all-zero txid with an empty scriptSig, one 100_000
/// satoshi P2PKH output, lock time 0.
const SIMPLE_RAW_TX: &str = concat!(
    "01000000",                                                         // version
    "01",                                                               // input count
    "0000000000000000000000000000000000000000000000000000000000000000", // source txid
    "00000000",                                                         // vout
    "00",                                                               // script length
    "ffffffff",                                                         // sequence
    "01",                                                               // output count
    "a086010000000000",                                                 // 100000 satoshis
    "19",                                                               // script length (25)
    "76a914751e76e8199196d454941c45d1b3a323f1433bd688ac",               // P2PKH script
    "00000000"                                                          // lock time
);

fn fixture_pkh_bytes() -> [u8; 20] {
    let bytes = hex::decode(FIXTURE_PKH).unwrap();
    let mut pkh = [0u8; 20];
    pkh.copy_from_slice(&bytes);
    pkh
}

fn fixture_p2pkh_script() -> Script {
    let address = Address::from_public_key_hash(&fixture_pkh_bytes(), Network::Mainnet);
    p2pkh::lock(&address)
}

/// Build a 2-input, 2-output transaction with source outputs attached to
/// both inputs, for sighash tests.
fn two_in_two_out() -> Transaction {
    let mut tx = Transaction::new();

    for i in 0..2u8 {
        let mut source = TransactionOutput::new();
        source.satoshis = 50_000 + i as u64;
        source.locking_script = fixture_p2pkh_script();

        let mut input = TransactionInput::new();
        input.source_txid = [i + 1; 32];
        input.source_tx_out_index = i as u32;
        input.set_source_output(Some(source));
        tx.add_input(input);
    }

    for i in 0..2u8 {
        let mut output = TransactionOutput::new();
        output.satoshis = 40_000 + i as u64;
        output.locking_script = fixture_p2pkh_script();
        tx.add_output(output);
    }

    tx
}

// -----------------------------------------------------------------------
// Parsing and serialization
// -----------------------------------------------------------------------

#[test]
fn test_from_hex_roundtrip() {
    let tx = Transaction::from_hex(SIMPLE_RAW_TX).expect("should parse raw tx");

    assert_eq!(tx.version, 1);
    assert_eq!(tx.input_count(), 1);
    assert_eq!(tx.output_count(), 1);
    assert_eq!(tx.lock_time, 0);
    assert_eq!(tx.inputs[0].source_txid, [0u8; 32]);
    assert_eq!(tx.inputs[0].sequence_number, DEFAULT_SEQUENCE_NUMBER);
    assert!(tx.inputs[0].unlocking_script.is_none());
    assert_eq!(tx.outputs[0].satoshis, 100_000);
    assert!(tx.outputs[0].locking_script.is_p2pkh());

    assert_eq!(tx.to_hex(), SIMPLE_RAW_TX);
}

#[test]
fn test_constructed_tx_roundtrip() {
    let tx = two_in_two_out();
    let bytes = tx.to_bytes();

    let parsed = Transaction::from_bytes(&bytes).expect("should parse serialized tx");
    assert_eq!(parsed.input_count(), 2);
    assert_eq!(parsed.output_count(), 2);
    assert_eq!(parsed.to_bytes(), bytes);
}

#[test]
fn test_from_bytes_rejects_trailing_garbage() {
    let mut bytes = hex::decode(SIMPLE_RAW_TX).unwrap();
    bytes.push(0x00);
    assert!(Transaction::from_bytes(&bytes).is_err());
}

#[test]
fn test_from_bytes_rejects_truncated() {
    let bytes = hex::decode(SIMPLE_RAW_TX).unwrap();
    assert!(Transaction::from_bytes(&bytes[..bytes.len() - 2]).is_err());
}

#[test]
fn test_size_matches_serialization() {
    let tx = two_in_two_out();
    assert_eq!(tx.size(), tx.to_bytes().len());

    let parsed = Transaction::from_hex(SIMPLE_RAW_TX).unwrap();
    assert_eq!(parsed.size(), parsed.to_bytes().len());
}

#[test]
fn test_tx_id_is_display_order() {
    let tx = Transaction::from_hex(SIMPLE_RAW_TX).unwrap();
    let internal = tx.tx_id();
    let display = tx.tx_id_hex();

    assert_eq!(display.len(), 64);
    let mut reversed = internal;
    reversed.reverse();
    assert_eq!(display, hex::encode(reversed));
}

#[test]
fn test_add_input_from_reverses_txid() {
    let mut tx = Transaction::new();
    let display_id = "a0f39f414a691e570fff199d0a350c864d71237b13fb0093d9546adc7f45bca9";
    tx.add_input_from(display_id, 1, "76a914751e76e8199196d454941c45d1b3a323f1433bd688ac", 75_000)
        .expect("should add input");

    let input = &tx.inputs[0];
    assert_eq!(input.source_tx_out_index, 1);
    assert_eq!(input.source_tx_satoshis(), Some(75_000));

    // Internal order is the display hex reversed.
    let mut expected = hex::decode(display_id).unwrap();
    expected.reverse();
    assert_eq!(&input.source_txid[..], &expected[..]);
}

#[test]
fn test_add_input_from_rejects_short_txid() {
    let mut tx = Transaction::new();
    assert!(tx.add_input_from("aabbcc", 0, "51", 1).is_err());
}

#[test]
fn test_total_satoshis() {
    let tx = two_in_two_out();
    assert_eq!(tx.total_input_satoshis(), 100_001);
    assert_eq!(tx.total_output_satoshis(), 80_001);
}

// -----------------------------------------------------------------------
// Legacy sighash
// -----------------------------------------------------------------------

#[test]
fn test_sighash_all_preimage_structure() {
    let tx = two_in_two_out();
    let script_code = fixture_p2pkh_script();

    let preimage =
        sighash::calc_preimage(&tx, 0, script_code.to_bytes(), sighash::SIGHASH_ALL).unwrap();

    // Version at the front, sighash type at the back.
    assert_eq!(&preimage[..4], &[0x01, 0x00, 0x00, 0x00]);
    assert_eq!(&preimage[preimage.len() - 4..], &[0x01, 0x00, 0x00, 0x00]);

    // Both inputs present; the signed input carries the script code, the
    // other is blanked.
    let mut reader = WireReader::new(&preimage);
    reader.read_u32_le().unwrap();
    assert_eq!(reader.read_varint().unwrap().value(), 2);

    // Input 0: signed.
    reader.read_bytes(32).unwrap();
    reader.read_u32_le().unwrap();
    let len0 = reader.read_varint().unwrap().value() as usize;
    assert_eq!(len0, script_code.len());
    assert_eq!(reader.read_bytes(len0).unwrap(), script_code.to_bytes());
    assert_eq!(reader.read_u32_le().unwrap(), DEFAULT_SEQUENCE_NUMBER);

    // Input 1: blanked, sequence preserved under ALL.
    reader.read_bytes(32).unwrap();
    reader.read_u32_le().unwrap();
    assert_eq!(reader.read_varint().unwrap().value(), 0);
    assert_eq!(reader.read_u32_le().unwrap(), DEFAULT_SEQUENCE_NUMBER);

    // All outputs present.
    assert_eq!(reader.read_varint().unwrap().value(), 2);
}

#[test]
fn test_sighash_anyonecanpay_single_input() {
    let tx = two_in_two_out();
    let script_code = fixture_p2pkh_script();

    let preimage = sighash::calc_preimage(
        &tx,
        1,
        script_code.to_bytes(),
        sighash::SIGHASH_ALL | sighash::SIGHASH_ANYONECANPAY,
    )
    .unwrap();

    let mut reader = WireReader::new(&preimage);
    reader.read_u32_le().unwrap();
    // Only the signed input is serialized.
    assert_eq!(reader.read_varint().unwrap().value(), 1);
    assert_eq!(reader.read_bytes(32).unwrap(), &[2u8; 32]);
}

#[test]
fn test_sighash_none_drops_outputs_and_zeroes_sequences() {
    let tx = two_in_two_out();
    let script_code = fixture_p2pkh_script();

    let preimage =
        sighash::calc_preimage(&tx, 0, script_code.to_bytes(), sighash::SIGHASH_NONE).unwrap();

    let mut reader = WireReader::new(&preimage);
    reader.read_u32_le().unwrap();
    assert_eq!(reader.read_varint().unwrap().value(), 2);

    // Signed input keeps its sequence.
    reader.read_bytes(32).unwrap();
    reader.read_u32_le().unwrap();
    let len0 = reader.read_varint().unwrap().value() as usize;
    reader.read_bytes(len0).unwrap();
    assert_eq!(reader.read_u32_le().unwrap(), DEFAULT_SEQUENCE_NUMBER);

    // Other input's sequence is zeroed.
    reader.read_bytes(32).unwrap();
    reader.read_u32_le().unwrap();
    assert_eq!(reader.read_varint().unwrap().value(), 0);
    assert_eq!(reader.read_u32_le().unwrap(), 0);

    // No outputs.
    assert_eq!(reader.read_varint().unwrap().value(), 0);
}

#[test]
fn test_sighash_single_nulls_earlier_outputs() {
    let tx = two_in_two_out();
    let script_code = fixture_p2pkh_script();

    let preimage =
        sighash::calc_preimage(&tx, 1, script_code.to_bytes(), sighash::SIGHASH_SINGLE).unwrap();

    let mut reader = WireReader::new(&preimage);
    reader.read_u32_le().unwrap();
    let input_count = reader.read_varint().unwrap().value();
    for i in 0..input_count {
        reader.read_bytes(32).unwrap();
        reader.read_u32_le().unwrap();
        let len = reader.read_varint().unwrap().value() as usize;
        reader.read_bytes(len).unwrap();
        let sequence = reader.read_u32_le().unwrap();
        if i == 1 {
            assert_eq!(sequence, DEFAULT_SEQUENCE_NUMBER);
        } else {
            assert_eq!(sequence, 0);
        }
    }

    // Outputs truncated at the signed index; the earlier one is null.
    assert_eq!(reader.read_varint().unwrap().value(), 2);
    assert_eq!(reader.read_u64_le().unwrap(), u64::MAX);
    assert_eq!(reader.read_varint().unwrap().value(), 0);
    assert_eq!(reader.read_u64_le().unwrap(), 40_001);
}

#[test]
fn test_sighash_single_out_of_range_returns_one_hash() {
    let mut tx = two_in_two_out();
    tx.outputs.truncate(1);
    let script_code = fixture_p2pkh_script();

    let hash =
        sighash::signature_hash(&tx, 1, script_code.to_bytes(), sighash::SIGHASH_SINGLE).unwrap();

    let mut expected = [0u8; 32];
    expected[0] = 0x01;
    assert_eq!(hash, expected);
}

#[test]
fn test_sighash_type_changes_hash() {
    let tx = two_in_two_out();
    let script_code = fixture_p2pkh_script();

    let all =
        sighash::signature_hash(&tx, 0, script_code.to_bytes(), sighash::SIGHASH_ALL).unwrap();
    let none =
        sighash::signature_hash(&tx, 0, script_code.to_bytes(), sighash::SIGHASH_NONE).unwrap();
    assert_ne!(all, none);
}

#[test]
fn test_sighash_input_index_out_of_range() {
    let tx = two_in_two_out();
    let script_code = fixture_p2pkh_script();
    assert!(
        sighash::signature_hash(&tx, 5, script_code.to_bytes(), sighash::SIGHASH_ALL).is_err()
    );
}

#[test]
fn test_calc_input_signature_hash_requires_source_output() {
    let mut tx = Transaction::new();
    tx.add_input(TransactionInput::new());
    let mut output = TransactionOutput::new();
    output.satoshis = 1_000;
    tx.add_output(output);

    assert!(tx.calc_input_signature_hash(0, sighash::SIGHASH_ALL).is_err());
}

// -----------------------------------------------------------------------
// Script templates
// -----------------------------------------------------------------------

#[test]
fn test_p2pkh_lock_script_shape() {
    let address = Address::from_public_key_hash(&fixture_pkh_bytes(), Network::Mainnet);
    let script = p2pkh::lock(&address);

    assert_eq!(script.len(), 25);
    assert!(script.is_p2pkh());
    assert_eq!(script.public_key_hash().unwrap(), fixture_pkh_bytes());
}

#[test]
fn test_p2pkh_sign_produces_valid_unlocking_script() {
    let private_key = PrivateKey::new();
    let pub_key = private_key.pub_key();
    let address = Address::from_public_key_hash(&pub_key.hash160(), Network::Mainnet);

    let mut tx = Transaction::new();
    let mut source = TransactionOutput::new();
    source.satoshis = 100_000;
    source.locking_script = p2pkh::lock(&address);

    let mut input = TransactionInput::new();
    input.source_txid = [7u8; 32];
    input.set_source_output(Some(source));
    tx.add_input(input);

    let mut output = TransactionOutput::new();
    output.satoshis = 90_000;
    output.locking_script = p2pkh::lock(&address);
    tx.add_output(output);

    let unlocker = p2pkh::unlock(private_key.clone(), None);
    let unlocking = unlocker.sign(&tx, 0).expect("signing should succeed");

    // Two pushes: signature with trailing sighash byte, compressed pubkey.
    let chunks = unlocking.chunks().expect("should decode unlocking script");
    assert_eq!(chunks.len(), 2);

    let sig_push = chunks[0].data.as_ref().unwrap();
    assert_eq!(*sig_push.last().unwrap(), sighash::SIGHASH_ALL as u8);

    let pubkey_push = chunks[1].data.as_ref().unwrap();
    assert_eq!(pubkey_push.as_slice(), &pub_key.to_compressed()[..]);

    // The DER portion verifies against the recomputed sighash.
    let sig_hash = tx.calc_input_signature_hash(0, sighash::SIGHASH_ALL).unwrap();
    let signature =
        doge_primitives::ec::Signature::from_der(&sig_push[..sig_push.len() - 1]).unwrap();
    assert!(pub_key.verify(&sig_hash, &signature));
}

#[test]
fn test_p2pkh_sign_rejects_missing_source_output() {
    let private_key = PrivateKey::new();
    let mut tx = Transaction::new();
    tx.add_input(TransactionInput::new());

    let unlocker = p2pkh::unlock(private_key, None);
    assert!(unlocker.sign(&tx, 0).is_err());
}

#[test]
fn test_p2pkh_estimate_length() {
    let unlocker = p2pkh::unlock(PrivateKey::new(), None);
    assert_eq!(unlocker.estimate_length(&Transaction::new(), 0), 106);
}

#[test]
fn test_p2sh_lock_script_shape() {
    let mut redeem = Script::new();
    redeem.append_opcodes(&[doge_script::opcodes::OP_TRUE]).unwrap();

    let script = p2sh::lock(&redeem);
    assert_eq!(script.len(), 23);
    assert!(script.is_p2sh());
    assert_eq!(&script.to_bytes()[2..22], &hash160(redeem.to_bytes())[..]);
}
