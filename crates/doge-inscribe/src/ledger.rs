//! Local view of spendable coins.
//!
//! The ledger is the wallet's working set of unspent outputs. It is
//! insertion-ordered (funding selects coins in the order they arrived)
//! and keyed by outpoint, so re-applying the same transaction is
//! idempotent.

use doge_primitives::chainhash::{Hash, MAX_HASH_STRING_SIZE};
use doge_script::{Address, Script};
use doge_transaction::template::p2pkh;
use doge_transaction::Transaction;

use crate::InscribeError;

/// A reference to a specific transaction output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outpoint {
    /// Transaction ID in internal (little-endian) byte order.
    pub txid: [u8; 32],
    /// Output index within that transaction.
    pub vout: u32,
}

impl Outpoint {
    /// Create an outpoint from an internal-order txid and output index.
    pub fn new(txid: [u8; 32], vout: u32) -> Self {
        Outpoint { txid, vout }
    }

    /// Parse an outpoint from a display-order hex txid.
    pub fn from_display_hex(txid_hex: &str, vout: u32) -> Result<Self, InscribeError> {
        if txid_hex.len() != MAX_HASH_STRING_SIZE {
            return Err(InscribeError::InvalidInput(format!(
                "txid must be {} hex characters, got {}",
                MAX_HASH_STRING_SIZE,
                txid_hex.len()
            )));
        }
        let hash = Hash::from_hex(txid_hex)?;
        Ok(Outpoint {
            txid: *hash.as_bytes(),
            vout,
        })
    }
}

/// An unspent output the wallet can spend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coin {
    /// The outpoint identifying this coin.
    pub outpoint: Outpoint,
    /// Value in koinu.
    pub satoshis: u64,
    /// The locking script guarding the coin.
    pub locking_script: Script,
}

impl Coin {
    /// Build a coin from a wallet API UTXO record.
    pub fn from_record(record: &doge_relay::UtxoRecord) -> Result<Self, InscribeError> {
        Ok(Coin {
            outpoint: Outpoint::from_display_hex(&record.tx_id, record.output_index)?,
            satoshis: record.satoshis,
            locking_script: Script::from_hex(&record.script_pk)?,
        })
    }
}

/// Insertion-ordered, outpoint-keyed set of spendable coins.
#[derive(Clone, Debug, Default)]
pub struct CoinLedger {
    coins: Vec<Coin>,
}

impl CoinLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        CoinLedger { coins: Vec::new() }
    }

    /// Replace the ledger contents with a fresh snapshot.
    ///
    /// Snapshot semantics are full replacement: any previously tracked
    /// coin not present in the snapshot is forgotten.
    pub fn from_snapshot(coins: Vec<Coin>) -> Self {
        let mut ledger = CoinLedger::new();
        for coin in coins {
            ledger.upsert(coin);
        }
        ledger
    }

    /// Enumerate coins in insertion order.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Total value of all coins in koinu.
    pub fn balance(&self) -> u64 {
        self.coins.iter().map(|c| c.satoshis).sum()
    }

    /// Look up a coin by outpoint.
    pub fn find(&self, outpoint: &Outpoint) -> Option<&Coin> {
        self.coins.iter().find(|c| c.outpoint == *outpoint)
    }

    /// Insert a coin, or replace the existing entry with the same
    /// outpoint in place. Idempotent.
    pub fn upsert(&mut self, coin: Coin) {
        match self.coins.iter_mut().find(|c| c.outpoint == coin.outpoint) {
            Some(existing) => *existing = coin,
            None => self.coins.push(coin),
        }
    }

    /// Remove the coin with the given outpoint, if present.
    pub fn remove(&mut self, outpoint: &Outpoint) {
        self.coins.retain(|c| c.outpoint != *outpoint);
    }

    /// Apply an assembled transaction to the ledger.
    ///
    /// Consumed outpoints are removed; outputs paying `address` (change
    /// and refunds) are upserted so the next funding pass can spend them.
    pub fn apply(&mut self, tx: &Transaction, address: &Address) {
        for input in &tx.inputs {
            self.remove(&Outpoint::new(
                input.source_txid,
                input.source_tx_out_index,
            ));
        }

        let own_script = p2pkh::lock(address);
        let txid = tx.tx_id();
        for (vout, output) in tx.outputs.iter().enumerate() {
            if output.locking_script == own_script {
                self.upsert(Coin {
                    outpoint: Outpoint::new(txid, vout as u32),
                    satoshis: output.satoshis,
                    locking_script: output.locking_script.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doge_script::Network;
    use doge_transaction::{TransactionInput, TransactionOutput};

    fn coin(tag: u8, satoshis: u64) -> Coin {
        Coin {
            outpoint: Outpoint::new([tag; 32], 0),
            satoshis,
            locking_script: Script::from_bytes(&[0x51]),
        }
    }

    fn own_address() -> Address {
        Address::from_public_key_hash(&[0x42; 20], Network::Mainnet)
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let ledger = CoinLedger::from_snapshot(vec![coin(1, 10), coin(2, 20), coin(3, 30)]);
        let values: Vec<u64> = ledger.coins().iter().map(|c| c.satoshis).collect();
        assert_eq!(values, vec![10, 20, 30]);
        assert_eq!(ledger.balance(), 60);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut ledger = CoinLedger::new();
        ledger.upsert(coin(1, 10));
        ledger.upsert(coin(1, 10));
        assert_eq!(ledger.coins().len(), 1);

        // Same outpoint, updated value: replaced in place.
        ledger.upsert(coin(1, 99));
        assert_eq!(ledger.coins().len(), 1);
        assert_eq!(ledger.coins()[0].satoshis, 99);
    }

    #[test]
    fn test_remove() {
        let mut ledger = CoinLedger::from_snapshot(vec![coin(1, 10), coin(2, 20)]);
        ledger.remove(&Outpoint::new([1; 32], 0));
        assert_eq!(ledger.coins().len(), 1);
        assert_eq!(ledger.coins()[0].satoshis, 20);

        // Removing an unknown outpoint is a no-op.
        ledger.remove(&Outpoint::new([9; 32], 0));
        assert_eq!(ledger.coins().len(), 1);
    }

    #[test]
    fn test_apply_consumes_inputs_and_adds_change() {
        let address = own_address();
        let mut ledger = CoinLedger::from_snapshot(vec![coin(1, 1_000_000)]);

        let mut tx = Transaction::new();
        let mut input = TransactionInput::new();
        input.source_txid = [1; 32];
        input.source_tx_out_index = 0;
        tx.add_input(input);

        // Output 0 pays elsewhere, output 1 is change back to us.
        let mut other = TransactionOutput::new();
        other.satoshis = 500_000;
        other.locking_script = Script::from_bytes(&[0x51]);
        tx.add_output(other);

        let mut change = TransactionOutput::new();
        change.satoshis = 400_000;
        change.locking_script = p2pkh::lock(&address);
        tx.add_output(change);

        ledger.apply(&tx, &address);

        assert_eq!(ledger.coins().len(), 1);
        let remaining = &ledger.coins()[0];
        assert_eq!(remaining.satoshis, 400_000);
        assert_eq!(remaining.outpoint, Outpoint::new(tx.tx_id(), 1));
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let address = own_address();
        let mut ledger = CoinLedger::from_snapshot(vec![coin(1, 1_000_000)]);

        let mut tx = Transaction::new();
        let mut input = TransactionInput::new();
        input.source_txid = [1; 32];
        tx.add_input(input);

        let mut change = TransactionOutput::new();
        change.satoshis = 900_000;
        change.locking_script = p2pkh::lock(&address);
        tx.add_output(change);

        ledger.apply(&tx, &address);
        let after_first: Vec<Coin> = ledger.coins().to_vec();

        ledger.apply(&tx, &address);
        assert_eq!(ledger.coins(), &after_first[..]);
    }

    #[test]
    fn test_outpoint_from_display_hex_reverses() {
        let display = "aa".repeat(31) + "bb";
        let outpoint = Outpoint::from_display_hex(&display, 3).unwrap();
        assert_eq!(outpoint.txid[0], 0xbb);
        assert_eq!(outpoint.txid[31], 0xaa);
        assert_eq!(outpoint.vout, 3);

        assert!(Outpoint::from_display_hex("aabb", 0).is_err());
        assert!(Outpoint::from_display_hex("zz", 0).is_err());
    }

    #[test]
    fn test_coin_from_record() {
        let record = doge_relay::UtxoRecord {
            tx_id: "cc".repeat(32),
            output_index: 1,
            script_pk: "76a914751e76e8199196d454941c45d1b3a323f1433bd688ac".to_string(),
            satoshis: 12_345,
        };
        let coin = Coin::from_record(&record).unwrap();
        assert_eq!(coin.outpoint.vout, 1);
        assert_eq!(coin.satoshis, 12_345);
        assert!(coin.locking_script.is_p2pkh());
    }
}
