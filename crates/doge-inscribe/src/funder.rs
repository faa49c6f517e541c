//! Greedy transaction funding from the coin ledger.

use doge_script::Address;
use doge_transaction::template::p2pkh;
use doge_transaction::{Transaction, TransactionInput, TransactionOutput};

use crate::ledger::{Coin, CoinLedger};
use crate::InscribeError;

/// Fund a transaction from the ledger.
///
/// Coins are selected greedily in ledger order until the selected total
/// covers the existing outputs plus `fee`. Each selected coin becomes an
/// input (appended after any inputs already on the transaction) with its
/// source output attached for signing. If a remainder is left after the
/// fee, a change output paying `change_address` is appended.
///
/// # Arguments
/// * `tx` - The transaction to fund; outputs must already be in place.
/// * `ledger` - The spendable coin set.
/// * `change_address` - Where any remainder is returned.
/// * `fee` - Flat fee in koinu the transaction must leave unspent.
///
/// # Returns
/// The coins selected as funding inputs, or `InsufficientFunds` when the
/// ledger cannot cover the target. On error the transaction is left
/// unmodified.
pub fn fund(
    tx: &mut Transaction,
    ledger: &CoinLedger,
    change_address: &Address,
    fee: u64,
) -> Result<Vec<Coin>, InscribeError> {
    let required = tx.total_output_satoshis() + fee;

    let mut selected = Vec::new();
    let mut total_in = 0u64;
    for coin in ledger.coins() {
        if total_in >= required {
            break;
        }
        selected.push(coin.clone());
        total_in += coin.satoshis;
    }

    if total_in < required {
        return Err(InscribeError::InsufficientFunds {
            required,
            available: ledger.balance(),
        });
    }

    for coin in &selected {
        let mut source = TransactionOutput::new();
        source.satoshis = coin.satoshis;
        source.locking_script = coin.locking_script.clone();

        let mut input = TransactionInput::new();
        input.source_txid = coin.outpoint.txid;
        input.source_tx_out_index = coin.outpoint.vout;
        input.set_source_output(Some(source));
        tx.add_input(input);
    }

    let remainder = total_in - required;
    if remainder > 0 {
        let mut change = TransactionOutput::new();
        change.satoshis = remainder;
        change.locking_script = p2pkh::lock(change_address);
        change.change = true;
        tx.add_output(change);
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doge_script::{Network, Script};

    use crate::ledger::Outpoint;

    fn coin(tag: u8, satoshis: u64) -> Coin {
        Coin {
            outpoint: Outpoint::new([tag; 32], 0),
            satoshis,
            locking_script: Script::from_bytes(&[0x51]),
        }
    }

    fn change_address() -> Address {
        Address::from_public_key_hash(&[0x42; 20], Network::Mainnet)
    }

    fn tx_paying(satoshis: u64) -> Transaction {
        let mut tx = Transaction::new();
        let mut output = TransactionOutput::new();
        output.satoshis = satoshis;
        tx.add_output(output);
        tx
    }

    #[test]
    fn test_selects_in_ledger_order_with_change() {
        let ledger = CoinLedger::from_snapshot(vec![coin(1, 1000), coin(2, 500), coin(3, 2000)]);
        let mut tx = tx_paying(1200);

        // Fee of 0 keeps the arithmetic visible: need 1200, take 1000
        // then 500, leave 300 in change.
        let selected = fund(&mut tx, &ledger, &change_address(), 0).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].satoshis, 1000);
        assert_eq!(selected[1].satoshis, 500);

        assert_eq!(tx.input_count(), 2);
        assert_eq!(tx.output_count(), 2);
        let change = &tx.outputs[1];
        assert!(change.change);
        assert_eq!(change.satoshis, 300);
        assert!(change.locking_script.is_p2pkh());
    }

    #[test]
    fn test_exact_cover_adds_no_change() {
        let ledger = CoinLedger::from_snapshot(vec![coin(1, 1500)]);
        let mut tx = tx_paying(1000);

        fund(&mut tx, &ledger, &change_address(), 500).unwrap();

        assert_eq!(tx.input_count(), 1);
        assert_eq!(tx.output_count(), 1);
    }

    #[test]
    fn test_insufficient_funds() {
        let ledger = CoinLedger::from_snapshot(vec![coin(1, 1000), coin(2, 500), coin(3, 2000)]);
        let mut tx = tx_paying(5000);

        match fund(&mut tx, &ledger, &change_address(), 0) {
            Err(InscribeError::InsufficientFunds {
                required,
                available,
            }) => {
                assert_eq!(required, 5000);
                assert_eq!(available, 3500);
            }
            other => panic!("expected InsufficientFunds, got {:?}", other),
        }

        // The transaction is untouched on failure.
        assert_eq!(tx.input_count(), 0);
        assert_eq!(tx.output_count(), 1);
    }

    #[test]
    fn test_fee_is_included_in_target() {
        let ledger = CoinLedger::from_snapshot(vec![coin(1, 1000)]);
        let mut tx = tx_paying(500);

        // 500 output + 600 fee exceeds the 1000 coin.
        assert!(fund(&mut tx, &ledger, &change_address(), 600).is_err());
    }

    #[test]
    fn test_inputs_carry_source_outputs() {
        let ledger = CoinLedger::from_snapshot(vec![coin(7, 10_000)]);
        let mut tx = tx_paying(1000);

        fund(&mut tx, &ledger, &change_address(), 1000).unwrap();

        let input = &tx.inputs[0];
        assert_eq!(input.source_txid, [7; 32]);
        assert_eq!(input.source_tx_satoshis(), Some(10_000));
    }
}
