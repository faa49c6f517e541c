//! Commit/reveal chain assembly.
//!
//! Builds the full transaction chain for an inscription: one commit
//! transaction per partial script, then a final reveal paying the
//! receiver. Each transaction after the first spends the previous
//! commit's P2SH output at input 0, revealing that partial in its
//! unlocking script. Funding, signing, and ledger bookkeeping happen
//! per transaction, so later links can spend the change of earlier ones.

use doge_primitives::ec::PrivateKey;
use doge_script::{Address, Script};
use doge_transaction::template::p2pkh;
use doge_transaction::{Transaction, TransactionInput, TransactionOutput};

use crate::constants::COMMIT_OUTPUT_VALUE;
use crate::envelope::encode_envelope;
use crate::funder::fund;
use crate::ledger::{Coin, CoinLedger, Outpoint};
use crate::lock::{commit_locking_script, lock_script};
use crate::packer::{Packer, PartialScript};
use crate::signer::{sign_chain_input, sign_funding_inputs};
use crate::InscribeError;

/// Everything the next transaction needs to spend the previous commit.
#[derive(Clone, Debug)]
pub struct PriorLink {
    /// The commit output being spent.
    pub coin: Coin,
    /// The lock script the commit's P2SH hash commits to.
    pub lock_script: Script,
    /// The partial revealed when spending the commit.
    pub partial: PartialScript,
}

/// A fully signed inscription chain, ready for broadcast.
#[derive(Clone, Debug)]
pub struct InscriptionChain {
    /// The transactions in dependency order: commits first, reveal last.
    pub transactions: Vec<Transaction>,
    /// Transaction ID of the final reveal, display-order hex.
    pub txid: String,
}

/// Assembly phases for the chain state machine.
enum ChainState {
    /// Consuming partials, one commit transaction each.
    Building,
    /// All partials committed; the reveal remains.
    Finalizing,
    /// Chain complete.
    Done,
}

/// Build and sign the complete inscription chain.
///
/// Pure apart from signing: no network access. The ledger is mutated
/// after each assembled transaction, before the next funding pass, so
/// change outputs become spendable by later links. The change address is
/// derived from the signing key on the receiver's network.
///
/// # Arguments
/// * `content_type` - MIME type of the payload.
/// * `payload` - The content to inscribe.
/// * `receiver` - Address receiving the final reveal output.
/// * `key` - The key controlling the ledger's coins and the commits.
/// * `ledger` - Spendable coins; consumed and extended during assembly.
/// * `fee` - Flat fee in koinu per transaction.
///
/// # Returns
/// The signed chain with the final reveal's txid.
pub fn inscribe(
    content_type: &str,
    payload: &[u8],
    receiver: &Address,
    key: &PrivateKey,
    ledger: &mut CoinLedger,
    fee: u64,
) -> Result<InscriptionChain, InscribeError> {
    let ops = encode_envelope(content_type, payload)?;
    let change_address =
        Address::from_public_key_hash(&key.pub_key().hash160(), receiver.network);

    let mut transactions = Vec::new();
    let mut prior: Option<PriorLink> = None;
    let mut packer = Packer::new(&ops);
    let mut state = ChainState::Building;

    loop {
        match state {
            ChainState::Building => match packer.next() {
                Some(partial) => {
                    let (tx, link) = assemble_commit(
                        partial,
                        prior.take(),
                        key,
                        ledger,
                        &change_address,
                        fee,
                    )?;
                    transactions.push(tx);
                    prior = Some(link);
                }
                None => state = ChainState::Finalizing,
            },
            ChainState::Finalizing => {
                let link = prior.take().ok_or_else(|| {
                    InscribeError::SigningError("no commit to reveal".to_string())
                })?;
                let tx = assemble_reveal(link, receiver, key, ledger, &change_address, fee)?;
                transactions.push(tx);
                state = ChainState::Done;
            }
            ChainState::Done => break,
        }
    }

    let txid = transactions
        .last()
        .map(|tx| tx.tx_id_hex())
        .ok_or_else(|| InscribeError::InvalidInput("empty chain".to_string()))?;

    Ok(InscriptionChain { transactions, txid })
}

/// Assemble one commit transaction for a partial.
///
/// Output 0 is the P2SH commit for this partial. If a prior link exists,
/// input 0 spends it, revealing the previous partial.
fn assemble_commit(
    partial: PartialScript,
    prior: Option<PriorLink>,
    key: &PrivateKey,
    ledger: &mut CoinLedger,
    change_address: &Address,
    fee: u64,
) -> Result<(Transaction, PriorLink), InscribeError> {
    let lock = lock_script(&key.pub_key(), &partial)?;
    let commit_script = commit_locking_script(&lock);

    let mut tx = Transaction::new();
    if let Some(link) = &prior {
        tx.add_input(chain_link_input(&link.coin));
    }

    let mut commit_output = TransactionOutput::new();
    commit_output.satoshis = COMMIT_OUTPUT_VALUE;
    commit_output.locking_script = commit_script.clone();
    tx.add_output(commit_output);

    fund(&mut tx, ledger, change_address, fee)?;

    if let Some(link) = &prior {
        sign_chain_input(&mut tx, key, link)?;
    }
    sign_funding_inputs(&mut tx, key, ledger)?;

    ledger.apply(&tx, change_address);

    let next_link = PriorLink {
        coin: Coin {
            outpoint: Outpoint::new(tx.tx_id(), 0),
            satoshis: COMMIT_OUTPUT_VALUE,
            locking_script: commit_script,
        },
        lock_script: lock,
        partial,
    };

    Ok((tx, next_link))
}

/// Assemble the final reveal transaction.
///
/// Input 0 spends the last commit, revealing the last partial; output 0
/// pays the receiver.
fn assemble_reveal(
    link: PriorLink,
    receiver: &Address,
    key: &PrivateKey,
    ledger: &mut CoinLedger,
    change_address: &Address,
    fee: u64,
) -> Result<Transaction, InscribeError> {
    let mut tx = Transaction::new();
    tx.add_input(chain_link_input(&link.coin));

    let mut reveal_output = TransactionOutput::new();
    reveal_output.satoshis = COMMIT_OUTPUT_VALUE;
    reveal_output.locking_script = p2pkh::lock(receiver);
    tx.add_output(reveal_output);

    fund(&mut tx, ledger, change_address, fee)?;

    sign_chain_input(&mut tx, key, &link)?;
    sign_funding_inputs(&mut tx, key, ledger)?;

    ledger.apply(&tx, change_address);

    Ok(tx)
}

/// Build the input spending a commit output, with its source attached
/// for sighash computation.
fn chain_link_input(coin: &Coin) -> TransactionInput {
    let mut source = TransactionOutput::new();
    source.satoshis = coin.satoshis;
    source.locking_script = coin.locking_script.clone();

    let mut input = TransactionInput::new();
    input.source_txid = coin.outpoint.txid;
    input.source_tx_out_index = coin.outpoint.vout;
    input.set_source_output(Some(source));
    input
}
