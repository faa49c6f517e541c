//! In-order chain broadcast.

use doge_relay::RelayClient;

use crate::assembler::InscriptionChain;
use crate::InscribeError;

/// Broadcast every transaction in the chain, strictly in order.
///
/// Submission stops at the first rejection; the error carries the index
/// of the failing transaction so the caller knows which ancestors were
/// already accepted. Transactions past the failing index are never
/// submitted.
///
/// # Returns
/// The accepted txids, in chain order.
pub async fn broadcast_chain(
    client: &RelayClient,
    chain: &InscriptionChain,
) -> Result<Vec<String>, InscribeError> {
    let mut txids = Vec::with_capacity(chain.transactions.len());

    for (index, tx) in chain.transactions.iter().enumerate() {
        match client.broadcast(tx).await {
            Ok(txid) => txids.push(txid),
            Err(e) => {
                return Err(InscribeError::Broadcast {
                    index,
                    reason: e.to_string(),
                })
            }
        }
    }

    Ok(txids)
}
