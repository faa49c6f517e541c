//! HTTP client for the dogeord wallet API.

use std::time::Duration;

use doge_transaction::Transaction;

use crate::error::RelayError;
use crate::types::{BroadcastResponse, RelayConfig, UtxoListResponse, UtxoRecord};

/// HTTP client for the wallet API.
///
/// Provides the two calls the inscription flow needs: a full snapshot of
/// an address's unspent outputs, and raw transaction broadcast.
#[derive(Debug, Clone)]
pub struct RelayClient {
    /// Client configuration.
    config: RelayConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl RelayClient {
    /// Create a new relay client with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_default();
        Self { config, client }
    }

    /// Fetch the current unspent output set for an address.
    ///
    /// GET `/address/btc-utxo?address=<addr>`. The returned records are a
    /// full replacement snapshot; callers discard any previously known
    /// set rather than merging.
    ///
    /// # Arguments
    /// * `address` - The Base58Check address to query.
    pub async fn address_utxos(&self, address: &str) -> Result<Vec<UtxoRecord>, RelayError> {
        let url = format!("{}/address/btc-utxo", self.config.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("address", address)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RelayError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: UtxoListResponse = resp
            .json()
            .await
            .map_err(|e| RelayError::BadResponse(format!("utxo listing: {}", e)))?;

        body.result.ok_or_else(|| {
            RelayError::BadResponse(
                body.message
                    .unwrap_or_else(|| "missing result field".to_string()),
            )
        })
    }

    /// Broadcast a transaction to the network.
    ///
    /// POST `/tx/broadcast` with body `{ "rawTx": "<hex>" }`. A status of
    /// `"1"` indicates acceptance; anything else is a rejection and the
    /// server's message is surfaced in the error.
    ///
    /// # Arguments
    /// * `tx` - The fully signed transaction to submit.
    ///
    /// # Returns
    /// The accepted transaction ID as reported by the server.
    pub async fn broadcast(&self, tx: &Transaction) -> Result<String, RelayError> {
        let url = format!("{}/tx/broadcast", self.config.base_url);
        let body = serde_json::json!({ "rawTx": tx.to_hex() });

        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RelayError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: BroadcastResponse = resp
            .json()
            .await
            .map_err(|e| RelayError::BadResponse(format!("broadcast: {}", e)))?;

        if !status_accepted(&body) {
            return Err(RelayError::Rejected(
                body.message
                    .unwrap_or_else(|| "broadcast rejected".to_string()),
            ));
        }

        body.result
            .ok_or_else(|| RelayError::BadResponse("missing txid in result".to_string()))
    }
}

/// The API reports acceptance as status `"1"`; some deployments return
/// the number 1 instead of a string.
fn status_accepted(body: &BroadcastResponse) -> bool {
    match &body.status {
        Some(value) => value.as_str() == Some("1") || value.as_i64() == Some(1),
        None => false,
    }
}
