//! Relay data types: configuration and API response structures.

use serde::{Deserialize, Serialize};

/// Configuration for a [`RelayClient`](crate::RelayClient).
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL for the wallet API (e.g. `https://wallet-api.dogeord.io`).
    pub base_url: String,
    /// Optional request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wallet-api.dogeord.io".to_string(),
            timeout_secs: None,
        }
    }
}

/// An unspent output as reported by the wallet API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoRecord {
    /// Transaction ID in display-order hex.
    pub tx_id: String,
    /// Index of the output within that transaction.
    pub output_index: u32,
    /// Hex-encoded locking script (scriptPubKey).
    pub script_pk: String,
    /// Value of the output in koinu.
    pub satoshis: u64,
}

/// Envelope wrapper around the UTXO listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UtxoListResponse {
    #[serde(default)]
    pub result: Option<Vec<UtxoRecord>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response from the broadcast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BroadcastResponse {
    /// `"1"` on acceptance, anything else on rejection.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    /// The accepted transaction ID.
    #[serde(default)]
    pub result: Option<String>,
    /// Rejection reason, if any.
    #[serde(default)]
    pub message: Option<String>,
}
