/// Error types for inscription operations.
#[derive(Debug, thiserror::Error)]
pub enum InscribeError {
    /// A caller-supplied argument is empty or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The ledger cannot cover the transaction outputs plus fee.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        /// Total koinu the transaction needs (outputs + fee).
        required: u64,
        /// Total koinu available in the ledger.
        available: u64,
    },
    /// Signing failed (missing coin, missing prior link, or ECDSA failure).
    #[error("signing error: {0}")]
    SigningError(String),
    /// A relay call failed (UTXO fetch or broadcast transport).
    #[error("relay error: {0}")]
    Relay(#[from] doge_relay::RelayError),
    /// A transaction in the chain was rejected during broadcast.
    #[error("broadcast failed at transaction {index}: {reason}")]
    Broadcast {
        /// Zero-based index of the rejected transaction within the chain.
        index: usize,
        /// The rejection reason reported by the network.
        reason: String,
    },
    /// An underlying script error (forwarded from `doge-script`).
    #[error("script error: {0}")]
    Script(#[from] doge_script::ScriptError),
    /// An underlying transaction error (forwarded from `doge-transaction`).
    #[error("transaction error: {0}")]
    Transaction(#[from] doge_transaction::TransactionError),
    /// An underlying primitives error (forwarded from `doge-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] doge_primitives::PrimitivesError),
}
