//! High-level inscription wallet facade.

use doge_primitives::ec::{PrivateKey, MAINNET_WIF_PREFIX, TESTNET_WIF_PREFIX};
use doge_relay::{RelayClient, RelayConfig};
use doge_script::{Address, Network};

use crate::assembler;
use crate::broadcast::broadcast_chain;
use crate::constants::FEE_PER_TX;
use crate::ledger::{Coin, CoinLedger};
use crate::InscribeError;

/// A single-key inscription wallet.
///
/// Holds the signing key, its P2PKH address, the local coin ledger, and
/// a relay client. [`sync`](Inscriber::sync) refreshes the ledger from
/// the wallet API; [`inscribe`](Inscriber::inscribe) builds, signs, and
/// broadcasts a full commit/reveal chain.
///
/// The whole chain is constructed before the first broadcast. If the
/// network rejects a transaction mid-chain, its already-accepted
/// ancestors stay in the mempool; the returned
/// [`Broadcast`](InscribeError::Broadcast) error carries the failing
/// index so the caller can account for them. No automatic repair is
/// attempted.
pub struct Inscriber {
    key: PrivateKey,
    address: Address,
    network: Network,
    ledger: CoinLedger,
    relay: RelayClient,
}

impl Inscriber {
    /// Create an inscriber with a freshly generated key.
    pub fn new(network: Network) -> Self {
        Self::with_key(PrivateKey::new(), network)
    }

    /// Create an inscriber from a WIF-encoded private key.
    pub fn from_wif(wif: &str, network: Network) -> Result<Self, InscribeError> {
        let key = PrivateKey::from_wif(wif)?;
        Ok(Self::with_key(key, network))
    }

    fn with_key(key: PrivateKey, network: Network) -> Self {
        let address = Address::from_public_key_hash(&key.pub_key().hash160(), network);
        Inscriber {
            key,
            address,
            network,
            ledger: CoinLedger::new(),
            relay: RelayClient::new(RelayConfig::default()),
        }
    }

    /// Replace the relay client, e.g. to point at a different API host.
    pub fn with_relay(mut self, relay: RelayClient) -> Self {
        self.relay = relay;
        self
    }

    /// The wallet's P2PKH address string.
    pub fn address(&self) -> &str {
        &self.address.address_string
    }

    /// The private key in WIF, with the network prefix matching this
    /// wallet.
    pub fn wif(&self) -> String {
        let prefix = match self.network {
            Network::Mainnet => MAINNET_WIF_PREFIX,
            Network::Testnet => TESTNET_WIF_PREFIX,
        };
        self.key.to_wif_prefix(prefix)
    }

    /// Total spendable balance in koinu, per the last sync.
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    /// Refresh the coin ledger from the wallet API.
    ///
    /// The fetched set fully replaces the current ledger.
    pub async fn sync(&mut self) -> Result<(), InscribeError> {
        let records = self.relay.address_utxos(self.address()).await?;
        let coins = records
            .iter()
            .map(Coin::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        self.ledger = CoinLedger::from_snapshot(coins);
        Ok(())
    }

    /// Inscribe content and broadcast the resulting chain.
    ///
    /// # Arguments
    /// * `content_type` - MIME type of the payload (e.g. `text/plain`).
    /// * `data` - The content bytes.
    /// * `receiver_address` - Address string receiving the inscription.
    ///
    /// # Returns
    /// The final reveal transaction's ID in display-order hex.
    pub async fn inscribe(
        &mut self,
        content_type: &str,
        data: &[u8],
        receiver_address: &str,
    ) -> Result<String, InscribeError> {
        if receiver_address.is_empty() {
            return Err(InscribeError::InvalidInput(
                "receiver address must not be empty".to_string(),
            ));
        }
        let receiver = Address::from_string(receiver_address)?;

        let chain = assembler::inscribe(
            content_type,
            data,
            &receiver,
            &self.key,
            &mut self.ledger,
            FEE_PER_TX,
        )?;

        broadcast_chain(&self.relay, &chain).await?;

        Ok(chain.txid)
    }
}
