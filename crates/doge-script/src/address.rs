/// Dogecoin address handling.
///
/// Supports P2PKH address generation from public key hashes, address
/// validation, and mainnet/testnet discrimination. Uses Base58Check
/// encoding with SHA-256d checksums.

use std::fmt;

use doge_primitives::hash::{hash160, sha256d};

use crate::ScriptError;

/// Dogecoin mainnet P2PKH address version byte (addresses start with 'D').
const MAINNET_P2PKH: u8 = 0x1e;
/// Dogecoin testnet P2PKH address version byte (addresses start with 'n').
const TESTNET_P2PKH: u8 = 0x71;

/// Dogecoin network type for address prefix selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    /// Dogecoin mainnet (P2PKH prefix 0x1e, addresses start with 'D').
    Mainnet,
    /// Dogecoin testnet (P2PKH prefix 0x71, addresses start with 'n').
    Testnet,
}

/// A Dogecoin P2PKH address.
///
/// Contains the 20-byte public key hash and the network it belongs to.
/// Can be serialized to/from the Base58Check string format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The human-readable Base58Check address string.
    pub address_string: String,
    /// The 20-byte RIPEMD-160(SHA-256(pubkey)) hash.
    pub public_key_hash: [u8; 20],
    /// The network this address belongs to.
    pub network: Network,
}

impl Address {
    /// Parse a Base58Check-encoded address string.
    ///
    /// Decodes the string, validates the checksum, and detects the network
    /// from the version byte (0x1e = mainnet, 0x71 = testnet).
    ///
    /// # Arguments
    /// * `addr` - The Base58Check address string.
    ///
    /// # Returns
    /// An `Address` or an error if the string is invalid.
    pub fn from_string(addr: &str) -> Result<Self, ScriptError> {
        let decoded = bs58::decode(addr)
            .into_vec()
            .map_err(|_| ScriptError::InvalidAddress(format!("bad char for '{}'", addr)))?;

        if decoded.len() != 25 {
            return Err(ScriptError::InvalidAddressLength(addr.to_string()));
        }

        // Last 4 bytes must equal sha256d of the first 21 bytes.
        let checksum = sha256d(&decoded[..21]);
        if decoded[21..25] != checksum[..4] {
            return Err(ScriptError::EncodingChecksumFailed);
        }

        let network = match decoded[0] {
            MAINNET_P2PKH => Network::Mainnet,
            TESTNET_P2PKH => Network::Testnet,
            _ => return Err(ScriptError::UnsupportedAddress(addr.to_string())),
        };

        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&decoded[1..21]);

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash: pkh,
            network,
        })
    }

    /// Create an address from a 20-byte public key hash.
    ///
    /// # Arguments
    /// * `hash` - The 20-byte hash160 of the public key.
    /// * `network` - The target network (Mainnet or Testnet).
    ///
    /// # Returns
    /// A new `Address` with the encoded Base58Check string.
    pub fn from_public_key_hash(hash: &[u8; 20], network: Network) -> Self {
        let version = match network {
            Network::Mainnet => MAINNET_P2PKH,
            Network::Testnet => TESTNET_P2PKH,
        };

        let mut payload = Vec::with_capacity(25);
        payload.push(version);
        payload.extend_from_slice(hash);
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..4]);

        let address_string = bs58::encode(&payload).into_string();

        Address {
            address_string,
            public_key_hash: *hash,
            network,
        }
    }

    /// Create an address from a hex-encoded public key string.
    ///
    /// Computes hash160 of the decoded public key bytes.
    ///
    /// # Arguments
    /// * `pub_key_hex` - Hex-encoded public key (compressed or uncompressed).
    /// * `network` - The target network.
    ///
    /// # Returns
    /// An `Address`, or an error if the hex is invalid.
    pub fn from_public_key_string(
        pub_key_hex: &str,
        network: Network,
    ) -> Result<Self, ScriptError> {
        let pub_key_bytes = hex::decode(pub_key_hex)
            .map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        let h = hash160(&pub_key_bytes);
        Ok(Self::from_public_key_hash(&h, network))
    }
}

impl fmt::Display for Address {
    /// Display the address as its Base58Check string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

#[cfg(test)]
mod tests {
    //! Tests for Dogecoin address parsing, generation, and validation.

    use super::*;

    /// hash160 of the secp256k1 generator point's compressed encoding.
    const GENERATOR_PKH: &str = "751e76e8199196d454941c45d1b3a323f1433bd6";

    fn generator_hash() -> [u8; 20] {
        let bytes = hex::decode(GENERATOR_PKH).expect("valid hex");
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&bytes);
        hash
    }

    /// Mainnet addresses start with 'D' and roundtrip through from_string.
    #[test]
    fn test_mainnet_address_roundtrip() {
        let addr = Address::from_public_key_hash(&generator_hash(), Network::Mainnet);
        assert!(addr.address_string.starts_with('D'), "got {}", addr);

        let parsed = Address::from_string(&addr.address_string).expect("should parse back");
        assert_eq!(parsed.public_key_hash, addr.public_key_hash);
        assert_eq!(parsed.network, Network::Mainnet);
    }

    /// Testnet addresses start with 'n' and roundtrip through from_string.
    #[test]
    fn test_testnet_address_roundtrip() {
        let addr = Address::from_public_key_hash(&generator_hash(), Network::Testnet);
        assert!(addr.address_string.starts_with('n'), "got {}", addr);

        let parsed = Address::from_string(&addr.address_string).expect("should parse back");
        assert_eq!(parsed.public_key_hash, addr.public_key_hash);
        assert_eq!(parsed.network, Network::Testnet);
    }

    /// Mainnet and testnet addresses for the same PKH decode to the same hash.
    #[test]
    fn test_same_pkh_different_networks() {
        let mainnet = Address::from_public_key_hash(&generator_hash(), Network::Mainnet);
        let testnet = Address::from_public_key_hash(&generator_hash(), Network::Testnet);
        assert_ne!(mainnet.address_string, testnet.address_string);
        assert_eq!(mainnet.public_key_hash, testnet.public_key_hash);
    }

    /// from_public_key_string hashes the pubkey and builds the address.
    #[test]
    fn test_from_public_key_string() {
        // Compressed generator point.
        let addr = Address::from_public_key_string(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            Network::Mainnet,
        )
        .expect("should create address");
        assert_eq!(hex::encode(addr.public_key_hash), GENERATOR_PKH);
    }

    /// Invalid public key hex returns an error.
    #[test]
    fn test_from_public_key_string_invalid() {
        assert!(Address::from_public_key_string("invalid_pubkey", Network::Mainnet).is_err());
    }

    /// Short and garbage addresses are rejected.
    #[test]
    fn test_from_string_invalid() {
        assert!(Address::from_string("ADD8E55").is_err());
        assert!(Address::from_string("").is_err());
    }

    /// A Bitcoin-versioned address is rejected as unsupported.
    #[test]
    fn test_from_string_wrong_network() {
        // Version byte 0x00 (Bitcoin mainnet) with a valid checksum.
        let mut payload = vec![0x00];
        payload.extend_from_slice(&generator_hash());
        let checksum = sha256d(&payload);
        payload.extend_from_slice(&checksum[..4]);
        let btc_addr = bs58::encode(&payload).into_string();

        assert!(Address::from_string(&btc_addr).is_err());
    }

    /// A tampered checksum is rejected.
    #[test]
    fn test_from_string_bad_checksum() {
        let addr = Address::from_public_key_hash(&generator_hash(), Network::Mainnet);
        let mut decoded = bs58::decode(&addr.address_string).into_vec().unwrap();
        decoded[24] ^= 0x01;
        let tampered = bs58::encode(&decoded).into_string();
        assert!(Address::from_string(&tampered).is_err());
    }
}
