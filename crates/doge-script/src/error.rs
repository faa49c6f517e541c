/// Error types for script operations.
///
/// Covers parsing errors, encoding/decoding failures, address validation,
/// and script classification problems.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Generic invalid script error.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// Invalid opcode data encountered during ASM parsing.
    #[error("invalid opcode data")]
    InvalidOpcodeData,

    /// Attempted to use append_opcodes for a push data opcode.
    #[error("use append_push_data for push data funcs: {0}")]
    InvalidOpcodeType(String),

    /// Invalid address string.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid address length after Base58 decoding.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// Address version byte is not a known Dogecoin P2PKH prefix.
    #[error("address not supported {0}")]
    UnsupportedAddress(String),

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Script is empty when a non-empty script was expected.
    #[error("script is empty")]
    EmptyScript,

    /// Script is not a P2PKH script.
    #[error("not a P2PKH")]
    NotP2PKH,

    /// Not enough data in script to complete a push operation.
    #[error("not enough data")]
    DataTooSmall,

    /// Push data exceeds maximum allowed size.
    #[error("data too big")]
    DataTooBig,

    /// A push data part exceeds protocol limits.
    #[error("part too big '{0}'")]
    PartTooBig(usize),

    /// Script index is out of range.
    #[error("script index out of range")]
    IndexOutOfRange,

    /// Base58Check checksum does not match.
    #[error("checksum failed")]
    EncodingChecksumFailed,

    /// A script number is outside the representable range.
    #[error("number out of range")]
    NumberOutOfRange,

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] doge_primitives::PrimitivesError),
}
