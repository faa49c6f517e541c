//! Protocol constants for the inscription envelope and chain assembly.

/// Marker identifying an inscription envelope, pushed as the first op.
pub const ENVELOPE_MARKER: &[u8] = b"ord";

/// Maximum number of content bytes per envelope chunk.
pub const MAX_CHUNK_LEN: usize = 240;

/// Maximum serialized size of a partial script in bytes.
pub const MAX_PAYLOAD_LEN: usize = 1500;

/// Value in koinu carried by each commit output and the final reveal
/// output.
pub const COMMIT_OUTPUT_VALUE: u64 = 100_000;

/// Flat fee in koinu paid by every transaction in the chain.
pub const FEE_PER_TX: u64 = 10_000_000;
