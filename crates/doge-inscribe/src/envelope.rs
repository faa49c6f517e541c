//! Inscription envelope encoding.
//!
//! An envelope is an ordered list of push operations carrying the
//! content: the `"ord"` marker, the chunk count, the content type, and
//! then each chunk preceded by its reverse index (so a decoder knows how
//! many chunks remain). Chunks are at most [`MAX_CHUNK_LEN`] bytes and
//! appear in payload order.

use doge_script::scriptnum::encode_number;

use crate::constants::{ENVELOPE_MARKER, MAX_CHUNK_LEN};
use crate::InscribeError;

/// A single push operation within an envelope or partial script.
///
/// Numbers are pushed in minimal script-number encoding, so `Int(0)`
/// becomes an empty push.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvelopeOp {
    /// A literal byte string push.
    Literal(Vec<u8>),
    /// A number push, encoded as a minimal script number.
    Int(i64),
}

impl EnvelopeOp {
    /// The bytes this op pushes onto the stack.
    pub fn push_bytes(&self) -> Vec<u8> {
        match self {
            EnvelopeOp::Literal(bytes) => bytes.clone(),
            EnvelopeOp::Int(value) => encode_number(*value),
        }
    }
}

/// Encode content into the ordered envelope op sequence.
///
/// Layout: `push("ord")`, `push(chunk_count)`, `push(content_type)`,
/// then for each chunk in payload order `push(chunks_remaining_after)`
/// followed by `push(chunk_bytes)`. The final chunk is tagged with 0.
///
/// # Arguments
/// * `content_type` - MIME type of the payload (e.g. `text/plain`).
/// * `payload` - The content bytes to inscribe.
///
/// # Returns
/// The envelope ops, or `InvalidInput` when either argument is empty.
pub fn encode_envelope(
    content_type: &str,
    payload: &[u8],
) -> Result<Vec<EnvelopeOp>, InscribeError> {
    if content_type.is_empty() {
        return Err(InscribeError::InvalidInput(
            "content type must not be empty".to_string(),
        ));
    }
    if payload.is_empty() {
        return Err(InscribeError::InvalidInput(
            "payload must not be empty".to_string(),
        ));
    }

    let chunks: Vec<&[u8]> = payload.chunks(MAX_CHUNK_LEN).collect();

    let mut ops = Vec::with_capacity(3 + chunks.len() * 2);
    ops.push(EnvelopeOp::Literal(ENVELOPE_MARKER.to_vec()));
    ops.push(EnvelopeOp::Int(chunks.len() as i64));
    ops.push(EnvelopeOp::Literal(content_type.as_bytes().to_vec()));

    for (i, chunk) in chunks.iter().enumerate() {
        ops.push(EnvelopeOp::Int((chunks.len() - i - 1) as i64));
        ops.push(EnvelopeOp::Literal(chunk.to_vec()));
    }

    Ok(ops)
}
