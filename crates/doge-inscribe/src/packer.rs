//! Greedy packing of envelope ops into size-bounded partial scripts.
//!
//! Each partial script, when serialized, must fit within
//! [`MAX_PAYLOAD_LEN`] bytes. Ops are consumed strictly in order: a
//! partial admits ops until the next one would push the serialized size
//! over the limit, then the next partial picks up exactly where the
//! previous one stopped. The first op of every partial is admitted
//! unconditionally, so packing always makes progress.

use doge_script::Script;

use crate::constants::MAX_PAYLOAD_LEN;
use crate::envelope::EnvelopeOp;
use crate::InscribeError;

/// An ordered slice of envelope ops that fits in one commit transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialScript {
    ops: Vec<EnvelopeOp>,
}

impl PartialScript {
    /// The ops carried by this partial, in envelope order.
    pub fn ops(&self) -> &[EnvelopeOp] {
        &self.ops
    }

    /// Number of ops in this partial.
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Serialize the partial as a script of push operations.
    pub fn to_script(&self) -> Result<Script, InscribeError> {
        let mut script = Script::new();
        for op in &self.ops {
            script.append_push_data(&op.push_bytes())?;
        }
        Ok(script)
    }
}

/// Serialized size of a minimal push of `data_len` bytes.
fn encoded_push_len(data_len: usize) -> usize {
    if data_len <= 75 {
        1 + data_len
    } else if data_len <= 0xFF {
        2 + data_len
    } else if data_len <= 0xFFFF {
        3 + data_len
    } else {
        5 + data_len
    }
}

/// Pure greedy packing step.
///
/// Starting at `cursor`, admits `ops[cursor]` unconditionally and then
/// keeps admitting ops while the serialized partial stays within
/// [`MAX_PAYLOAD_LEN`] bytes.
///
/// # Arguments
/// * `ops` - The full envelope op sequence.
/// * `cursor` - Index of the first op to admit.
///
/// # Returns
/// The packed partial and the cursor position for the next step.
pub fn pack_partial(ops: &[EnvelopeOp], cursor: usize) -> (PartialScript, usize) {
    let mut admitted = Vec::new();
    let mut serialized_len = 0usize;
    let mut next = cursor;

    while next < ops.len() {
        let op_len = encoded_push_len(ops[next].push_bytes().len());
        if !admitted.is_empty() && serialized_len + op_len > MAX_PAYLOAD_LEN {
            break;
        }
        admitted.push(ops[next].clone());
        serialized_len += op_len;
        next += 1;
    }

    (PartialScript { ops: admitted }, next)
}

/// Iterator producing the finite sequence of partial scripts for an
/// envelope.
pub struct Packer<'a> {
    ops: &'a [EnvelopeOp],
    cursor: usize,
}

impl<'a> Packer<'a> {
    /// Create a packer over the full envelope op sequence.
    pub fn new(ops: &'a [EnvelopeOp]) -> Self {
        Packer { ops, cursor: 0 }
    }
}

impl Iterator for Packer<'_> {
    type Item = PartialScript;

    fn next(&mut self) -> Option<PartialScript> {
        if self.cursor >= self.ops.len() {
            return None;
        }
        let (partial, next) = pack_partial(self.ops, self.cursor);
        self.cursor = next;
        Some(partial)
    }
}
