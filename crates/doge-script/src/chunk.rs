//! Script chunk parsing and push-data encoding.
//!
//! A chunk is either a bare opcode or a data push with its payload.
//! Inscription envelopes, unlock scripts, and P2SH redeem scripts are
//! all built from sequences of chunks.

use crate::opcodes::*;
use crate::ScriptError;

/// A single parsed element of a script.
///
/// Either a standalone opcode (like OP_DROP) or a data push that carries
/// the opcode byte and the pushed bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes (1-75 bytes), this is the length.
    pub op: u8,
    /// The data payload, if this chunk is a push operation.
    pub data: Option<Vec<u8>>,
}

impl ScriptChunk {
    /// Build an opcode-only chunk.
    pub fn op(op: u8) -> Self {
        ScriptChunk { op, data: None }
    }

    /// Build a data push chunk with the minimal push opcode for its length.
    ///
    /// # Arguments
    /// * `data` - The bytes to push.
    ///
    /// # Returns
    /// A push chunk, or an error if the data exceeds protocol limits.
    pub fn push(data: Vec<u8>) -> Result<Self, ScriptError> {
        let op = match data.len() {
            0 => OP_0,
            1..=75 => data.len() as u8,
            76..=0xff => OP_PUSHDATA1,
            0x100..=0xffff => OP_PUSHDATA2,
            0x10000..=0xffffffff => OP_PUSHDATA4,
            _ => return Err(ScriptError::DataTooBig),
        };
        Ok(ScriptChunk {
            op,
            data: if data.is_empty() { None } else { Some(data) },
        })
    }

    /// Serialized size of this chunk in bytes (prefix plus payload).
    pub fn encoded_len(&self) -> usize {
        match &self.data {
            None => 1,
            Some(d) => match push_data_prefix(d.len()) {
                Ok(prefix) => prefix.len() + d.len(),
                Err(_) => 0,
            },
        }
    }

    /// Append the wire encoding of this chunk to a byte buffer.
    ///
    /// # Arguments
    /// * `out` - The buffer to append to.
    ///
    /// # Returns
    /// `Ok(())` on success, or an error if the payload is too large.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), ScriptError> {
        match &self.data {
            None => out.push(self.op),
            Some(d) => {
                let prefix = push_data_prefix(d.len())?;
                out.extend_from_slice(&prefix);
                out.extend_from_slice(d);
            }
        }
        Ok(())
    }

    /// Convert this chunk to its ASM string representation.
    ///
    /// Data push chunks render as hex; bare opcodes use their OP_xxx name.
    pub fn to_asm_string(&self) -> String {
        if self.op > OP_0 && self.op <= OP_PUSHDATA4 {
            if let Some(ref data) = self.data {
                return hex::encode(data);
            }
        }
        opcode_to_string(self.op).to_string()
    }
}

/// Decode raw script bytes into a vector of `ScriptChunk` values.
///
/// Handles direct pushes (0x01..0x4b) and OP_PUSHDATA1/2/4. Any other
/// byte is a bare opcode.
///
/// # Arguments
/// * `bytes` - The raw script bytes to decode.
///
/// # Returns
/// A vector of parsed chunks, or a `ScriptError` if the data is truncated.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];

        // (header size after the opcode byte, payload length)
        let push = match op {
            0x01..=0x4b => Some((0usize, op as usize)),
            OP_PUSHDATA1 => {
                if bytes.len() < pos + 2 {
                    return Err(ScriptError::DataTooSmall);
                }
                Some((1, bytes[pos + 1] as usize))
            }
            OP_PUSHDATA2 => {
                if bytes.len() < pos + 3 {
                    return Err(ScriptError::DataTooSmall);
                }
                Some((2, u16::from_le_bytes([bytes[pos + 1], bytes[pos + 2]]) as usize))
            }
            OP_PUSHDATA4 => {
                if bytes.len() < pos + 5 {
                    return Err(ScriptError::DataTooSmall);
                }
                Some((
                    4,
                    u32::from_le_bytes([
                        bytes[pos + 1],
                        bytes[pos + 2],
                        bytes[pos + 3],
                        bytes[pos + 4],
                    ]) as usize,
                ))
            }
            _ => None,
        };

        match push {
            Some((header, length)) => {
                let start = pos + 1 + header;
                if bytes.len() < start + length {
                    return Err(ScriptError::DataTooSmall);
                }
                let data = bytes[start..start + length].to_vec();
                chunks.push(ScriptChunk { op, data: Some(data) });
                pos = start + length;
            }
            None => {
                chunks.push(ScriptChunk { op, data: None });
                pos += 1;
            }
        }
    }

    Ok(chunks)
}

/// Compute the push prefix bytes for a data payload of the given length.
///
/// Chooses the minimal encoding: direct push for 1-75 bytes, OP_PUSHDATA1
/// for up to 255, OP_PUSHDATA2 up to 65535, OP_PUSHDATA4 beyond.
///
/// # Arguments
/// * `data_len` - The length of the data to be pushed.
///
/// # Returns
/// The prefix bytes, or an error if the data is too large for the protocol.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    if data_len <= 75 {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xFF {
        Ok(vec![OP_PUSHDATA1, data_len as u8])
    } else if data_len <= 0xFFFF {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if data_len <= 0xFFFFFFFF {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        Ok(buf)
    } else {
        Err(ScriptError::DataTooBig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode a script with three push chunks and verify their payloads.
    #[test]
    fn test_decode_script_simple() {
        let bytes = hex::decode("05000102030401ff02abcd").expect("valid hex");
        let parts = decode_script(&bytes).expect("should decode");
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].data.as_deref(), Some(&[0x00, 0x01, 0x02, 0x03, 0x04][..]));
        assert_eq!(parts[1].data.as_deref(), Some(&[0xff][..]));
        assert_eq!(parts[2].data.as_deref(), Some(&[0xab, 0xcd][..]));
    }

    /// Empty input decodes to an empty chunk vector.
    #[test]
    fn test_decode_script_empty() {
        let parts = decode_script(&[]).expect("should decode");
        assert!(parts.is_empty());
    }

    /// Truncated pushes of every flavor are rejected.
    #[test]
    fn test_decode_script_truncated() {
        // direct push claims 5 bytes, only 3 follow
        assert!(decode_script(&hex::decode("05000000").unwrap()).is_err());
        // OP_PUSHDATA1 claims 5 bytes, only 4 follow
        assert!(decode_script(&hex::decode("4c05000000").unwrap()).is_err());
        // bare OP_PUSHDATA1/2/4 with no length bytes
        assert!(decode_script(&[OP_PUSHDATA1]).is_err());
        assert!(decode_script(&[OP_PUSHDATA2]).is_err());
        assert!(decode_script(&[OP_PUSHDATA4]).is_err());
    }

    /// OP_PUSHDATA1 with a valid payload decodes correctly.
    #[test]
    fn test_decode_script_pushdata1() {
        let data = vec![0xaa; 80];
        let mut script_bytes = vec![OP_PUSHDATA1, 80];
        script_bytes.extend_from_slice(&data);
        let parts = decode_script(&script_bytes).expect("should decode");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].op, OP_PUSHDATA1);
        assert_eq!(parts[0].data.as_ref().unwrap(), &data);
    }

    /// Chunk construction picks the minimal push opcode.
    #[test]
    fn test_chunk_push_sizes() {
        assert_eq!(ScriptChunk::push(vec![]).unwrap().op, OP_0);
        assert_eq!(ScriptChunk::push(vec![1; 75]).unwrap().op, 75);
        assert_eq!(ScriptChunk::push(vec![1; 76]).unwrap().op, OP_PUSHDATA1);
        assert_eq!(ScriptChunk::push(vec![1; 256]).unwrap().op, OP_PUSHDATA2);
    }

    /// encode_into round-trips through decode_script.
    #[test]
    fn test_chunk_encode_roundtrip() {
        let chunks = vec![
            ScriptChunk::push(b"ord".to_vec()).unwrap(),
            ScriptChunk::op(OP_DROP),
            ScriptChunk::push(vec![0xbb; 240]).unwrap(),
        ];
        let mut out = Vec::new();
        for c in &chunks {
            c.encode_into(&mut out).unwrap();
        }
        let decoded = decode_script(&out).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].data.as_deref(), Some(&b"ord"[..]));
        assert_eq!(decoded[1].op, OP_DROP);
        assert_eq!(decoded[2].data.as_deref(), Some(&[0xbb; 240][..]));
    }

    /// encoded_len matches the actual serialized size.
    #[test]
    fn test_chunk_encoded_len() {
        for chunk in [
            ScriptChunk::op(OP_DUP),
            ScriptChunk::push(vec![1; 20]).unwrap(),
            ScriptChunk::push(vec![1; 100]).unwrap(),
            ScriptChunk::push(vec![1; 300]).unwrap(),
        ] {
            let mut out = Vec::new();
            chunk.encode_into(&mut out).unwrap();
            assert_eq!(chunk.encoded_len(), out.len());
        }
    }

    /// push_data_prefix boundary sizes.
    #[test]
    fn test_push_data_prefix_boundaries() {
        assert_eq!(push_data_prefix(75).unwrap(), vec![75u8]);
        assert_eq!(push_data_prefix(76).unwrap(), vec![OP_PUSHDATA1, 76]);
        assert_eq!(push_data_prefix(255).unwrap(), vec![OP_PUSHDATA1, 255]);
        assert_eq!(push_data_prefix(256).unwrap(), vec![OP_PUSHDATA2, 0x00, 0x01]);
        assert_eq!(push_data_prefix(65535).unwrap(), vec![OP_PUSHDATA2, 0xff, 0xff]);
        assert_eq!(
            push_data_prefix(65536).unwrap(),
            vec![OP_PUSHDATA4, 0x00, 0x00, 0x01, 0x00]
        );
    }

    /// Data-push chunks render as hex in ASM; bare opcodes by name.
    #[test]
    fn test_chunk_to_asm_string() {
        let chunk = ScriptChunk {
            op: OP_DATA_20,
            data: Some(vec![0xab; 20]),
        };
        assert_eq!(chunk.to_asm_string(), "ab".repeat(20));
        assert_eq!(ScriptChunk::op(OP_DUP).to_asm_string(), "OP_DUP");
    }
}
