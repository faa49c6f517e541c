//! Script opcode constants and name lookup.
//!
//! Dogecoin inherits the Bitcoin opcode set. Only the opcodes that can
//! appear in inscription, P2PKH, and P2SH scripts are given names here;
//! everything else renders as OP_UNKNOWN.

/// Push an empty array onto the stack.
pub const OP_0: u8 = 0x00;
/// Alias for OP_0.
pub const OP_FALSE: u8 = 0x00;

/// Push the next 1 byte of data. Opcodes 0x01..=0x4b push that many bytes.
pub const OP_DATA_1: u8 = 0x01;
/// Push the next 20 bytes of data (hash160 length).
pub const OP_DATA_20: u8 = 0x14;
/// Push the next 32 bytes of data (sha256 length).
pub const OP_DATA_32: u8 = 0x20;
/// Push the next 33 bytes of data (compressed pubkey length).
pub const OP_DATA_33: u8 = 0x21;
/// Push the next 75 bytes of data (largest direct push).
pub const OP_DATA_75: u8 = 0x4b;

/// The next byte contains the number of bytes to push.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// The next 2 bytes (LE) contain the number of bytes to push.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// The next 4 bytes (LE) contain the number of bytes to push.
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Push the number -1 onto the stack.
pub const OP_1NEGATE: u8 = 0x4f;

/// Push the number 1 onto the stack.
pub const OP_1: u8 = 0x51;
/// Alias for OP_1.
pub const OP_TRUE: u8 = 0x51;
/// Push the number 2 onto the stack.
pub const OP_2: u8 = 0x52;
/// Push the number 3 onto the stack.
pub const OP_3: u8 = 0x53;
/// Push the number 16 onto the stack.
pub const OP_16: u8 = 0x60;

/// No operation.
pub const OP_NOP: u8 = 0x61;
/// Conditional: execute if top of stack is true.
pub const OP_IF: u8 = 0x63;
/// Conditional: execute if top of stack is false.
pub const OP_NOTIF: u8 = 0x64;
/// Reserved conditional (transaction invalid if executed).
pub const OP_VERIF: u8 = 0x65;
/// Reserved conditional (transaction invalid if executed).
pub const OP_VERNOTIF: u8 = 0x66;
/// Close a conditional block.
pub const OP_ENDIF: u8 = 0x68;
/// Fail unless top of stack is true.
pub const OP_VERIFY: u8 = 0x69;
/// Mark the output as unspendable; remainder is data.
pub const OP_RETURN: u8 = 0x6a;

/// Remove the top stack item.
pub const OP_DROP: u8 = 0x75;
/// Duplicate the top stack item.
pub const OP_DUP: u8 = 0x76;

/// Push 1 if the top two items are equal, 0 otherwise.
pub const OP_EQUAL: u8 = 0x87;
/// OP_EQUAL followed by OP_VERIFY.
pub const OP_EQUALVERIFY: u8 = 0x88;

/// Hash the top item with RIPEMD-160(SHA-256(x)).
pub const OP_HASH160: u8 = 0xa9;
/// Hash the top item with SHA-256(SHA-256(x)).
pub const OP_HASH256: u8 = 0xaa;

/// Verify an ECDSA signature against a public key.
pub const OP_CHECKSIG: u8 = 0xac;
/// OP_CHECKSIG followed by OP_VERIFY.
pub const OP_CHECKSIGVERIFY: u8 = 0xad;
/// Verify m-of-n signatures.
pub const OP_CHECKMULTISIG: u8 = 0xae;

/// Return the canonical name for an opcode byte.
///
/// Data push opcodes render as OP_DATA_n; unrecognized bytes as OP_UNKNOWN.
///
/// # Arguments
/// * `op` - The opcode byte.
///
/// # Returns
/// The opcode name as a static string.
pub fn opcode_to_string(op: u8) -> &'static str {
    match op {
        OP_0 => "OP_FALSE",
        0x01..=0x4b => "OP_DATA",
        OP_PUSHDATA1 => "OP_PUSHDATA1",
        OP_PUSHDATA2 => "OP_PUSHDATA2",
        OP_PUSHDATA4 => "OP_PUSHDATA4",
        OP_1NEGATE => "OP_1NEGATE",
        OP_1 => "OP_1",
        OP_2 => "OP_2",
        OP_3 => "OP_3",
        0x54 => "OP_4",
        0x55 => "OP_5",
        0x56 => "OP_6",
        0x57 => "OP_7",
        0x58 => "OP_8",
        0x59 => "OP_9",
        0x5a => "OP_10",
        0x5b => "OP_11",
        0x5c => "OP_12",
        0x5d => "OP_13",
        0x5e => "OP_14",
        0x5f => "OP_15",
        OP_16 => "OP_16",
        OP_NOP => "OP_NOP",
        OP_IF => "OP_IF",
        OP_NOTIF => "OP_NOTIF",
        OP_VERIF => "OP_VERIF",
        OP_VERNOTIF => "OP_VERNOTIF",
        0x67 => "OP_ELSE",
        OP_ENDIF => "OP_ENDIF",
        OP_VERIFY => "OP_VERIFY",
        OP_RETURN => "OP_RETURN",
        OP_DROP => "OP_DROP",
        OP_DUP => "OP_DUP",
        0x7c => "OP_SWAP",
        OP_EQUAL => "OP_EQUAL",
        OP_EQUALVERIFY => "OP_EQUALVERIFY",
        0x93 => "OP_ADD",
        0xa8 => "OP_SHA256",
        OP_HASH160 => "OP_HASH160",
        OP_HASH256 => "OP_HASH256",
        OP_CHECKSIG => "OP_CHECKSIG",
        OP_CHECKSIGVERIFY => "OP_CHECKSIGVERIFY",
        OP_CHECKMULTISIG => "OP_CHECKMULTISIG",
        _ => "OP_UNKNOWN",
    }
}

/// Look up an opcode byte by its canonical name.
///
/// Used for parsing ASM strings. Returns `None` for unknown names,
/// which the caller treats as hex push data.
///
/// # Arguments
/// * `name` - The opcode name (e.g. "OP_DUP").
///
/// # Returns
/// The opcode byte, or `None` if the name is not recognized.
pub fn string_to_opcode(name: &str) -> Option<u8> {
    let op = match name {
        "OP_FALSE" | "OP_0" => OP_0,
        "OP_PUSHDATA1" => OP_PUSHDATA1,
        "OP_PUSHDATA2" => OP_PUSHDATA2,
        "OP_PUSHDATA4" => OP_PUSHDATA4,
        "OP_1NEGATE" => OP_1NEGATE,
        "OP_TRUE" | "OP_1" => OP_1,
        "OP_2" => OP_2,
        "OP_3" => OP_3,
        "OP_4" => 0x54,
        "OP_5" => 0x55,
        "OP_6" => 0x56,
        "OP_7" => 0x57,
        "OP_8" => 0x58,
        "OP_9" => 0x59,
        "OP_10" => 0x5a,
        "OP_11" => 0x5b,
        "OP_12" => 0x5c,
        "OP_13" => 0x5d,
        "OP_14" => 0x5e,
        "OP_15" => 0x5f,
        "OP_16" => OP_16,
        "OP_NOP" => OP_NOP,
        "OP_IF" => OP_IF,
        "OP_NOTIF" => OP_NOTIF,
        "OP_ELSE" => 0x67,
        "OP_ENDIF" => OP_ENDIF,
        "OP_VERIFY" => OP_VERIFY,
        "OP_RETURN" => OP_RETURN,
        "OP_DROP" => OP_DROP,
        "OP_DUP" => OP_DUP,
        "OP_SWAP" => 0x7c,
        "OP_EQUAL" => OP_EQUAL,
        "OP_EQUALVERIFY" => OP_EQUALVERIFY,
        "OP_ADD" => 0x93,
        "OP_SHA256" => 0xa8,
        "OP_HASH160" => OP_HASH160,
        "OP_HASH256" => OP_HASH256,
        "OP_CHECKSIG" => OP_CHECKSIG,
        "OP_CHECKSIGVERIFY" => OP_CHECKSIGVERIFY,
        "OP_CHECKMULTISIG" => OP_CHECKMULTISIG,
        _ => return None,
    };
    Some(op)
}

/// Check if an opcode pushes a small integer (OP_1NEGATE, OP_0, OP_1..OP_16).
///
/// # Arguments
/// * `op` - The opcode byte.
///
/// # Returns
/// `true` if the opcode is a small-integer push.
pub fn is_small_int_op(op: u8) -> bool {
    op == OP_0 || op == OP_1NEGATE || (OP_1..=OP_16).contains(&op)
}
