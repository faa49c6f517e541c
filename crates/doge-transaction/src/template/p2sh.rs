//! Pay-to-Script-Hash (P2SH) script template.
//!
//! Creates BIP-16 locking scripts (`OP_HASH160 <20-byte script hash>
//! OP_EQUAL`) that commit to a redeem script by its HASH160. The spender
//! reveals the redeem script in the unlocking script, where it must hash
//! to the committed value and then evaluate successfully.

use doge_primitives::hash::hash160;
use doge_script::opcodes::*;
use doge_script::Script;

/// Create a P2SH locking script committing to a redeem script.
///
/// Produces: `OP_HASH160 <hash160(redeem_script)> OP_EQUAL`
///
/// # Arguments
/// * `redeem_script` - The script whose hash the output commits to.
///
/// # Returns
/// The 23-byte P2SH locking script.
pub fn lock(redeem_script: &Script) -> Script {
    let script_hash = hash160(redeem_script.to_bytes());

    let mut bytes = Vec::with_capacity(23);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(&script_hash);
    bytes.push(OP_EQUAL);

    Script::from_bytes(&bytes)
}
