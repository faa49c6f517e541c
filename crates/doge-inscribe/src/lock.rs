//! Commit lock script construction and the matching unlock script.
//!
//! Each commit output is a P2SH wrap of a lock script that (a) demands a
//! signature from the inscribing key and (b) reserves stack room for the
//! partial's pushes:
//!
//! ```text
//! lock:   <pubkey> OP_CHECKSIGVERIFY OP_DROP{n} OP_TRUE
//! unlock: <partial pushes> <sig> <serialized lock script>
//! ```
//!
//! When the reveal spends the commit, the partial's pushes land on the
//! stack first, the signature is checked and consumed, one OP_DROP per
//! partial op clears the pushes, and OP_TRUE leaves the script
//! satisfied. The inscription content rides in the unlock script.

use doge_primitives::ec::PublicKey;
use doge_script::opcodes::{OP_CHECKSIGVERIFY, OP_DROP, OP_TRUE};
use doge_script::Script;
use doge_transaction::template::p2sh;

use crate::packer::PartialScript;
use crate::InscribeError;

/// Build the lock script for a partial.
///
/// One OP_DROP is emitted per op in the partial, so evaluation leaves a
/// clean stack regardless of the partial's size.
pub fn lock_script(
    pub_key: &PublicKey,
    partial: &PartialScript,
) -> Result<Script, InscribeError> {
    let mut script = Script::new();
    script.append_push_data(&pub_key.to_compressed())?;
    script.append_opcodes(&[OP_CHECKSIGVERIFY])?;
    for _ in partial.ops() {
        script.append_opcodes(&[OP_DROP])?;
    }
    script.append_opcodes(&[OP_TRUE])?;
    Ok(script)
}

/// The P2SH locking script committing to a lock script:
/// `OP_HASH160 <hash160(lock)> OP_EQUAL`.
pub fn commit_locking_script(lock: &Script) -> Script {
    p2sh::lock(lock)
}

/// Build the unlock script revealing a partial.
///
/// Layout: the partial's pushes, then the DER signature (with sighash
/// byte), then the serialized lock script for the P2SH hash check.
///
/// # Arguments
/// * `partial` - The partial being revealed.
/// * `sig_bytes` - DER-encoded signature with the sighash type appended.
/// * `lock` - The lock script the commit output's hash commits to.
pub fn unlock_script(
    partial: &PartialScript,
    sig_bytes: &[u8],
    lock: &Script,
) -> Result<Script, InscribeError> {
    let mut script = partial.to_script()?;
    script.append_push_data(sig_bytes)?;
    script.append_push_data(lock.to_bytes())?;
    Ok(script)
}
