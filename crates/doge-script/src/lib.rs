/// Dogecoin inscription SDK - Script building, opcodes, and address handling.
///
/// Provides the Script type, opcode definitions, script chunk parsing,
/// minimal script-number encoding, and Dogecoin address generation.

pub mod script;
pub mod opcodes;
pub mod chunk;
pub mod scriptnum;
pub mod address;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use address::{Address, Network};
pub use chunk::ScriptChunk;
