//! # doge-inscribe
//!
//! Inscribes arbitrary content onto the Dogecoin blockchain using the
//! "ord" envelope convention: the content is split into chunks, packed
//! into size-bounded partial scripts, and committed through a chain of
//! P2SH transactions where each reveal spends the previous commit.
//!
//! The high-level entry point is [`Inscriber`], which holds a key, an
//! address, a coin ledger, and a relay client:
//!
//! ```no_run
//! use doge_inscribe::Inscriber;
//! use doge_script::Network;
//!
//! # async fn demo() -> Result<(), doge_inscribe::InscribeError> {
//! let mut inscriber = Inscriber::new(Network::Mainnet);
//! inscriber.sync().await?;
//! let txid = inscriber
//!     .inscribe("text/plain", b"much wow", "D7kbUkZZqgVKvzzmqxtBUL1mzE5FDiDzmi")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod broadcast;
pub mod constants;
pub mod envelope;
pub mod funder;
pub mod inscriber;
pub mod ledger;
pub mod lock;
pub mod packer;
pub mod signer;

mod error;

pub use assembler::{inscribe, InscriptionChain};
pub use envelope::{encode_envelope, EnvelopeOp};
pub use error::InscribeError;
pub use inscriber::Inscriber;
pub use ledger::{Coin, CoinLedger, Outpoint};
pub use packer::{PartialScript, Packer};
