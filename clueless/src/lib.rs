pub use board::*;
pub use cards::*;
pub use cards_set::*;
pub use errors::*;
pub use pad::*;
pub use protocol::*;
pub use session::*;

#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod cards;
mod cards_set;
mod errors;
mod pad;
mod protocol;
mod session;
