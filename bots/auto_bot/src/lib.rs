#[cfg(test)]
mod arbitrary;
mod automaton;
pub mod deduction;
mod suggestion;

pub use automaton::*;
pub use suggestion::*;
