pub mod suggest;
pub mod trie;

mod cursor;
mod node;

pub use suggest::{Spellcheck, SuggestConfig};
pub use trie::Trie;
