//! # dict-tools
//!
//! An in-memory dictionary backed by a 26-way prefix tree, plus the
//! line-oriented command interpreter that drives it.

pub mod alphabet;
pub mod command;
pub mod dict;
pub mod error;
pub mod repl;

pub use dict::dictionary::{Dictionary, FileFormat, LoadReport};
pub use dict::trie::{Spellcheck, SuggestConfig, Trie};
pub use error::{DictError, Result};
