use crate::error::{DictError, Result};

pub const ALPHABET: &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".as_bytes();

pub fn get_idx(a: char) -> usize {
    (a.to_ascii_uppercase() as u8 - b'A') as usize
}

/// Case-folds a word to uppercase. Anything outside A-Z is an error rather
/// than being dropped: the trie indexes children by `letter - 'A'` and must
/// never see a character that mapping does not cover.
pub fn normalize(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(DictError::EmptyWord);
    }
    s.chars()
        .map(|c| {
            let up = c.to_ascii_uppercase();
            if up.is_ascii_uppercase() {
                Ok(up)
            } else {
                Err(DictError::InvalidCharacter {
                    word: s.to_string(),
                    character: c,
                })
            }
        })
        .collect()
}
