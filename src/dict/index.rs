use crate::error::Result;

/// A word index: anything that can take words in and answer membership.
pub trait Index {
    /// Adds one word. `Ok(false)` means the word was already present.
    fn add(&mut self, word: &str) -> Result<bool>;
    fn contains(&self, word: &str) -> bool;

    /// Adds every word in `items`, silently skipping duplicates.
    /// Returns how many were actually new.
    fn add_all<'a, I>(&mut self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added = 0;
        for word in items {
            if self.add(word)? {
                added += 1;
            }
        }
        Ok(added)
    }
}
