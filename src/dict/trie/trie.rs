use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, normalize};
use crate::dict::index::Index;
use crate::dict::trie::node::TrieNode;
use crate::dict::trie::suggest::{Spellcheck, SuggestConfig};
use crate::error::Result;

/// A prefix tree over uppercase words. Words are case-folded on the way in;
/// anything outside A-Z is rejected before the tree is touched.
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::default(),
            word_count: 0,
        }
    }

    /// Adds a word. Returns `Ok(false)` if it was already present; a failed
    /// insert leaves the tree untouched.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = normalize(word)?;
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        if current.is_terminal {
            return Ok(false);
        }
        current.is_terminal = true;
        self.word_count += 1;
        Ok(true)
    }

    /// Number of stored words that have `prefix` as a prefix, the word equal
    /// to `prefix` included. Zero means nothing under that path.
    pub fn count(&self, prefix: &str) -> Result<usize> {
        let prefix = normalize(prefix)?;
        Ok(self
            .get_node(&prefix, Some(&self.root))
            .map(TrieNode::subtree_words)
            .unwrap_or(0))
    }

    /// Exact membership: the full path exists and ends on a word.
    pub fn contains(&self, word: &str) -> bool {
        match normalize(word) {
            Ok(word) => self
                .get_node(&word, Some(&self.root))
                .map(|x| x.is_terminal)
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Removes a word. Returns `Ok(false)` if the word is absent (a stored
    /// prefix that is not itself a word counts as absent); nothing is
    /// mutated on failure. On success, nodes left without a word and without
    /// children are pruned on the way back up.
    pub fn erase(&mut self, word: &str) -> Result<bool> {
        let word = normalize(word)?;
        let present = self
            .get_node(&word, Some(&self.root))
            .map(|x| x.is_terminal)
            .unwrap_or(false);
        if !present {
            return Ok(false);
        }
        Self::erase_below(&mut self.root, &word);
        self.word_count -= 1;
        Ok(true)
    }

    fn erase_below(node: &mut TrieNode, word: &str) {
        match word.chars().next() {
            None => node.is_terminal = false,
            Some(c) => {
                let idx = get_idx(c);
                if let Some(child) = node.children[idx].as_deref_mut() {
                    Self::erase_below(child, &word[1..]);
                    let dead = !child.is_terminal && !child.has_children();
                    if dead {
                        node.children[idx] = None;
                    }
                }
            }
        }
    }

    /// Every stored word, lexicographic.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        self.root.collect_words(&mut words);
        words
    }

    pub fn spellcheck(&self, word: &str) -> Result<Spellcheck> {
        self.spellcheck_with(word, &SuggestConfig::default())
    }

    /// Walks `word` until the first character with no child. A full match
    /// ending on a word is `Correct`; otherwise every word reachable from
    /// the deepest matched node is suggested.
    pub fn spellcheck_with(&self, word: &str, config: &SuggestConfig) -> Result<Spellcheck> {
        let word = normalize(word)?;
        let mut anchor = &self.root;
        let mut matched = 0;
        for c in word.chars() {
            match anchor.get_child(c) {
                Some(child) => {
                    anchor = child;
                    matched += 1;
                }
                None => break,
            }
        }
        if matched == word.len() && anchor.is_terminal {
            return Ok(Spellcheck::Correct);
        }
        if matched < config.min_prefix {
            return Ok(Spellcheck::Suggestions(vec![]));
        }
        let mut suggestions = Vec::new();
        anchor.collect_words(&mut suggestions);
        if let Some(max) = config.max_results {
            suggestions.truncate(max);
        }
        Ok(Spellcheck::Suggestions(suggestions))
    }

    /// Emptiness is defined by tree shape, not by the word counter: the tree
    /// is empty iff the root has no children.
    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }

    /// Drops every node and starts over from a fresh root.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.word_count = 0;
    }

    pub fn len(&self) -> usize {
        self.word_count
    }

    fn get_node<'f>(&self, word: &str, node: Option<&'f TrieNode>) -> Option<&'f TrieNode> {
        if word.is_empty() {
            return node;
        }
        let fst = word.chars().next()?;
        self.get_node(&word[1..], node?.get_child(fst))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> Result<bool> {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(x);
            for child in x {
                stack.push(child);
            }
        }
        l.finish()
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use crate::dict::index::Index;
    use crate::dict::trie::suggest::{Spellcheck, SuggestConfig};
    use crate::dict::trie::trie::Trie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let mut trie = Trie::new();
        trie.add_all((&words).iter().map(|x| *x)).unwrap();
        (&words).iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let bad_words = vec!["HE", "H", "LOL", "BANANA"];
        let mut trie = Trie::new();
        trie.add_all((&words).iter().map(|x| *x)).unwrap();
        (&bad_words)
            .iter()
            .for_each(|word| assert!(!trie.contains(word)));
    }

    #[test]
    fn insert_case_folds() {
        let mut trie = Trie::new();
        assert!(trie.insert("cat").unwrap());
        assert!(trie.contains("CAT"));
        assert!(trie.contains("Cat"));
        assert_eq!(trie.words(), vec!["CAT"]);
    }

    #[test]
    fn duplicate_insert_fails_and_keeps_size() {
        let mut trie = Trie::new();
        assert!(trie.insert("HELLO").unwrap());
        assert!(!trie.insert("HELLO").unwrap());
        assert!(!trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn invalid_words_are_rejected_without_mutation() {
        let mut trie = Trie::new();
        assert!(trie.insert("R2D2").is_err());
        assert!(trie.insert("").is_err());
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(!trie.contains("R2D2"));
    }

    #[test]
    fn count_is_a_subtree_count() {
        let mut trie = Trie::new();
        trie.add_all(vec!["CAT", "CAR", "CARD"]).unwrap();

        let expected = hashmap! {
            "C" => 3,
            "CA" => 3,
            "CAR" => 2,
            "CAT" => 1,
            "CARD" => 1,
        };
        for (prefix, count) in expected {
            assert_eq!(trie.count(prefix).unwrap(), count, "prefix {}", prefix);
        }
    }

    #[test]
    fn count_of_missing_path_is_zero() {
        let mut trie = Trie::new();
        trie.insert("CAT").unwrap();
        assert_eq!(trie.count("DOG").unwrap(), 0);
        assert_eq!(trie.count("CATS").unwrap(), 0);
    }

    #[test]
    fn erase_keeps_shared_prefixes() {
        let mut trie = Trie::new();
        trie.add_all(vec!["CAT", "CAR", "CARD"]).unwrap();

        assert!(trie.erase("CAR").unwrap());
        assert!(!trie.contains("CAR"));
        assert!(trie.contains("CARD"));
        // CAR's node survives as CARD's path, just unmarked.
        assert_eq!(trie.count("CAR").unwrap(), 1);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn erase_prunes_dead_suffixes() {
        let mut trie = Trie::new();
        trie.add_all(vec!["CAT", "CARD"]).unwrap();

        assert!(trie.erase("CARD").unwrap());
        // The R and D nodes are gone with the word.
        assert_eq!(trie.count("CAR").unwrap(), 0);
        assert!(trie.contains("CAT"));

        assert!(trie.erase("CAT").unwrap());
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn erase_of_absent_word_fails() {
        let mut trie = Trie::new();
        trie.insert("CAT").unwrap();
        // A stored prefix that is not itself a word is absent.
        assert!(!trie.erase("CA").unwrap());
        assert!(!trie.erase("DOG").unwrap());
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("CAT"));
    }

    #[test]
    fn words_come_out_lexicographic() {
        let mut trie = Trie::new();
        trie.add_all(vec!["HELP", "GOODBYE", "HELLO", "GOOD"]).unwrap();
        assert_eq!(trie.words(), vec!["GOOD", "GOODBYE", "HELLO", "HELP"]);
        assert_eq!(trie.words().len(), trie.len());
    }

    #[test]
    fn clear_resets_everything() {
        let mut trie = Trie::new();
        trie.add_all(vec!["HELLO", "HELP", "GOODBYE", "GOOD"]).unwrap();
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(trie.words().is_empty());
        // Still usable afterwards.
        assert!(trie.insert("HELLO").unwrap());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn emptiness_follows_tree_shape() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        trie.insert("A").unwrap();
        assert!(!trie.is_empty());
        trie.erase("A").unwrap();
        assert!(trie.is_empty());
    }

    #[test]
    fn spellcheck_accepts_stored_words() {
        let mut trie = Trie::new();
        trie.add_all(vec!["HELLO", "HELP"]).unwrap();
        assert_eq!(trie.spellcheck("hello").unwrap(), Spellcheck::Correct);
    }

    #[test]
    fn spellcheck_suggests_from_deepest_matched_node() {
        let mut trie = Trie::new();
        trie.insert("DOG").unwrap();
        // Matches DOG fully, fails on M; the DOG node anchors suggestions.
        assert_eq!(
            trie.spellcheck("DOGMA").unwrap(),
            Spellcheck::Suggestions(vec!["DOG".to_string()])
        );
    }

    #[test]
    fn spellcheck_on_empty_trie_suggests_nothing() {
        let trie = Trie::new();
        assert_eq!(
            trie.spellcheck("DOG").unwrap(),
            Spellcheck::Suggestions(vec![])
        );
    }

    #[test]
    fn spellcheck_without_any_match_suggests_whole_dictionary() {
        let mut trie = Trie::new();
        trie.add_all(vec!["HELLO", "GOOD"]).unwrap();
        assert_eq!(
            trie.spellcheck("ZEBRA").unwrap(),
            Spellcheck::Suggestions(vec!["GOOD".to_string(), "HELLO".to_string()])
        );
    }

    #[test]
    fn spellcheck_prefix_that_is_not_a_word_suggests_completions() {
        let mut trie = Trie::new();
        trie.add_all(vec!["HELLO", "HELP"]).unwrap();
        assert_eq!(
            trie.spellcheck("HEL").unwrap(),
            Spellcheck::Suggestions(vec!["HELLO".to_string(), "HELP".to_string()])
        );
    }

    #[test]
    fn suggest_config_gates_the_root_fallback() {
        let mut trie = Trie::new();
        trie.add_all(vec!["HELLO", "HELP", "GOOD"]).unwrap();

        let config = SuggestConfig::builder().min_prefix(1).build();
        assert_eq!(
            trie.spellcheck_with("ZEBRA", &config).unwrap(),
            Spellcheck::Suggestions(vec![])
        );

        let config = SuggestConfig::builder().max_results(1).build();
        assert_eq!(
            trie.spellcheck_with("HEL", &config).unwrap(),
            Spellcheck::Suggestions(vec!["HELLO".to_string()])
        );
    }
}
