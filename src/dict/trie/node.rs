use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, ALPHABET};

/// One trie node. Slot `i` of `children` holds the child for letter
/// `'A' + i`; each child is owned exclusively by its parent, so dropping a
/// slot tears down the whole suffix below it.
#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) letter: char,
    pub(crate) is_terminal: bool,
    pub(crate) path: String,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children[get_idx(c)].as_deref()
    }

    fn create_child(&mut self, c: char) {
        let mut path = self.path.clone();
        path.push(c);
        self.children[get_idx(c)] = Some(Box::new(TrieNode {
            children: Default::default(),
            letter: c,
            is_terminal: false,
            path,
        }));
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        if self.get_child(c).is_none() {
            self.create_child(c);
        }
        self.children[get_idx(c)].as_deref_mut().unwrap()
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(|x| x.is_some())
    }

    /// Number of complete words in the subtree rooted here, this node
    /// included.
    pub(crate) fn subtree_words(&self) -> usize {
        let mut count = usize::from(self.is_terminal);
        for child in self {
            count += child.subtree_words();
        }
        count
    }

    /// Depth-first collection of every word below (and at) this node.
    /// A node's own word is emitted before its children's, and children are
    /// visited in slot order, so the output is lexicographic.
    pub(crate) fn collect_words(&self, out: &mut Vec<String>) {
        if self.is_terminal {
            out.push(self.path.clone());
        }
        for child in self {
            child.collect_words(out);
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("path", &self.path)
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .filter_map(|x| x.as_ref().map(|c| c.letter))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
