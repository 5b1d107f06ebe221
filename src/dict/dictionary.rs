use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use typed_builder::TypedBuilder;

use crate::dict::index::Index;
use crate::dict::trie::{Spellcheck, Trie};
use crate::error::Result;

/// The trie plus its bulk loader: reads flat word lists and forwards the
/// word-level API to the engine.
#[derive(new, Default)]
pub struct Dictionary {
    #[new(default)]
    trie: Trie,
}

/// Shape of a word-list file. The default reads every whitespace-separated
/// token on every line; a delimiter switches to one word per line, taken
/// from `word_column`.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.delimiter {
            None => line.split_whitespace().collect(),
            Some(delimiter) => {
                let columns = line.split(delimiter).collect::<Vec<_>>();
                columns
                    .get(self.word_column.unwrap_or(0))
                    .copied()
                    .into_iter()
                    .collect()
            }
        }
    }
}

/// What a bulk load did: new words, silently skipped duplicates, and tokens
/// the engine refused.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub added: usize,
    pub duplicates: usize,
    pub failures: usize,
}

impl Dictionary {
    pub fn load_file(&mut self, path: impl AsRef<Path>, format: &FileFormat) -> Result<LoadReport> {
        let file = File::open(path)?;
        self.load(BufReader::new(file), format)
    }

    /// Inserts every word the reader yields. Duplicates are skipped, not
    /// errors; tokens with characters outside A-Z are tallied as failures.
    /// An unreadable source aborts the load with no report.
    pub fn load<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadReport> {
        let start = Instant::now();
        let mut report = LoadReport::default();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            for token in format.tokens(&line) {
                match self.trie.insert(token) {
                    Ok(true) => report.added += 1,
                    Ok(false) => report.duplicates += 1,
                    Err(e) if e.is_invalid_word() => report.failures += 1,
                    Err(e) => return Err(e),
                }
            }
        }

        // Progress goes to stderr; stdout belongs to the command protocol.
        let read = report.added + report.duplicates + report.failures;
        eprintln!(
            "Read {} words in {}s ({} new, {} duplicates, {} failures)",
            read,
            (start.elapsed().as_millis() as f64) / 1000.0,
            report.added,
            report.duplicates,
            report.failures
        );
        Ok(report)
    }

    delegate! {
        to self.trie {
            pub fn insert(&mut self, word: &str) -> Result<bool>;
            pub fn count(&self, prefix: &str) -> Result<usize>;
            pub fn contains(&self, word: &str) -> bool;
            pub fn erase(&mut self, word: &str) -> Result<bool>;
            pub fn words(&self) -> Vec<String>;
            pub fn spellcheck(&self, word: &str) -> Result<Spellcheck>;
            pub fn is_empty(&self) -> bool;
            pub fn clear(&mut self);
            pub fn len(&self) -> usize;
        }
    }
}

impl Index for Dictionary {
    fn add(&mut self, word: &str) -> Result<bool> {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        Dictionary::contains(self, word)
    }
}
