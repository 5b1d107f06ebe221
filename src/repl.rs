use std::io::{BufRead, Write};
use std::path::PathBuf;

use derive_new::new;

use crate::command::{command, Command};
use crate::dict::dictionary::{Dictionary, FileFormat};
use crate::dict::trie::Spellcheck;
use crate::error::{DictError, Result};

/// Runs the command language against a dictionary, one line at a time,
/// writing the status lines to `out`. Stops on `exit` or end of input.
#[derive(new)]
pub struct Interpreter<W: Write> {
    #[new(default)]
    dict: Dictionary,
    corpus: PathBuf,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match command(&line) {
                Ok((_, cmd)) => {
                    if !self.execute(&cmd)? {
                        break;
                    }
                }
                Err(_) => {
                    eprintln!("{}", DictError::UnknownCommand(line.trim().to_string()))
                }
            }
        }
        Ok(())
    }

    /// Returns `Ok(false)` when the session should end.
    fn execute(&mut self, cmd: &Command) -> Result<bool> {
        match cmd {
            Command::Load => {
                self.dict
                    .load_file(&self.corpus, &FileFormat::builder().build())?;
                writeln!(self.out, "success")?;
            }
            Command::Insert(word) => match self.dict.insert(word) {
                Ok(true) => writeln!(self.out, "success")?,
                Ok(false) => writeln!(self.out, "failure")?,
                Err(e) if e.is_invalid_word() => writeln!(self.out, "invalid input")?,
                Err(e) => return Err(e),
            },
            Command::Count(prefix) => match self.dict.count(prefix) {
                Ok(0) => writeln!(self.out, "not found")?,
                Ok(n) => writeln!(self.out, "count is {}", n)?,
                Err(e) if e.is_invalid_word() => writeln!(self.out, "invalid input")?,
                Err(e) => return Err(e),
            },
            Command::Erase(word) => match self.dict.erase(word) {
                Ok(true) => writeln!(self.out, "success")?,
                Ok(false) => writeln!(self.out, "failure")?,
                Err(e) if e.is_invalid_word() => writeln!(self.out, "invalid input")?,
                Err(e) => return Err(e),
            },
            Command::Print => writeln!(self.out, "{}", self.dict.words().join(" "))?,
            Command::Spellcheck(word) => match self.dict.spellcheck(word) {
                Ok(Spellcheck::Correct) => writeln!(self.out, "correct")?,
                Ok(Spellcheck::Suggestions(words)) => {
                    writeln!(self.out, "{}", words.join(" "))?
                }
                Err(e) if e.is_invalid_word() => writeln!(self.out, "invalid input")?,
                Err(e) => return Err(e),
            },
            Command::Empty => {
                writeln!(self.out, "empty {}", if self.dict.is_empty() { 1 } else { 0 })?
            }
            Command::Clear => {
                self.dict.clear();
                writeln!(self.out, "success")?;
            }
            Command::Size => writeln!(self.out, "number of words is {}", self.dict.len())?,
            Command::Exit => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::repl::Interpreter;

    fn transcript(script: &str) -> String {
        let mut interp = Interpreter::new(PathBuf::from("corpus.txt"), Vec::new());
        interp.run(script.as_bytes()).unwrap();
        String::from_utf8(interp.out).unwrap()
    }

    #[test]
    fn insert_count_and_size() {
        let out = transcript("i cat\ni car\ni card\ni cat\nc CA\nc car\nsize\n");
        assert_eq!(
            out,
            "success\nsuccess\nsuccess\nfailure\ncount is 3\ncount is 2\nnumber of words is 3\n"
        );
    }

    #[test]
    fn erase_and_print() {
        let out = transcript("i cat\ni car\ni card\ne car\ne car\np\nc car\n");
        assert_eq!(
            out,
            "success\nsuccess\nsuccess\nsuccess\nfailure\nCARD CAT\ncount is 1\n"
        );
    }

    #[test]
    fn spellcheck_lines() {
        let out = transcript("i dog\nspellcheck dog\nspellcheck dogma\nspellcheck zzz\n");
        assert_eq!(out, "success\ncorrect\nDOG\nDOG\n");
    }

    #[test]
    fn empty_clear_and_exit() {
        let out = transcript("empty\ni cat\nempty\nclear\nempty\nsize\nexit\nsize\n");
        // nothing after exit runs
        assert_eq!(
            out,
            "empty 1\nsuccess\nempty 0\nsuccess\nempty 1\nnumber of words is 0\n"
        );
    }

    #[test]
    fn invalid_words_are_flagged() {
        let out = transcript("i c4t\nc c4t\ne c4t\n");
        assert_eq!(out, "invalid input\ninvalid input\ninvalid input\n");
    }

    #[test]
    fn blank_and_unknown_lines_are_skipped() {
        let out = transcript("\n\nfrobnicate\ni cat\nsize\n");
        assert_eq!(out, "success\nnumber of words is 1\n");
    }
}
