use std::fs::File;
use std::io::{self, BufReader};

use structopt::StructOpt;

use dict_tools::repl::Interpreter;
use dict_tools::Result;

/// Interactive dictionary shell backed by a prefix tree.
#[derive(StructOpt)]
struct Cli {
    /// The word list consumed by the `load` command
    #[structopt(long, default_value = "corpus.txt", parse(from_os_str))]
    corpus: std::path::PathBuf,
    /// A command script to run instead of reading stdin
    #[structopt(parse(from_os_str))]
    script: Option<std::path::PathBuf>,
}

fn run(args: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut interp = Interpreter::new(args.corpus, stdout.lock());
    match args.script {
        Some(path) => interp.run(BufReader::new(File::open(path)?)),
        None => {
            let stdin = io::stdin();
            interp.run(stdin.lock())
        }
    }
}

fn main() {
    if let Err(e) = run(Cli::from_args()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
