use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::space1;
use nom::combinator::{all_consuming, map, value};
use nom::sequence::{pair, preceded};
use nom::IResult;

/// One line of the driver's command language.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Load,
    Insert(String),
    Count(String),
    Erase(String),
    Print,
    Spellcheck(String),
    Empty,
    Clear,
    Size,
    Exit,
}

pub fn command(input: &str) -> IResult<&str, Command> {
    all_consuming(alt((
        map(argument("spellcheck"), Command::Spellcheck),
        value(Command::Empty, tag("empty")),
        value(Command::Exit, tag("exit")),
        value(Command::Clear, tag("clear")),
        value(Command::Size, tag("size")),
        value(Command::Load, tag("load")),
        // the single-letter commands have to come after the full words so
        // "empty" isn't taken for an erase of "mpty"
        map(argument("i"), Command::Insert),
        map(argument("c"), Command::Count),
        map(argument("e"), Command::Erase),
        value(Command::Print, tag("p")),
    )))(input.trim())
}

fn argument(name: &'static str) -> impl FnMut(&str) -> IResult<&str, String> {
    move |input| preceded(pair(tag(name), space1), word)(input)
}

fn word(input: &str) -> IResult<&str, String> {
    map(take_till1(char::is_whitespace), str::to_string)(input)
}
