use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("tokenizer error: invalid character {character:?} at byte {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("parser error: unclosed parenthesis")]
    UnclosedParenthesis,
    #[error("parser error: extra closing parenthesis")]
    ExtraClosingParenthesis,
    #[error("runtime error: unknown command '{0}'")]
    UnknownCommand(String),
    #[error("runtime error: '{command}' expects {expected} operands but got {got}")]
    WrongArity {
        command: String,
        expected: usize,
        got: usize,
    },
    #[error("runtime error: operands to '{0}' must be numbers")]
    NonNumericOperand(String),
}

pub type Result<T> = std::result::Result<T, Error>;
