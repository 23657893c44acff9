use log::debug;
use std::fmt::{self, Display, Formatter};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LeftParen,
    RightParen,
    Atom(String),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Atom(text) => write!(f, "{}", text),
        }
    }
}

/// Renders a token sequence back to source form, one space between tokens.
/// Re-tokenizing the result yields the same sequence.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let n = source.len();
    let mut cursor = 0;
    let mut tokens = Vec::new();

    while cursor < n {
        match next_token(source, cursor) {
            Ok((bytes_read, Some(token))) => {
                cursor += bytes_read;
                tokens.push(token);
            }
            Ok((bytes_read, None)) => {
                cursor += bytes_read;
            }
            Err(err) => {
                debug!("{}", err);
                return Err(err);
            }
        }
    }

    Ok(tokens)
}

// Scans one token starting at `cursor`, which the caller keeps on a char
// boundary. Returns bytes consumed and the token, or None for a separator.
fn next_token(source: &str, cursor: usize) -> Result<(usize, Option<Token>)> {
    let bytes = source.as_bytes();

    match bytes[cursor] {
        b' ' => Ok((1, None)),
        b'(' => Ok((1, Some(Token::LeftParen))),
        b')' => Ok((1, Some(Token::RightParen))),
        b if b.is_ascii_alphanumeric() => {
            let mut end_byte = cursor + 1;

            while end_byte < bytes.len() && bytes[end_byte].is_ascii_alphanumeric() {
                end_byte += 1;
            }

            Ok((
                end_byte - cursor,
                Some(Token::Atom(source[cursor..end_byte].to_string())),
            ))
        }
        _ => {
            let character = source[cursor..].chars().next().unwrap_or('\u{fffd}');
            Err(Error::InvalidCharacter {
                character,
                position: cursor,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_nested_form() {
        assert_eq!(
            tokenize("(add (mul 2 3) 1)").unwrap(),
            vec![
                Token::LeftParen,
                Token::Atom("add".to_string()),
                Token::LeftParen,
                Token::Atom("mul".to_string()),
                Token::Atom("2".to_string()),
                Token::Atom("3".to_string()),
                Token::RightParen,
                Token::Atom("1".to_string()),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn empty_input_is_no_tokens() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("   ").unwrap(), vec![]);
    }

    #[test]
    fn trailing_atom_is_captured() {
        assert_eq!(
            tokenize("add 42").unwrap(),
            vec![
                Token::Atom("add".to_string()),
                Token::Atom("42".to_string()),
            ]
        );
    }

    #[test]
    fn mixed_alphanumeric_run_is_one_token() {
        assert_eq!(
            tokenize("a1b2").unwrap(),
            vec![Token::Atom("a1b2".to_string())]
        );
    }

    #[test]
    fn tab_is_invalid() {
        assert!(matches!(
            tokenize("(add\t1 2)"),
            Err(Error::InvalidCharacter {
                character: '\t',
                position: 4,
            })
        ));
    }

    #[test]
    fn newline_is_invalid() {
        assert!(matches!(
            tokenize("1\n2"),
            Err(Error::InvalidCharacter {
                character: '\n',
                position: 1,
            })
        ));
    }

    #[test]
    fn punctuation_is_invalid() {
        assert!(matches!(
            tokenize("(add 1, 2)"),
            Err(Error::InvalidCharacter { character: ',', .. })
        ));
    }

    #[test]
    fn non_ascii_is_invalid() {
        assert!(matches!(
            tokenize("(add λ 2)"),
            Err(Error::InvalidCharacter {
                character: 'λ',
                position: 5,
            })
        ));
    }

    #[test]
    fn render_round_trips() {
        let tokens = tokenize("(add (mul 2 3) 1)").unwrap();
        assert_eq!(tokenize(&render(&tokens)).unwrap(), tokens);
    }
}
