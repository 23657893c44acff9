use crate::{
    error::{Error, Result},
    tokenizer::Token,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(f64),
    Symbol(String),
    Invocation {
        command: Command,
        operands: Vec<Node>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Sub,
    Mul,
    Div,
    Print,
    Unknown(String),
}

impl Command {
    pub fn resolve(name: &str) -> Command {
        match name {
            "add" => Command::Add,
            "sub" => Command::Sub,
            "mul" => Command::Mul,
            "div" => Command::Div,
            "print" => Command::Print,
            _ => Command::Unknown(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Add => "add",
            Command::Sub => "sub",
            Command::Mul => "mul",
            Command::Div => "div",
            Command::Print => "print",
            Command::Unknown(name) => name,
        }
    }
}

pub fn parse(tokens: &[Token]) -> Result<Vec<Node>> {
    let mut consumed = 0;
    let mut program = Vec::new();

    while consumed < tokens.len() {
        let (node, node_consumed) = parse_node(&tokens[consumed..])?;
        program.push(node);
        consumed += node_consumed;
    }

    Ok(program)
}

// Parses one node at the head of the slice. The cursor is threaded by
// returning the consumed count alongside the node; it only ever advances.
fn parse_node(tokens: &[Token]) -> Result<(Node, usize)> {
    match &tokens[0] {
        Token::LeftParen => {
            // The token after '(' names the command, whatever it is. A paren
            // in command position names itself and resolves to Unknown.
            let command = match tokens.get(1) {
                Some(token) => Command::resolve(&token.to_string()),
                None => return Err(Error::UnclosedParenthesis),
            };

            let mut consumed = 2;
            let mut operands = Vec::new();

            while tokens.get(consumed) != Some(&Token::RightParen) {
                if consumed >= tokens.len() {
                    return Err(Error::UnclosedParenthesis);
                }

                let (operand, operand_consumed) = parse_node(&tokens[consumed..])?;
                operands.push(operand);
                consumed += operand_consumed;
            }
            consumed += 1; // Consume the ')'

            Ok((Node::Invocation { command, operands }, consumed))
        }
        Token::RightParen => Err(Error::ExtraClosingParenthesis),
        Token::Atom(text) => {
            let node = if text.bytes().all(|b| b.is_ascii_digit()) {
                // Atoms are non-empty, so the parse cannot fail; values past
                // f64's integer precision round like any float literal.
                text.parse().map(Node::Literal).unwrap_or(Node::Symbol(text.clone()))
            } else {
                Node::Symbol(text.clone())
            };
            Ok((node, 1))
        }
    }
}
