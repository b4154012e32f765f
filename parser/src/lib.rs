mod error;
mod grammar;
mod token;

pub use error::Error;

use ast::Program;
use token::{PosToken, Token};

/// Deepest expression accepted. Every open parenthesis and every operator
/// inside a parenthesis level adds one, so this bounds the height of the
/// expression trees the grammar builds.
pub const MAX_NESTING: usize = 256;

pub fn parse_program(text: &str) -> Result<Program, Error> {
    let pos_tokens: Vec<PosToken> = token::tokenize(text)?;
    log::debug!("{} tokens", pos_tokens.len());

    let (tokens, spans): (Vec<Token>, Vec<(usize, usize)>) = pos_tokens
        .into_iter()
        .map(|pt| (pt.t, (pt.begin, pt.end)))
        .unzip();

    if let Some(at) = too_deep(&tokens) {
        let (line, column) = line_col(text, spans[at].0);
        log::debug!("expression nested deeper than {} at {}:{}", MAX_NESTING, line, column);
        return Err(Error::Grammar { line, column });
    }

    grammar::parser::program(&tokens).map_err(|err| {
        // running off the end of the input reports the end of the text
        let (begin, end) = spans
            .get(err.location)
            .copied()
            .unwrap_or((text.len(), text.len()));
        log::debug!(
            "unexpected {:?} at {}..{}, expected {}",
            tokens.get(err.location),
            begin,
            end,
            err.expected
        );
        let (line, column) = line_col(text, begin);
        Error::Grammar { line, column }
    })
}

/// Index of the first token that takes an expression past `MAX_NESTING`.
fn too_deep(tokens: &[Token]) -> Option<usize> {
    // operators seen at each open parenthesis level
    let mut levels = vec![0_usize];
    let mut depth = 1;
    for (i, t) in tokens.iter().enumerate() {
        match t {
            Token::SemiColon | Token::LBrace | Token::RBrace => {
                levels.truncate(1);
                levels[0] = 0;
                depth = 1;
            }
            Token::LParen => {
                levels.push(0);
                depth += 1;
            }
            Token::RParen if levels.len() > 1 => {
                if let Some(ops) = levels.pop() {
                    depth -= ops + 1;
                }
            }
            Token::Plus
            | Token::Minus
            | Token::Star
            | Token::Slash
            | Token::EqEq
            | Token::NotEq
            | Token::Leq
            | Token::Geq
            | Token::Lt
            | Token::Gt => {
                if let Some(ops) = levels.last_mut() {
                    *ops += 1;
                }
                depth += 1;
            }
            _ => {}
        }
        if depth > MAX_NESTING {
            return Some(i);
        }
    }
    None
}

/// 1-based line and column of byte offset `pos`.
fn line_col(text: &str, pos: usize) -> (usize, usize) {
    let before = &text[..pos];
    let line = before.as_bytes().iter().filter(|&&c| c == b'\n').count() + 1;
    let column = before.chars().rev().take_while(|&c| c != '\n').count() + 1;
    (line, column)
}
