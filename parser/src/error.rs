use thiserror::Error;

/// Why a source text did not produce a tree. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Lexer Error at line {line}, column {column}")]
    Lexical { line: usize, column: usize },

    #[error("Parser Error at line {line}, column {column}")]
    Grammar { line: usize, column: usize },

    #[error("literal out of range: {text}")]
    LiteralRange { text: String },
}
