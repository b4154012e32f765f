use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Func,
    Var,
    Const,
    IntTy,
    FloatTy,
    BoolTy,
    If,
    Else,
    While,
    Print,
    Return,
    True,
    False,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Colon,
    SemiColon,
    Arrow,
    Equal,
    EqEq,
    NotEq,
    Leq,
    Geq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    Ident(String),
    Int(i64),
    Float(f64),
}

/// A token with the byte range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct PosToken {
    pub t: Token,
    pub begin: usize,
    pub end: usize,
}

// Numeric literals come back as `Err(text)` when they don't fit an `i64` or
// a finite `f64`, so the caller can tell a bad literal apart from an unknown
// character.
peg::parser! { grammar tokenizer() for str {
    pub rule tokenize() -> Vec<Result<PosToken, String>>
        = skip() tokens:token()* { tokens }

    rule skip() = (ws() / comment())*

    rule ws()
        = quiet!{[' '|'\t'|'\n'|'\r']+}

    rule comment()
        = quiet!{"//" [^'\n']*}

    rule token() -> Result<PosToken, String>
        = begin:position!()
          tok:(n:number() { n } / t:plain() { Ok(t) })
          end:position!()
          skip()
          { tok.map(|t| PosToken { t, begin, end }) }

    rule plain() -> Token
        = keyword() / punct() / ident()

    rule keyword() -> Token
        = "func" !alnum_() { Token::Func }
        / "var" !alnum_() { Token::Var }
        / "const" !alnum_() { Token::Const }
        / "int" !alnum_() { Token::IntTy }
        / "float" !alnum_() { Token::FloatTy }
        / "bool" !alnum_() { Token::BoolTy }
        / "if" !alnum_() { Token::If }
        / "else" !alnum_() { Token::Else }
        / "while" !alnum_() { Token::While }
        / "print" !alnum_() { Token::Print }
        / "return" !alnum_() { Token::Return }
        / "true" !alnum_() { Token::True }
        / "false" !alnum_() { Token::False }

    rule punct() -> Token
        = "(" { Token::LParen }
        / ")" { Token::RParen }
        / "{" { Token::LBrace }
        / "}" { Token::RBrace }
        / "," { Token::Comma }
        / ":" { Token::Colon }
        / ";" { Token::SemiColon }
        / "->" { Token::Arrow }
        / "==" { Token::EqEq }
        / "!=" { Token::NotEq }
        / "<=" { Token::Leq }
        / ">=" { Token::Geq }
        / "=" { Token::Equal }
        / "<" { Token::Lt }
        / ">" { Token::Gt }
        / "+" { Token::Plus }
        / "-" { Token::Minus }
        / "*" { Token::Star }
        / "/" { Token::Slash }

    rule alnum_() = quiet!{['a'..='z'|'A'..='Z'|'0'..='9'|'_']}

    rule digit() = ['0'..='9']

    rule ident() -> Token
        = ident: quiet!{$(['a'..='z'|'A'..='Z'|'_'] alnum_()*)}
        { Token::Ident(ident.to_string()) }
        / expected!("identifier")

    rule number() -> Result<Token, String>
        = n: quiet!{$(digit()+ "." digit()+)}
        {
            match n.parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(Token::Float(x)),
                _ => Err(n.to_owned()),
            }
        }
        / n: quiet!{$(digit()+)}
        { n.parse().map(Token::Int).map_err(|_| n.to_owned()) }
} }

pub fn tokenize(text: &str) -> Result<Vec<PosToken>, Error> {
    let tokens = tokenizer::tokenize(text).map_err(|err| {
        log::debug!("invalid token: expected {}", err.expected);
        Error::Lexical {
            line: err.location.line,
            column: err.location.column,
        }
    })?;
    tokens
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|text| Error::LiteralRange { text })
}
