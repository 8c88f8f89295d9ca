//! Restricted literal grammar for variable values.
//!
//! A value is either a numeric scalar or a bracketed, comma-separated list
//! of numerics. Nothing else is accepted; in particular there is no
//! expression evaluation of any kind, and trailing commas (`[1, 2,]`) are
//! rejected so the writer's output is the only list form the parser admits.

use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub(crate) enum Token {
    #[regex(r"[+-]?(\d+\.\d*|\.\d+|\d+)([eE][+-]?\d+)?")]
    Number,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
}

/// A parsed variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    List(Vec<f64>),
}

impl Value {
    /// View the value as a numeric list, if it is one.
    pub fn as_list(&self) -> Option<&[f64]> {
        match self {
            Value::List(items) => Some(items),
            Value::Scalar(_) => None,
        }
    }

    /// View the value as a scalar, if it is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::List(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(v) => write!(f, "{v}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Parse the text to the right of `=` as a restricted literal.
pub fn parse_value(text: &str) -> Result<Value, String> {
    let mut tokens = Vec::new();
    let mut lex = Token::lexer(text);
    while let Some(res) = lex.next() {
        match res {
            Ok(tok) => tokens.push((tok, lex.slice().to_string())),
            Err(_) => return Err(format!("unexpected input `{}`", lex.slice())),
        }
    }

    let mut cursor = tokens.iter();
    let value = match cursor.next() {
        Some((Token::Number, lexeme)) => Value::Scalar(parse_number(lexeme)?),
        Some((Token::LBracket, _)) => {
            let mut items = Vec::new();
            loop {
                match cursor.next() {
                    Some((Token::RBracket, _)) if items.is_empty() => break,
                    Some((Token::Number, lexeme)) => {
                        items.push(parse_number(lexeme)?);
                        match cursor.next() {
                            Some((Token::Comma, _)) => continue,
                            Some((Token::RBracket, _)) => break,
                            Some((_, lexeme)) => {
                                return Err(format!("expected `,` or `]`, found `{lexeme}`"))
                            }
                            None => return Err("unterminated list".to_string()),
                        }
                    }
                    Some((_, lexeme)) => {
                        return Err(format!("expected number, found `{lexeme}`"))
                    }
                    None => return Err("unterminated list".to_string()),
                }
            }
            Value::List(items)
        }
        Some((_, lexeme)) => return Err(format!("expected literal, found `{lexeme}`")),
        None => return Err("empty value".to_string()),
    };

    match cursor.next() {
        None => Ok(value),
        Some((_, lexeme)) => Err(format!("trailing input `{lexeme}`")),
    }
}

fn parse_number(lexeme: &str) -> Result<f64, String> {
    lexeme
        .parse::<f64>()
        .map_err(|_| format!("invalid number `{lexeme}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_forms() {
        assert_eq!(parse_value("150").unwrap(), Value::Scalar(150.0));
        assert_eq!(parse_value("0.110787").unwrap(), Value::Scalar(0.110787));
        assert_eq!(parse_value("-2.5e3").unwrap(), Value::Scalar(-2500.0));
        assert_eq!(parse_value(" .5 ").unwrap(), Value::Scalar(0.5));
    }

    #[test]
    fn list_forms() {
        assert_eq!(
            parse_value("[1, 2, 3]").unwrap(),
            Value::List(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(parse_value("[]").unwrap(), Value::List(vec![]));
        assert_eq!(
            parse_value("[0.1,0.22,3.456]").unwrap(),
            Value::List(vec![0.1, 0.22, 3.456])
        );
    }

    #[test]
    fn rejects_anything_that_is_not_a_literal() {
        assert!(parse_value("__import__('os')").is_err());
        assert!(parse_value("[1, 2").is_err());
        assert!(parse_value("[1 2]").is_err());
        assert!(parse_value("1 2").is_err());
        assert!(parse_value("").is_err());
        assert!(parse_value("[,]").is_err());
        assert!(parse_value("[1, 2,]").is_err());
    }

    #[test]
    fn display_round_trips() {
        let v = Value::List(vec![0.110787, 1.0, 149.600611]);
        assert_eq!(parse_value(&v.to_string()).unwrap(), v);
        let s = Value::Scalar(3.456);
        assert_eq!(parse_value(&s.to_string()).unwrap(), s);
    }
}
