//! Recursive descent builder turning a token stream into a [`Value`] tree.
//!
//! The builder is the single structural validator for both formats: text is
//! lexed into tokens, binary input is first rewritten into text and then
//! lexed, and both streams pass through here.

use crate::token::Token;
use crate::{Error, JsonMap, Result, Value};

type Tokens = std::iter::Peekable<std::vec::IntoIter<Token>>;

/// Builds the value tree for a complete token stream.
///
/// The first token must open an object or an array; trailing tokens after
/// the root closes are rejected.
pub(crate) fn build(tokens: Vec<Token>) -> Result<Value> {
    let mut tokens = tokens.into_iter().peekable();

    let root = match tokens.next() {
        Some(Token::BeginObject) => build_object(&mut tokens)?,
        Some(Token::BeginArray) => build_array(&mut tokens)?,
        Some(other) => {
            return Err(Error::structural(format!(
                "expected '{{' or '[' at document root, found {}",
                other.describe()
            )))
        }
        None => return Err(Error::UnexpectedEof),
    };

    match tokens.next() {
        None => Ok(root),
        Some(extra) => Err(Error::structural(format!(
            "unexpected {} after document root",
            extra.describe()
        ))),
    }
}

/// Consumes tokens after a `{` up to and including the matching `}`.
fn build_object(tokens: &mut Tokens) -> Result<Value> {
    let mut object = JsonMap::new();

    // Empty object
    if matches!(tokens.peek(), Some(Token::EndObject)) {
        tokens.next();
        return Ok(Value::Object(object));
    }

    loop {
        let key = match tokens.next() {
            Some(Token::Key(key)) => key,
            Some(other) => {
                return Err(Error::structural(format!(
                    "expected object key, found {}",
                    other.describe()
                )))
            }
            None => return Err(Error::UnexpectedEof),
        };

        match tokens.next() {
            Some(Token::Colon) => {}
            Some(other) => {
                return Err(Error::structural(format!(
                    "expected ':' after object key, found {}",
                    other.describe()
                )))
            }
            None => return Err(Error::UnexpectedEof),
        }

        let value = build_value(tokens)?;
        // Duplicate keys: the later value wins
        object.insert(key, value);

        match tokens.next() {
            Some(Token::Comma) => {}
            Some(Token::EndObject) => return Ok(Value::Object(object)),
            Some(other) => {
                return Err(Error::structural(format!(
                    "expected ',' or '}}' after object value, found {}",
                    other.describe()
                )))
            }
            None => return Err(Error::UnexpectedEof),
        }
    }
}

/// Consumes tokens after a `[` up to and including the matching `]`.
fn build_array(tokens: &mut Tokens) -> Result<Value> {
    let mut array = Vec::new();

    if matches!(tokens.peek(), Some(Token::EndArray)) {
        tokens.next();
        return Ok(Value::Array(array));
    }

    loop {
        array.push(build_value(tokens)?);

        match tokens.next() {
            Some(Token::Comma) => {}
            Some(Token::EndArray) => return Ok(Value::Array(array)),
            Some(other) => {
                return Err(Error::structural(format!(
                    "expected ',' or ']' after array element, found {}",
                    other.describe()
                )))
            }
            None => return Err(Error::UnexpectedEof),
        }
    }
}

/// Consumes one value: a literal token or a nested container.
fn build_value(tokens: &mut Tokens) -> Result<Value> {
    match tokens.next() {
        Some(Token::BeginObject) => build_object(tokens),
        Some(Token::BeginArray) => build_array(tokens),
        Some(Token::Null) => Ok(Value::Null),
        Some(Token::Bool(b)) => Ok(Value::Bool(b)),
        Some(Token::Int(v)) => Ok(Value::Int(v)),
        Some(Token::UInt(v)) => Ok(Value::UInt(v)),
        Some(Token::Int64(v)) => Ok(Value::Int64(v)),
        Some(Token::UInt64(v)) => Ok(Value::UInt64(v)),
        Some(Token::Double(v)) => Ok(Value::Double(v)),
        Some(Token::Str(s)) => Ok(Value::String(s)),
        Some(other) => Err(Error::structural(format!(
            "expected value, found {}",
            other.describe()
        ))),
        None => Err(Error::UnexpectedEof),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(input: &str) -> Result<Value> {
        build(tokenize(input)?)
    }

    #[test]
    fn test_object_root() {
        let value = parse("{\"a\":1,\"b\":true}").unwrap();
        assert_eq!(value.get("a"), Some(&Value::UInt(1)));
        assert_eq!(value.get("b"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_array_root() {
        let value = parse("[null,-1,\"x\"]").unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Null,
                Value::Int(-1),
                Value::String("x".to_string()),
            ])
        );
    }

    #[test]
    fn test_nesting() {
        let value = parse("{\"a\":{\"b\":[1,[2]]}}").unwrap();
        let inner = value.get("a").and_then(|v| v.get("b")).unwrap();
        assert_eq!(inner.get_index(0), Some(&Value::UInt(1)));
        assert_eq!(
            inner.get_index(1),
            Some(&Value::Array(vec![Value::UInt(2)]))
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let value = parse("{\"a\":1,\"a\":2}").unwrap();
        assert_eq!(value.get("a"), Some(&Value::UInt(2)));
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_scalar_root_rejected() {
        assert!(matches!(parse("1"), Err(Error::Structural(_))));
        assert!(matches!(parse("\"x\""), Err(Error::Structural(_))));
        assert!(matches!(parse("true"), Err(Error::Structural(_))));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_truncated_object() {
        assert!(matches!(parse("{\"a\":1,"), Err(Error::UnexpectedEof)));
        assert!(matches!(parse("{\"a\":"), Err(Error::UnexpectedEof)));
        assert!(matches!(parse("{"), Err(Error::UnexpectedEof)));
        assert!(matches!(parse("[1,2"), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_grammar_violations() {
        assert!(matches!(parse("{\"a\" 1}"), Err(Error::Structural(_))));
        assert!(matches!(parse("{1:2}"), Err(Error::Structural(_))));
        assert!(matches!(parse("[1 2]"), Err(Error::Structural(_))));
        assert!(matches!(parse("[,]"), Err(Error::Structural(_))));
        assert!(matches!(parse("{}{}"), Err(Error::Structural(_))));
        assert!(matches!(parse("[\"a\":1]"), Err(Error::Structural(_))));
    }

    #[test]
    fn test_mismatched_brackets() {
        assert!(parse("{\"a\":1]").is_err());
        assert!(parse("[1}").is_err());
    }
}
