//! Inverse of the builder: walks a [`Value`] tree depth-first and emits the
//! token sequence of a well-formed textual serialization, injecting `,`
//! between siblings and `:` between keys and values.
//!
//! Object entries are emitted in lexicographic key order, so linearizing
//! equal trees always produces equal token streams.

use crate::token::Token;
use crate::Value;

pub(crate) fn linearize(value: &Value) -> Vec<Token> {
    let mut tokens = Vec::new();
    emit(value, &mut tokens);
    tokens
}

fn emit(value: &Value, tokens: &mut Vec<Token>) {
    match value {
        Value::Null => tokens.push(Token::Null),
        Value::Bool(b) => tokens.push(Token::Bool(*b)),
        Value::Int(v) => tokens.push(Token::Int(*v)),
        Value::UInt(v) => tokens.push(Token::UInt(*v)),
        Value::Int64(v) => tokens.push(Token::Int64(*v)),
        Value::UInt64(v) => tokens.push(Token::UInt64(*v)),
        Value::Double(v) => tokens.push(Token::Double(*v)),
        Value::String(s) => tokens.push(Token::Str(s.clone())),
        Value::Array(array) => {
            tokens.push(Token::BeginArray);
            for (index, element) in array.iter().enumerate() {
                if index > 0 {
                    tokens.push(Token::Comma);
                }
                emit(element, tokens);
            }
            tokens.push(Token::EndArray);
        }
        Value::Object(object) => {
            tokens.push(Token::BeginObject);
            for (index, (key, element)) in object.iter().enumerate() {
                if index > 0 {
                    tokens.push(Token::Comma);
                }
                tokens.push(Token::Key(key.clone()));
                tokens.push(Token::Colon);
                emit(element, tokens);
            }
            tokens.push(Token::EndObject);
        }
    }
}
