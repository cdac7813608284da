//! A configurable lexer and parser for JSON and its JSON5-adjacent
//! relatives.
//!
//! [`Config`] selects which non-strict productions are accepted; a
//! [`Lexer`] turns a byte slice into a [`Token`] stream under that
//! configuration, and a [`Parser`] turns the significant subset of that
//! stream into a [`Node`] tree. Once built, a tree can be walked with
//! [`Node::query`] using a slice of path segments.
//!
//! ```
//! use flexjson::{Config, Parser};
//!
//! let node = Parser::new(br#"{"a":[1,2,3]}"#, Config::new())
//!     .parse()
//!     .unwrap();
//! let two = node.query(&["a", "1"]).unwrap();
//! assert_eq!(two.as_number().unwrap(), flexjson::NumberValue::Integer(2));
//! ```

mod config;
mod error;
mod lexer;
mod node;
mod parser;
mod query;
mod token;

pub use config::Config;
pub use error::ParseError;
pub use lexer::Lexer;
pub use node::{Node, NumberValue, ValueError};
pub use parser::Parser;
pub use query::QueryError;
pub use token::{Token, TokenKind, TokenSubKind};
