//! The path-segment query operator over [`Node`] Arrays and Objects.

use thiserror::Error;

use crate::node::Node;

/// Everything that can go wrong walking a [`QueryPath`](Node::query).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("a query path must contain at least one segment")]
    InvalidQueryKey,

    #[error("array index segment `{0}` is not a valid base-10 integer")]
    ExpectedIndex(String),

    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("cannot index into an empty array")]
    EmptyArray,

    #[error("key `{0}` was not found")]
    KeyNotFound(String),

    #[error("path segment applied to a value that is neither an array nor an object")]
    InvalidJsonType,

    #[error("path continues past a scalar value")]
    QueryExceedsDepth,
}

impl<'a> Node<'a> {
    /// Walks `segments` through this node's Arrays and Objects.
    ///
    /// On an Array, a segment is parsed as a signed base-10 index. On an
    /// Object, a segment is compared byte-for-byte against each stored
    /// key in source order; the first match wins, so duplicated keys
    /// resolve to their first occurrence. Recursion stops as soon as
    /// `segments` is exhausted; reaching a scalar node with segments
    /// still remaining is an error, as is applying any segment to a
    /// scalar node at all.
    pub fn query(&self, segments: &[&str]) -> Result<&Node<'a>, QueryError> {
        let (head, rest) = segments
            .split_first()
            .ok_or(QueryError::InvalidQueryKey)?;

        let child = match self {
            Node::Array(items) => index_into(items, head)?,
            Node::Object(pairs) => lookup_key(pairs, head)?,
            _ => return Err(QueryError::InvalidJsonType),
        };

        if rest.is_empty() {
            return Ok(child);
        }

        match child {
            Node::Array(_) | Node::Object(_) => child.query(rest),
            _ => Err(QueryError::QueryExceedsDepth),
        }
    }
}

fn index_into<'a, 'b>(items: &'b [Node<'a>], head: &str) -> Result<&'b Node<'a>, QueryError> {
    let index: i64 = head
        .parse()
        .map_err(|_| QueryError::ExpectedIndex(head.to_string()))?;

    if items.is_empty() {
        return Err(QueryError::EmptyArray);
    }
    if index < 0 || index as usize >= items.len() {
        return Err(QueryError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    Ok(&items[index as usize])
}

fn lookup_key<'a, 'b>(
    pairs: &'b [(&'a [u8], Node<'a>)],
    head: &str,
) -> Result<&'b Node<'a>, QueryError> {
    pairs
        .iter()
        .find(|(key, _)| *key == head.as_bytes())
        .map(|(_, value)| value)
        .ok_or_else(|| QueryError::KeyNotFound(head.to_string()))
}
