use serde::{Deserialize, Serialize};

/// §3: assigned by Storage on first insert, stable and monotonically
/// increasing thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub u64);

impl DocumentId {
    pub fn new(id: u64) -> Self {
        DocumentId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        DocumentId(id)
    }
}

/// §3: a unique numeric id assigned by Storage on first insert. Equality
/// of two Tokens is decided by term text alone (see `Token::eq`); the id
/// is a storage surrogate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    pub fn new(id: u64) -> Self {
        TokenId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        TokenId(id)
    }
}

/// §3: a term together with its storage id and optional reading. Two
/// Tokens are equal iff their term strings are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub term: String,
    pub kana: Option<String>,
}

impl Token {
    /// A Token not yet assigned an id by Storage.
    pub fn unsaved(term: impl Into<String>) -> Self {
        Token {
            id: TokenId(0),
            term: term.into(),
            kana: None,
        }
    }

    pub fn with_kana(term: impl Into<String>, kana: impl Into<String>) -> Self {
        Token {
            id: TokenId(0),
            term: term.into(),
            kana: Some(kana.into()),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for Token {}

/// §3: a unit of indexed content. `token_count` is fixed at ingest time
/// by the Analyzer configured on the Indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub body: String,
    pub token_count: usize,
}

impl Document {
    pub fn new(body: impl Into<String>) -> Self {
        Document {
            id: DocumentId(0),
            body: body.into(),
            token_count: 0,
        }
    }
}
