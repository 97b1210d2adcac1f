pub mod memory;

use crate::core::error::Result;
use crate::core::types::{Document, DocumentId, Token, TokenId};
use crate::index::inverted::InvertedIndex;

/// §4.C / §6.1: the durable backing store. Implementations are assumed to
/// be internally safe for whatever concurrency they document — the core
/// never takes a lock of its own around these calls.
pub trait Storage: Send + Sync {
    fn count_documents(&self) -> Result<usize>;
    fn get_all_documents(&self) -> Result<Vec<Document>>;
    fn get_documents(&self, ids: &[DocumentId]) -> Result<Vec<Document>>;
    fn add_document(&self, doc: Document) -> Result<DocumentId>;
    fn add_token(&self, token: Token) -> Result<TokenId>;
    fn get_token_by_term(&self, term: &str) -> Result<Option<Token>>;
    fn get_tokens_by_terms(&self, terms: &[String]) -> Result<Vec<Token>>;
    fn get_inverted_index_by_token_ids(&self, ids: &[TokenId]) -> Result<InvertedIndex>;
    fn upsert_inverted_index(&self, index: InvertedIndex) -> Result<()>;
}
