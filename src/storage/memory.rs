use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::error::Result;
use crate::core::types::{Document, DocumentId, Token, TokenId};
use crate::index::inverted::InvertedIndex;
use crate::index::merge::merge;
use crate::index::posting::PostingList;
use crate::storage::Storage;

/// §4.C (ADDED): an in-process reference `Storage`, guarded per-map by a
/// `Mutex` rather than one coarse lock, in the style of the teacher's
/// concrete store. DocumentIds and TokenIds are assigned by position in
/// their respective `Vec`s, starting at 1 (0 is reserved for `unsaved`
/// Tokens and fresh Documents), so both are monotonically increasing.
#[derive(Default)]
pub struct InMemoryStorage {
    documents: Mutex<Vec<Document>>,
    tokens: Mutex<Vec<Token>>,
    term_to_token: Mutex<HashMap<String, TokenId>>,
    postings: Mutex<HashMap<TokenId, PostingList>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

impl Storage for InMemoryStorage {
    fn count_documents(&self) -> Result<usize> {
        Ok(self.documents.lock().unwrap().len())
    }

    fn get_all_documents(&self) -> Result<Vec<Document>> {
        Ok(self.documents.lock().unwrap().clone())
    }

    fn get_documents(&self, ids: &[DocumentId]) -> Result<Vec<Document>> {
        let documents = self.documents.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| documents.iter().find(|d| d.id == *id).cloned())
            .collect())
    }

    fn add_document(&self, mut doc: Document) -> Result<DocumentId> {
        let mut documents = self.documents.lock().unwrap();
        let id = DocumentId::new(documents.len() as u64 + 1);
        doc.id = id;
        documents.push(doc);
        Ok(id)
    }

    fn add_token(&self, mut token: Token) -> Result<TokenId> {
        let mut term_to_token = self.term_to_token.lock().unwrap();
        if let Some(existing) = term_to_token.get(&token.term) {
            return Ok(*existing);
        }
        let mut tokens = self.tokens.lock().unwrap();
        let id = TokenId::new(tokens.len() as u64 + 1);
        token.id = id;
        tokens.push(token);
        term_to_token.insert(tokens[tokens.len() - 1].term.clone(), id);
        Ok(id)
    }

    fn get_token_by_term(&self, term: &str) -> Result<Option<Token>> {
        let term_to_token = self.term_to_token.lock().unwrap();
        let tokens = self.tokens.lock().unwrap();
        Ok(term_to_token
            .get(term)
            .and_then(|id| tokens.iter().find(|t| t.id == *id))
            .cloned())
    }

    fn get_tokens_by_terms(&self, terms: &[String]) -> Result<Vec<Token>> {
        let term_to_token = self.term_to_token.lock().unwrap();
        let tokens = self.tokens.lock().unwrap();
        Ok(terms
            .iter()
            .filter_map(|term| term_to_token.get(term))
            .filter_map(|id| tokens.iter().find(|t| t.id == *id))
            .cloned()
            .collect())
    }

    fn get_inverted_index_by_token_ids(&self, ids: &[TokenId]) -> Result<InvertedIndex> {
        let postings = self.postings.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| postings.get(id).map(|list| (*id, list.clone())))
            .collect())
    }

    fn upsert_inverted_index(&self, index: InvertedIndex) -> Result<()> {
        let mut postings = self.postings.lock().unwrap();
        for (id, incoming) in index.into_iter_entries() {
            match postings.get(&id) {
                Some(existing) => {
                    let merged = merge(existing, &incoming);
                    postings.insert(id, merged);
                }
                None => {
                    postings.insert(id, incoming);
                }
            }
        }
        Ok(())
    }
}
