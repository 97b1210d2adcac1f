use std::sync::Arc;

use crate::core::error::Result;
use crate::core::types::{Document, Token};
use crate::index::inverted::InvertedIndex;
use crate::storage::Storage;

/// §4.G: ranks the documents a Searcher returned. Takes the InvertedIndex
/// slice the query already fetched (one PostingList per query token)
/// rather than re-fetching, and the resolved query Tokens themselves (for
/// their TokenIds).
pub trait Sorter: Send + Sync {
    fn sort(&self, docs: Vec<Document>, index: &InvertedIndex, tokens: &[Token]) -> Result<Vec<Document>>;
}

/// TF-IDF, grounded in `original_source/sorter.go`'s `Sort()`:
/// `tf = appearance_count / doc.token_count`,
/// `idf = log2(N / (doc_freq + 1)) + 1`,
/// score is the sum of `tf * idf` over the query's tokens, documents sort
/// descending by score, ties broken by DocumentId ascending.
pub struct TfIdfSorter {
    storage: Arc<dyn Storage>,
}

impl TfIdfSorter {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        TfIdfSorter { storage }
    }

    fn score(&self, doc: &Document, index: &InvertedIndex, tokens: &[Token], total_docs: usize) -> f64 {
        tokens
            .iter()
            .map(|token| {
                let Some(list) = index.get(token.id) else {
                    return 0.0;
                };
                let appearances = list.appearance_count_in_document(doc.id);
                if appearances == 0 || doc.token_count == 0 {
                    return 0.0;
                }
                let tf = appearances as f64 / doc.token_count as f64;
                let doc_freq = list.size();
                let idf = (total_docs as f64 / (doc_freq as f64 + 1.0)).log2() + 1.0;
                tf * idf
            })
            .sum()
    }
}

impl Sorter for TfIdfSorter {
    fn sort(&self, docs: Vec<Document>, index: &InvertedIndex, tokens: &[Token]) -> Result<Vec<Document>> {
        let total_docs = self.storage.count_documents()?;
        let mut scored: Vec<(f64, Document)> = docs
            .into_iter()
            .map(|doc| (self.score(&doc, index, tokens, total_docs), doc))
            .collect();

        scored.sort_by(|(score_a, doc_a), (score_b, doc_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| doc_a.id.cmp(&doc_b.id))
        });

        Ok(scored.into_iter().map(|(_, doc)| doc).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentId;
    use crate::index::posting::PostingList;
    use crate::storage::memory::InMemoryStorage;

    #[test]
    fn higher_term_frequency_ranks_first() {
        let storage = Arc::new(InMemoryStorage::new());
        let token = storage
            .add_token(Token::unsaved("aa"))
            .unwrap();

        let mut doc_a = Document::new("aa aa bb");
        doc_a.token_count = 3;
        doc_a.id = DocumentId::new(1);
        let mut doc_b = Document::new("aa bb cc dd");
        doc_b.token_count = 4;
        doc_b.id = DocumentId::new(2);

        storage.add_document(doc_a.clone()).unwrap();
        storage.add_document(doc_b.clone()).unwrap();

        let mut index = InvertedIndex::new();
        index.insert(
            token,
            PostingList::from_vec(vec![(doc_a.id, vec![0, 1]), (doc_b.id, vec![0])]),
        );

        let tokens = vec![storage.get_token_by_term("aa").unwrap().unwrap()];
        let sorter = TfIdfSorter::new(storage);
        let ranked = sorter.sort(vec![doc_b.clone(), doc_a.clone()], &index, &tokens).unwrap();

        assert_eq!(ranked[0].id, doc_a.id);
    }

    #[test]
    fn ties_break_by_document_id_ascending() {
        let storage = Arc::new(InMemoryStorage::new());
        let token = storage.add_token(Token::unsaved("aa")).unwrap();

        let mut doc_a = Document::new("aa");
        doc_a.token_count = 1;
        doc_a.id = DocumentId::new(2);
        let mut doc_b = Document::new("aa");
        doc_b.token_count = 1;
        doc_b.id = DocumentId::new(1);

        storage.add_document(doc_a.clone()).unwrap();
        storage.add_document(doc_b.clone()).unwrap();

        let mut index = InvertedIndex::new();
        index.insert(
            token,
            PostingList::from_vec(vec![(doc_b.id, vec![0]), (doc_a.id, vec![0])]),
        );

        let tokens = vec![storage.get_token_by_term("aa").unwrap().unwrap()];
        let sorter = TfIdfSorter::new(storage);
        let ranked = sorter
            .sort(vec![doc_a.clone(), doc_b.clone()], &index, &tokens)
            .unwrap();

        assert_eq!(ranked[0].id, doc_b.id);
        assert_eq!(ranked[1].id, doc_a.id);
    }
}
