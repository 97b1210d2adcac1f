use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::core::error::Result;
use crate::core::types::{Document, TokenId};
use crate::scoring::scorer::Sorter;
use crate::search::searcher::{MatchAllSearcher, MatchLogic, MatchSearcher, PhraseSearcher, Searcher};
use crate::storage::Storage;

/// §6.3: returns every document in the corpus, unsorted (a Sorter would
/// be meaningless here — there is no query term to score against).
pub struct MatchAllQuery {
    storage: Arc<dyn Storage>,
}

impl MatchAllQuery {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        MatchAllQuery { storage }
    }

    pub fn execute(&self) -> Result<Vec<Document>> {
        MatchAllSearcher::new(self.storage.clone()).search()
    }
}

/// §6.3: analyzes `text` into query terms, resolves them to TokenIds, and
/// combines them with the configured `MatchLogic`. An unindexed term
/// makes an `And` query vacuously empty (no document can contain a term
/// that was never indexed) but is simply ignored by `Or`.
pub struct MatchQuery {
    storage: Arc<dyn Storage>,
    analyzer: Analyzer,
    logic: MatchLogic,
    sorter: Option<Arc<dyn Sorter>>,
}

impl MatchQuery {
    pub fn new(storage: Arc<dyn Storage>, analyzer: Analyzer, logic: MatchLogic) -> Self {
        MatchQuery {
            storage,
            analyzer,
            logic,
            sorter: None,
        }
    }

    pub fn with_sorter(mut self, sorter: Arc<dyn Sorter>) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn execute(&self, text: &str) -> Result<Vec<Document>> {
        let stream = self.analyzer.analyze(text);
        let terms: Vec<String> = stream.terms().into_iter().map(str::to_string).collect();
        let tokens = self.storage.get_tokens_by_terms(&terms)?;

        if self.logic == MatchLogic::And && tokens.len() != terms.len() {
            return Ok(Vec::new());
        }

        let token_ids: Vec<TokenId> = tokens.iter().map(|t| t.id).collect();
        let docs = MatchSearcher::new(self.storage.clone(), token_ids.clone(), self.logic).search()?;
        self.apply_sorter(docs, &token_ids, &tokens)
    }

    fn apply_sorter(
        &self,
        docs: Vec<Document>,
        token_ids: &[TokenId],
        tokens: &[crate::core::types::Token],
    ) -> Result<Vec<Document>> {
        match &self.sorter {
            None => Ok(docs),
            Some(sorter) => {
                let index = self.storage.get_inverted_index_by_token_ids(token_ids)?;
                sorter.sort(docs, &index, tokens)
            }
        }
    }
}

/// §6.3: analyzes `phrase` and requires the resulting terms to occur
/// contiguously, in order, in a document. Any unresolved term makes the
/// query vacuously empty.
pub struct PhraseQuery {
    storage: Arc<dyn Storage>,
    analyzer: Analyzer,
    sorter: Option<Arc<dyn Sorter>>,
}

impl PhraseQuery {
    pub fn new(storage: Arc<dyn Storage>, analyzer: Analyzer) -> Self {
        PhraseQuery {
            storage,
            analyzer,
            sorter: None,
        }
    }

    pub fn with_sorter(mut self, sorter: Arc<dyn Sorter>) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn execute(&self, phrase: &str) -> Result<Vec<Document>> {
        let stream = self.analyzer.analyze(phrase);
        let terms: Vec<String> = stream.terms().into_iter().map(str::to_string).collect();
        let tokens = self.storage.get_tokens_by_terms(&terms)?;

        if tokens.len() != terms.len() {
            return Ok(Vec::new());
        }

        let token_ids: Vec<TokenId> = tokens.iter().map(|t| t.id).collect();
        let docs = PhraseSearcher::new(self.storage.clone(), token_ids.clone()).search()?;

        match &self.sorter {
            None => Ok(docs),
            Some(sorter) => {
                let index = self.storage.get_inverted_index_by_token_ids(&token_ids)?;
                sorter.sort(docs, &index, &tokens)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filters::lowercase::LowercaseFilter;
    use crate::analysis::tokenizer::StandardTokenizer;
    use crate::core::config::IndexerConfig;
    use crate::index::index_writer::Indexer;
    use crate::storage::memory::InMemoryStorage;

    fn analyzer() -> Analyzer {
        Analyzer::new(Box::new(StandardTokenizer)).with_token_filter(Box::new(LowercaseFilter))
    }

    #[test]
    fn match_all_returns_every_ingested_document() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut indexer = Indexer::new(storage.clone(), analyzer(), IndexerConfig::default());
        indexer.add_document("aa bb").unwrap();
        indexer.add_document("cc dd").unwrap();

        let docs = MatchAllQuery::new(storage).execute().unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn and_query_excludes_documents_missing_a_term() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut indexer = Indexer::new(storage.clone(), analyzer(), IndexerConfig::default());
        indexer.add_document("aa bb").unwrap();
        indexer.add_document("aa cc").unwrap();

        let query = MatchQuery::new(storage, analyzer(), MatchLogic::And);
        let docs = query.execute("aa bb").unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn and_query_with_never_indexed_term_is_empty() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut indexer = Indexer::new(storage.clone(), analyzer(), IndexerConfig::default());
        indexer.add_document("aa bb").unwrap();

        let query = MatchQuery::new(storage, analyzer(), MatchLogic::And);
        let docs = query.execute("aa zzz").unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn phrase_query_requires_contiguous_order() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut indexer = Indexer::new(storage.clone(), analyzer(), IndexerConfig::default());
        indexer.add_document("the quick brown fox").unwrap();
        indexer.add_document("brown the quick fox").unwrap();

        let query = PhraseQuery::new(storage, analyzer());
        let docs = query.execute("quick brown").unwrap();
        assert_eq!(docs.len(), 1);
    }
}
