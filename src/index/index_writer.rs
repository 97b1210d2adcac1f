use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::IndexerConfig;
use crate::core::error::Result;
use crate::core::types::{Document, DocumentId};
use crate::index::inverted::InvertedIndex;
use crate::storage::Storage;

/// §4.D: owns the in-memory InvertedIndex accumulated since the last
/// flush and the Analyzer used to tokenize incoming documents. Holds
/// `Storage` behind `Arc` since Searchers share the same backing store.
pub struct Indexer {
    storage: Arc<dyn Storage>,
    analyzer: Analyzer,
    inverted_index: InvertedIndex,
    config: IndexerConfig,
}

impl Indexer {
    pub fn new(storage: Arc<dyn Storage>, analyzer: Analyzer, config: IndexerConfig) -> Self {
        Indexer {
            storage,
            analyzer,
            inverted_index: InvertedIndex::new(),
            config,
        }
    }

    /// §4.D `AddDocument`: analyze, persist the document, upsert each
    /// (token, position) pair into the in-memory index, then flush to
    /// Storage once the merge threshold is reached. No rollback on a
    /// partial failure — the next successful cycle re-merges correctly
    /// because merge is idempotent at the posting level.
    pub fn add_document(&mut self, body: impl Into<String>) -> Result<DocumentId> {
        let mut doc = Document::new(body);
        let token_stream = self.analyzer.analyze(&doc.body);
        doc.token_count = token_stream.size();

        let document_id = self.storage.add_document(doc)?;

        for (position, token) in token_stream.tokens.into_iter().enumerate() {
            let token_id = self.storage.add_token(token)?;
            self.upsert_position(document_id, token_id, position);
        }

        if self.inverted_index.len() >= self.config.merge_threshold {
            self.flush()?;
        }

        Ok(document_id)
    }

    /// Forces a merge cycle regardless of the configured threshold.
    pub fn flush(&mut self) -> Result<()> {
        let pending = std::mem::take(&mut self.inverted_index);
        if pending.is_empty() {
            return Ok(());
        }
        self.storage.upsert_inverted_index(pending)
    }

    fn upsert_position(
        &mut self,
        document_id: DocumentId,
        token_id: crate::core::types::TokenId,
        position: usize,
    ) {
        self.inverted_index
            .entry_or_default(token_id)
            .upsert_position(document_id, position);
    }
}
