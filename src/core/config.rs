/// Indexer tuning knobs. `merge_threshold` is §4.D's `T`: the in-memory
/// inverted index is flushed to storage once it holds at least this many
/// distinct tokens. `T = 0` merges on every `add_document` call.
#[derive(Debug, Clone, Copy)]
pub struct IndexerConfig {
    pub merge_threshold: usize,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        IndexerConfig { merge_threshold: 0 }
    }
}

impl IndexerConfig {
    pub fn with_merge_threshold(merge_threshold: usize) -> Self {
        IndexerConfig { merge_threshold }
    }
}
