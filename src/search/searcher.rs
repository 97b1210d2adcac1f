use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::types::{Document, DocumentId, TokenId};
use crate::storage::Storage;

/// §4.F: what a Match query combines its terms with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLogic {
    And,
    Or,
}

/// §4.F: evaluates a query against Storage and returns matching
/// Documents, unsorted.
pub trait Searcher: Send + Sync {
    fn search(&self) -> Result<Vec<Document>>;
}

/// Returns every document in the corpus.
pub struct MatchAllSearcher {
    storage: Arc<dyn Storage>,
}

impl MatchAllSearcher {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        MatchAllSearcher { storage }
    }
}

impl Searcher for MatchAllSearcher {
    fn search(&self) -> Result<Vec<Document>> {
        self.storage.get_all_documents()
    }
}

/// Boolean AND/OR over a set of TokenIds, grounded in
/// `original_source/searcher.go`'s `andMatch`/`orMatch`: each TokenId's
/// PostingList is walked with its own cursor and the cursors are advanced
/// in lockstep, `AND` keeping only DocumentIds common to every list and
/// `OR` keeping any DocumentId seen in at least one.
pub struct MatchSearcher {
    storage: Arc<dyn Storage>,
    token_ids: Vec<TokenId>,
    logic: MatchLogic,
}

impl MatchSearcher {
    pub fn new(storage: Arc<dyn Storage>, token_ids: Vec<TokenId>, logic: MatchLogic) -> Self {
        MatchSearcher {
            storage,
            token_ids,
            logic,
        }
    }
}

impl Searcher for MatchSearcher {
    fn search(&self) -> Result<Vec<Document>> {
        if self.token_ids.is_empty() {
            return Ok(Vec::new());
        }

        let index = self
            .storage
            .get_inverted_index_by_token_ids(&self.token_ids)?;
        let lists: Vec<Vec<(DocumentId, Vec<usize>)>> = self
            .token_ids
            .iter()
            .map(|id| index.get(*id).map(|pl| pl.to_vec()).unwrap_or_default())
            .collect();

        let ids = match self.logic {
            MatchLogic::And => intersect_document_ids(&lists),
            MatchLogic::Or => union_document_ids(&lists),
        };

        self.storage.get_documents(&ids)
    }
}

/// Phrase match: documents where every query term occurs at contiguous,
/// in-order positions. Grounded in `original_source/searcher.go`'s
/// `isPhraseMatch`, which intersects each term's positions shifted by its
/// offset in the phrase (`minIdx`/`isSameDocumentId` drive the cursor
/// walk that finds the candidate documents first).
pub struct PhraseSearcher {
    storage: Arc<dyn Storage>,
    token_ids: Vec<TokenId>,
}

impl PhraseSearcher {
    pub fn new(storage: Arc<dyn Storage>, token_ids: Vec<TokenId>) -> Self {
        PhraseSearcher { storage, token_ids }
    }
}

impl Searcher for PhraseSearcher {
    fn search(&self) -> Result<Vec<Document>> {
        if self.token_ids.is_empty() {
            return Ok(Vec::new());
        }

        let index = self
            .storage
            .get_inverted_index_by_token_ids(&self.token_ids)?;
        let lists: Vec<Vec<(DocumentId, Vec<usize>)>> = self
            .token_ids
            .iter()
            .map(|id| index.get(*id).map(|pl| pl.to_vec()).unwrap_or_default())
            .collect();

        let candidates = intersect_document_ids(&lists);
        let matching: Vec<DocumentId> = candidates
            .into_iter()
            .filter(|id| is_phrase_match(&lists, *id))
            .collect();

        self.storage.get_documents(&matching)
    }
}

/// §4.F: merge-join of `lists.len()` sorted, duplicate-free cursors —
/// keeps only DocumentIds present in every list.
fn intersect_document_ids(lists: &[Vec<(DocumentId, Vec<usize>)>]) -> Vec<DocumentId> {
    if lists.is_empty() || lists.iter().any(|l| l.is_empty()) {
        return Vec::new();
    }

    let mut cursors = vec![0usize; lists.len()];
    let mut result = Vec::new();

    loop {
        if cursors.iter().zip(lists).any(|(i, l)| *i >= l.len()) {
            break;
        }
        let ids: Vec<DocumentId> = cursors.iter().zip(lists).map(|(i, l)| l[*i].0).collect();
        let max_id = *ids.iter().max().unwrap();
        if ids.iter().all(|id| *id == max_id) {
            result.push(max_id);
            for i in cursors.iter_mut() {
                *i += 1;
            }
        } else {
            for (cursor, id) in cursors.iter_mut().zip(ids.iter()) {
                if *id < max_id {
                    *cursor += 1;
                }
            }
        }
    }

    result
}

/// §4.F: union of DocumentIds across every list.
fn union_document_ids(lists: &[Vec<(DocumentId, Vec<usize>)>]) -> Vec<DocumentId> {
    let mut set = BTreeSet::new();
    for list in lists {
        for (id, _) in list {
            set.insert(*id);
        }
    }
    set.into_iter().collect()
}

/// For each query term i, form `R_i = { q - i : q in P_i.positions }`.
/// The phrase occurs in `id` iff every `R_i` shares a common value.
fn is_phrase_match(lists: &[Vec<(DocumentId, Vec<usize>)>], id: DocumentId) -> bool {
    let mut common: Option<BTreeSet<i64>> = None;

    for (i, list) in lists.iter().enumerate() {
        let positions = match list.iter().find(|(doc_id, _)| *doc_id == id) {
            Some((_, positions)) => positions,
            None => return false,
        };
        let relative: BTreeSet<i64> = positions.iter().map(|p| *p as i64 - i as i64).collect();

        common = Some(match common {
            None => relative,
            Some(prev) => prev.intersection(&relative).copied().collect(),
        });

        if common.as_ref().unwrap().is_empty() {
            return false;
        }
    }

    common.map(|s| !s.is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Document;
    use crate::storage::memory::InMemoryStorage;

    fn seed() -> (Arc<InMemoryStorage>, TokenId, TokenId) {
        let storage = Arc::new(InMemoryStorage::new());
        let d1 = storage.add_document(Document::new("aa bb cc")).unwrap();
        let d2 = storage.add_document(Document::new("bb cc aa")).unwrap();
        let aa = storage.add_token(crate::core::types::Token::unsaved("aa")).unwrap();
        let bb = storage.add_token(crate::core::types::Token::unsaved("bb")).unwrap();

        let mut index = crate::index::inverted::InvertedIndex::new();
        index.insert(
            aa,
            crate::index::posting::PostingList::from_vec(vec![(d1, vec![0]), (d2, vec![2])]),
        );
        index.insert(
            bb,
            crate::index::posting::PostingList::from_vec(vec![(d1, vec![1]), (d2, vec![0])]),
        );
        storage.upsert_inverted_index(index).unwrap();
        (storage, aa, bb)
    }

    #[test]
    fn match_all_returns_every_document() {
        let (storage, _, _) = seed();
        let docs = MatchAllSearcher::new(storage).search().unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn and_requires_all_terms_present() {
        let (storage, aa, bb) = seed();
        let docs = MatchSearcher::new(storage, vec![aa, bb], MatchLogic::And)
            .search()
            .unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn or_requires_any_term_present() {
        let (storage, aa, _) = seed();
        let d3 = storage.add_document(Document::new("cc only")).unwrap();
        let cc = storage.add_token(crate::core::types::Token::unsaved("cc")).unwrap();
        let mut index = crate::index::inverted::InvertedIndex::new();
        index.insert(
            cc,
            crate::index::posting::PostingList::single(d3, vec![0]),
        );
        storage.upsert_inverted_index(index).unwrap();

        let docs = MatchSearcher::new(storage, vec![aa, cc], MatchLogic::Or)
            .search()
            .unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn phrase_requires_contiguous_relative_positions() {
        let (storage, aa, bb) = seed();
        // "aa" at 0, "bb" at 1 in d1 -> contiguous ("aa bb"). d2 has
        // "bb" before "aa" so it must not match.
        let docs = PhraseSearcher::new(storage, vec![aa, bb]).search().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, DocumentId::new(1));
    }
}
