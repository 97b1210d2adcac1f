use crate::index::posting::PostingList;

/// §4.E: merges `storage`'s PostingList with the in-memory PostingList
/// accumulated since the last flush, producing a single ascending,
/// duplicate-free chain. On a DocumentId collision the `storage` side's
/// Posting wins and the `memory` side's duplicate is dropped — the
/// `storage`-wins branch `original_source/indexer.go`'s `merge` takes
/// (`smaller, larger = smaller.Next, larger.Next` discards the side
/// supplied second on equality; `storage` is always passed first here).
pub fn merge(storage: &PostingList, memory: &PostingList) -> PostingList {
    let mut a = storage.head.as_deref();
    let mut b = memory.head.as_deref();
    let mut merged: Vec<(crate::core::types::DocumentId, Vec<usize>)> = Vec::new();

    loop {
        match (a, b) {
            (Some(na), Some(nb)) => {
                if na.document_id < nb.document_id {
                    merged.push((na.document_id, na.positions.clone()));
                    a = na.next.as_deref();
                } else if nb.document_id < na.document_id {
                    merged.push((nb.document_id, nb.positions.clone()));
                    b = nb.next.as_deref();
                } else {
                    merged.push((na.document_id, na.positions.clone()));
                    a = na.next.as_deref();
                    b = nb.next.as_deref();
                }
            }
            (Some(na), None) => {
                merged.push((na.document_id, na.positions.clone()));
                a = na.next.as_deref();
            }
            (None, Some(nb)) => {
                merged.push((nb.document_id, nb.positions.clone()));
                b = nb.next.as_deref();
            }
            (None, None) => break,
        }
    }

    PostingList::from_vec(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentId;

    fn list(entries: &[(u64, &[usize])]) -> PostingList {
        PostingList::from_vec(
            entries
                .iter()
                .map(|(d, p)| (DocumentId(*d), p.to_vec()))
                .collect(),
        )
    }

    #[test]
    fn merges_disjoint_lists_in_order() {
        let a = list(&[(1, &[0]), (3, &[1])]);
        let b = list(&[(2, &[0])]);
        let merged = merge(&a, &b);
        assert_eq!(
            merged.to_vec(),
            vec![
                (DocumentId(1), vec![0]),
                (DocumentId(2), vec![0]),
                (DocumentId(3), vec![1]),
            ]
        );
    }

    #[test]
    fn storage_side_wins_on_duplicate_document_id() {
        let storage = list(&[(1, &[0, 2])]);
        let memory = list(&[(1, &[9])]);
        let merged = merge(&storage, &memory);
        assert_eq!(merged.to_vec(), vec![(DocumentId(1), vec![0, 2])]);
    }

    #[test]
    fn merge_law_commutes_as_a_set() {
        let a = list(&[(1, &[0]), (4, &[0])]);
        let b = list(&[(2, &[0]), (3, &[0])]);
        let ab = merge(&a, &b);
        let ba = merge(&b, &a);
        assert_eq!(ab.to_vec(), ba.to_vec());
    }

    #[test]
    fn merge_preserves_ascending_no_duplicate_invariant() {
        let a = list(&[(1, &[0]), (2, &[0]), (5, &[0])]);
        let b = list(&[(2, &[1]), (3, &[0]), (5, &[1])]);
        let merged = merge(&a, &b);
        let ids: Vec<u64> = merged.to_vec().iter().map(|(d, _)| d.value()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
