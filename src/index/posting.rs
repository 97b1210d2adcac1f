use crate::core::types::DocumentId;

/// §3: a single (DocumentId, positions) record. `positions` is strictly
/// ascending 0-based token offsets, in the Analyzer's emission order.
/// Represented as a node in a singly linked chain (§3.1's resolved
/// representation choice) rather than an arena of handles — the shape
/// `original_source/index.go`'s `*Postings` has directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub document_id: DocumentId,
    pub positions: Vec<usize>,
    pub next: Option<Box<Posting>>,
}

impl Posting {
    pub fn new(document_id: DocumentId, positions: Vec<usize>, next: Option<Box<Posting>>) -> Self {
        Posting {
            document_id,
            positions,
            next,
        }
    }

    /// §4.B: inserts `node` immediately after `self` — an O(1) insert-
    /// after, not an append to the tail of the whole chain.
    pub fn push_back(&mut self, mut node: Box<Posting>) {
        node.next = self.next.take();
        self.next = Some(node);
    }
}

/// §3: an ordered chain of Postings, sorted ascending by DocumentId, no
/// duplicate DocumentId.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingList {
    pub head: Option<Box<Posting>>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList { head: None }
    }

    pub fn single(document_id: DocumentId, positions: Vec<usize>) -> Self {
        PostingList {
            head: Some(Box::new(Posting::new(document_id, positions, None))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// `PostingList.Size()` — number of Postings in the chain.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next.as_deref();
        }
        count
    }

    /// length of `positions` for the Posting with DocumentId `d`, or 0 if
    /// absent.
    pub fn appearance_count_in_document(&self, d: DocumentId) -> usize {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            if node.document_id == d {
                return node.positions.len();
            }
            cursor = node.next.as_deref();
        }
        0
    }

    /// Materialize the chain as a `Vec` in DocumentId order, for callers
    /// that want a snapshot (codec, tests) rather than cursor access.
    pub fn to_vec(&self) -> Vec<(DocumentId, Vec<usize>)> {
        let mut out = Vec::new();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push((node.document_id, node.positions.clone()));
            cursor = node.next.as_deref();
        }
        out
    }

    pub fn from_vec(entries: Vec<(DocumentId, Vec<usize>)>) -> Self {
        let mut head: Option<Box<Posting>> = None;
        let mut tail: Option<&mut Box<Posting>> = None;
        for (document_id, positions) in entries {
            let node = Box::new(Posting::new(document_id, positions, None));
            match tail.take() {
                None => {
                    head = Some(node);
                    tail = head.as_mut();
                }
                Some(prev) => {
                    prev.next = Some(node);
                    tail = prev.next.as_mut();
                }
            }
        }
        PostingList { head }
    }

    /// §4.D's *upsert-position*: walks the chain for `document_id`,
    /// appending `position` if found, else splices in a new Posting at
    /// the point that preserves ascending DocumentId order.
    pub fn upsert_position(&mut self, document_id: DocumentId, position: usize) {
        if self.head.is_none() {
            self.head = Some(Box::new(Posting::new(document_id, vec![position], None)));
            return;
        }

        {
            let mut cursor = self.head.as_deref_mut();
            while let Some(node) = cursor {
                if node.document_id == document_id {
                    node.positions.push(position);
                    return;
                }
                cursor = node.next.as_deref_mut();
            }
        }

        let head = self.head.as_ref().unwrap();
        if document_id < head.document_id {
            let mut new_head = Box::new(Posting::new(document_id, vec![position], None));
            new_head.next = self.head.take();
            self.head = Some(new_head);
            return;
        }

        let mut cursor = self.head.as_deref_mut().unwrap();
        loop {
            match &cursor.next {
                Some(next) if next.document_id < document_id => {
                    cursor = cursor.next.as_deref_mut().unwrap();
                }
                _ => break,
            }
        }
        cursor.push_back(Box::new(Posting::new(document_id, vec![position], None)));
    }
}
