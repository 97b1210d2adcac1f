use serde::{Deserialize, Serialize};

use crate::compression::delta::DeltaEncoder;
use crate::compression::vbyte::VByteEncoder;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocumentId;
use crate::index::posting::PostingList;

/// §4.H: the on-disk byte layout of a PostingList — delta-encoded,
/// VByte-packed DocumentIds, plus one independently VByte-packed
/// positions block per posting (positions are not delta-encoded, per
/// spec.md step 1). `bincode` frames the two sections so a decoder never
/// has to hand-parse length prefixes.
#[derive(Serialize, Deserialize)]
struct CodecFrame {
    encoded_doc_ids: Vec<u8>,
    position_blocks: Vec<Vec<u8>>,
}

pub struct PostingListCodec;

impl PostingListCodec {
    pub fn encode(list: &PostingList) -> Result<Vec<u8>> {
        let entries = list.to_vec();

        let doc_ids: Vec<u32> = entries.iter().map(|(id, _)| id.value() as u32).collect();
        let encoded_doc_ids = DeltaEncoder::encode_u32_list(&doc_ids)?;

        let mut position_blocks = Vec::with_capacity(entries.len());
        for (_, positions) in &entries {
            let as_u32: Vec<u32> = positions.iter().map(|p| *p as u32).collect();
            position_blocks.push(VByteEncoder::encode_u32_list(&as_u32)?);
        }

        let frame = CodecFrame {
            encoded_doc_ids,
            position_blocks,
        };
        bincode::serialize(&frame).map_err(Error::from)
    }

    pub fn decode(bytes: &[u8]) -> Result<PostingList> {
        let frame: CodecFrame = bincode::deserialize(bytes).map_err(Error::from)?;
        let doc_ids = DeltaEncoder::decode_u32_list(&frame.encoded_doc_ids)?;

        if doc_ids.len() != frame.position_blocks.len() {
            return Err(Error::new(
                ErrorKind::Decode,
                "doc id count does not match position block count".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(doc_ids.len());
        for (id, block) in doc_ids.into_iter().zip(frame.position_blocks.into_iter()) {
            let positions = VByteEncoder::decode_u32_list(&block)?
                .into_iter()
                .map(|p| p as usize)
                .collect();
            entries.push((DocumentId::new(id as u64), positions));
        }

        Ok(PostingList::from_vec(entries))
    }
}
