// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! DER structure encoder.
//!
//! Append values in order, then call [`encode`](DerEncoder::encode) to
//! produce a DER `SEQUENCE` containing them. Appending more values after
//! `encode` and encoding again is allowed; already appended values cannot
//! be retrieved or removed.

use super::*;

struct SequenceItem {
    tag: Asn1Tag,
    contents: Vec<u8>,
}

/// Encoder for a DER `SEQUENCE` of `INTEGER` and `OCTET STRING` items.
#[derive(Default)]
pub struct DerEncoder {
    sequence: Vec<SequenceItem>,
}

impl DerEncoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an OCTET STRING item.
    ///
    /// Absent input (`None`) is tolerated as a no-op.
    pub fn append_octet_string(&mut self, octet_string: Option<&[u8]>) {
        let Some(octet_string) = octet_string else {
            return;
        };
        self.sequence.push(SequenceItem {
            tag: Asn1Tag::OctetString,
            contents: octet_string.to_vec(),
        });
    }

    /// Appends an INTEGER item.
    ///
    /// The payload is the shortest big-endian two's-complement encoding of
    /// `value`: redundant leading `0x00`/`0xff` bytes are dropped while the
    /// sign bit of the first remaining byte still matches the sign.
    pub fn append_int(&mut self, value: i32) {
        let contents = match value {
            // all-zero and all-one bit patterns encode to a single byte
            0 => vec![0x00],
            -1 => vec![0xff],
            _ => {
                let bytes = value.to_be_bytes();
                let mut start = 0;
                while start < 3 {
                    let redundant_zero = bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0;
                    let redundant_one = bytes[start] == 0xff && bytes[start + 1] & 0x80 != 0;
                    if redundant_zero || redundant_one {
                        start += 1;
                    } else {
                        break;
                    }
                }
                bytes[start..].to_vec()
            }
        };
        self.sequence.push(SequenceItem {
            tag: Asn1Tag::Integer,
            contents,
        });
    }

    /// Encodes the appended items into a DER `SEQUENCE`.
    ///
    /// Items appear in append order, each as tag, length, payload; the
    /// outer sequence length covers them all. Length fields use the
    /// minimal form: one byte up to 127, otherwise `0x80 | k` followed by
    /// `k` big-endian length bytes.
    pub fn encode(&self) -> Vec<u8> {
        let body_len: usize = self
            .sequence
            .iter()
            .map(|item| {
                1 + encoded_len_size(item.contents.len()) + item.contents.len()
            })
            .sum();

        let mut out = Vec::with_capacity(1 + encoded_len_size(body_len) + body_len);
        out.push(Asn1Tag::Sequence as u8);
        push_len(&mut out, body_len);

        for item in &self.sequence {
            out.push(item.tag as u8);
            push_len(&mut out, item.contents.len());
            out.extend_from_slice(&item.contents);
        }
        out
    }
}

/// Number of bytes the DER length field for `len` occupies.
fn encoded_len_size(len: usize) -> usize {
    if len <= 127 {
        1
    } else {
        let mut count = 0;
        let mut temp = len;
        while temp > 0 {
            temp >>= 8;
            count += 1;
        }
        1 + count
    }
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    if len <= 127 {
        out.push(len as u8);
        return;
    }
    let count = encoded_len_size(len) - 1;
    out.push(0x80 | count as u8);
    for i in (0..count).rev() {
        out.push((len >> (8 * i)) as u8);
    }
}
