// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! DER structure decoder.
//!
//! A cursor over a borrowed blob. Each `parse_*` call checks the tag,
//! reads the length, advances the cursor and returns the payload as a
//! [`DerRange`] into the blob; bytes are only copied when the caller asks
//! for them via [`to_byte_array`](DerDecoder::to_byte_array).

use super::*;

/// Location of a parsed payload inside the decoder's blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerRange {
    /// Offset of the first payload byte.
    pub start: usize,
    /// Payload length in bytes.
    pub len: usize,
}

/// Decoder over a DER-encoded blob.
pub struct DerDecoder<'a> {
    blob: &'a [u8],
    pos: usize,
}

impl<'a> DerDecoder<'a> {
    /// Creates a decoder with the cursor at the start of `blob`.
    pub fn new(blob: &'a [u8]) -> Self {
        Self { blob, pos: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True iff the cursor is strictly before the end of the blob.
    pub fn more_data(&self) -> bool {
        self.more_data_at(self.pos)
    }

    /// True iff `pos` is strictly before the end of the blob.
    pub fn more_data_at(&self, pos: usize) -> bool {
        pos < self.blob.len()
    }

    /// Parses a SEQUENCE header.
    ///
    /// The cursor advances to the first byte of the sequence body, so the
    /// contained elements can be parsed next.
    ///
    /// # Errors
    ///
    /// Returns a malformed-DER error on a wrong tag, a truncated or
    /// non-minimal length, or a length overrunning the blob.
    pub fn parse_sequence(&mut self) -> Result<DerRange, CryptoError> {
        self.parse_header(Asn1Tag::Sequence)
    }

    /// Parses an INTEGER element and advances past its payload.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`parse_sequence`](Self::parse_sequence).
    pub fn parse_integer(&mut self) -> Result<DerRange, CryptoError> {
        let range = self.parse_header(Asn1Tag::Integer)?;
        self.pos = range.start + range.len;
        Ok(range)
    }

    /// Parses an OCTET STRING element and advances past its payload.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`parse_sequence`](Self::parse_sequence).
    pub fn parse_octet_string(&mut self) -> Result<DerRange, CryptoError> {
        let range = self.parse_header(Asn1Tag::OctetString)?;
        self.pos = range.start + range.len;
        Ok(range)
    }

    /// Interprets a parsed range as a big-endian two's-complement integer.
    ///
    /// # Errors
    ///
    /// * `CryptoError::DerInvalidLength` - the payload is empty
    /// * `CryptoError::DerIntegerTooLarge` - the payload exceeds 4 bytes
    pub fn to_int(&self, range: DerRange) -> Result<i32, CryptoError> {
        let payload = self.payload(range)?;
        if payload.is_empty() {
            return Err(CryptoError::DerInvalidLength);
        }
        if payload.len() > 4 {
            return Err(CryptoError::DerIntegerTooLarge);
        }

        // sign-extend from the first payload byte
        let mut value: i32 = if payload[0] & 0x80 != 0 { -1 } else { 0 };
        for &byte in payload {
            value = (value << 8) | byte as i32;
        }
        Ok(value)
    }

    /// Copies a parsed range's payload out of the blob.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::DerTruncated` if the range does not lie
    /// within the blob.
    pub fn to_byte_array(&self, range: DerRange) -> Result<Vec<u8>, CryptoError> {
        Ok(self.payload(range)?.to_vec())
    }

    fn payload(&self, range: DerRange) -> Result<&'a [u8], CryptoError> {
        range
            .start
            .checked_add(range.len)
            .and_then(|end| self.blob.get(range.start..end))
            .ok_or(CryptoError::DerTruncated)
    }

    fn parse_header(&mut self, expected: Asn1Tag) -> Result<DerRange, CryptoError> {
        let tag = *self.blob.get(self.pos).ok_or(CryptoError::DerTruncated)?;
        if tag != expected as u8 {
            return Err(CryptoError::DerUnexpectedTag);
        }
        self.pos += 1;

        let len = self.parse_len()?;
        if self.blob.len() - self.pos < len {
            return Err(CryptoError::DerTruncated);
        }
        Ok(DerRange {
            start: self.pos,
            len,
        })
    }

    /// Reads a DER length field at the cursor.
    ///
    /// Short form is a single byte up to 127. Long form is `0x80 | k`
    /// followed by `k` big-endian bytes; `k` is capped at 4 by the
    /// profile, and the indefinite form (`0x80`) is rejected.
    fn parse_len(&mut self) -> Result<usize, CryptoError> {
        let first = *self.blob.get(self.pos).ok_or(CryptoError::DerTruncated)?;
        self.pos += 1;

        if first & 0x80 == 0 {
            return Ok(first as usize);
        }

        let count = (first & 0x7f) as usize;
        if count == 0 || count > 4 {
            return Err(CryptoError::DerInvalidLength);
        }
        let bytes = self
            .blob
            .get(self.pos..self.pos + count)
            .ok_or(CryptoError::DerTruncated)?;

        let mut len = 0usize;
        for &byte in bytes {
            len = (len << 8) | byte as usize;
        }
        self.pos += count;
        Ok(len)
    }
}
