// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Parsed container record.

use super::*;

/// The decoded contents of a container blob: version, ciphertext and
/// stored HMAC.
///
/// Parsing validates the structure only; decryption and HMAC verification
/// are the container's job. The record is usable on its own to inspect a
/// blob without key material.
pub struct ContainerRecord {
    version: i32,
    cipher_text: Vec<u8>,
    hmac: Vec<u8>,
}

impl ContainerRecord {
    /// Parses a container blob.
    ///
    /// Expects exactly `SEQUENCE { INTEGER, OCTET STRING, OCTET STRING }`
    /// with no bytes trailing the sequence or padding its body, and a
    /// version of 0. A structurally valid blob with any other version is
    /// malformed as far as this library is concerned.
    ///
    /// # Errors
    ///
    /// * `CryptoError::ContainerMalformed` - structural failure of any
    ///   kind, including a version other than 0
    pub fn parse(container: &[u8]) -> Result<Self, CryptoError> {
        let mut decoder = DerDecoder::new(container);

        let sequence = decoder.parse_sequence().map_err(malformed)?;
        // nothing may follow the outer sequence
        if decoder.more_data_at(sequence.start + sequence.len) {
            tracing::error!("trailing bytes after container sequence");
            return Err(CryptoError::ContainerMalformed);
        }

        let version_range = decoder.parse_integer().map_err(malformed)?;
        let version = decoder.to_int(version_range).map_err(malformed)?;
        if version != CONTAINER_VERSION {
            tracing::error!(version, "unsupported container version");
            return Err(CryptoError::ContainerMalformed);
        }

        let cipher_text_range = decoder.parse_octet_string().map_err(malformed)?;
        let hmac_range = decoder.parse_octet_string().map_err(malformed)?;

        // nothing may pad the sequence body either
        if decoder.more_data() {
            tracing::error!("trailing bytes inside container sequence");
            return Err(CryptoError::ContainerMalformed);
        }

        Ok(Self {
            version,
            cipher_text: decoder.to_byte_array(cipher_text_range).map_err(malformed)?,
            hmac: decoder.to_byte_array(hmac_range).map_err(malformed)?,
        })
    }

    /// The container format version.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// The encrypted payload.
    pub fn cipher_text(&self) -> &[u8] {
        &self.cipher_text
    }

    /// The stored HMAC of the plaintext.
    pub fn hmac(&self) -> &[u8] {
        &self.hmac
    }
}

fn malformed(error: CryptoError) -> CryptoError {
    tracing::error!(?error, "container parse failed");
    CryptoError::ContainerMalformed
}
