// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! AES-256 symmetric encryption.
//!
//! This module provides the AES-256 block transform (FIPS 197) and the
//! CFB-128 cipher mode built on top of it. The block engine is a bare
//! single-block transform behind the [`BlockCipherOp`] seam; all chaining
//! logic lives in the mode driver.

use zeroize::Zeroize;

use super::*;

mod cfb;
mod engine;

pub use cfb::*;
pub use engine::*;

/// AES-256 key size in bytes.
pub const AES_KEY_SIZE: usize = 32;

/// AES block size in bytes (all key sizes use 128-bit blocks).
pub const AES_BLOCK_SIZE: usize = 16;

/// An AES-256 key.
///
/// Holds exactly 32 bytes of key material. The backing storage is
/// zeroized on drop; [`zeroize`](Zeroize::zeroize) wipes it early.
#[derive(Clone)]
pub struct AesKey {
    key: Vec<u8>,
}

impl AesKey {
    pub(crate) fn key_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl Drop for AesKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl Zeroize for AesKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
    }
}

impl Key for AesKey {
    fn size(&self) -> usize {
        self.key.len()
    }
}

impl SymmetricKey for AesKey {}

impl SecretKey for AesKey {}

impl EncryptionKey for AesKey {}

impl DecryptionKey for AesKey {}

impl ImportableKey for AesKey {
    /// Creates an `AesKey` from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::AesInvalidKeySize` unless exactly 32 bytes
    /// are supplied.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != AES_KEY_SIZE {
            return Err(CryptoError::AesInvalidKeySize);
        }
        Ok(Self {
            key: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests;
