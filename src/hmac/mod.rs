// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! HMAC (Hash-based Message Authentication Code) implementation.
//!
//! RFC 2104 HMAC over the hash functions in [`crate::hash`]. The module
//! provides key import, one-shot sign/verify and a streaming sign context
//! whose keyed state can be reset without re-keying — the shape the PBKDF2
//! inner loop needs.
//!
//! # Security Considerations
//!
//! - Keys of any length are accepted; keys longer than the hash block size
//!   are pre-hashed per RFC 2104
//! - Verification compares tags in constant time
//! - Key material is wiped from memory when the key is dropped

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::*;

/// An HMAC key.
///
/// Holds raw key material for HMAC signing and verification. The same key
/// is used for both operations. The backing storage is zeroized on drop.
#[derive(Clone)]
pub struct HmacKey {
    key: Vec<u8>,
}

impl Drop for HmacKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl Key for HmacKey {
    fn size(&self) -> usize {
        self.key.len()
    }
}

impl SymmetricKey for HmacKey {}

impl SecretKey for HmacKey {}

impl SigningKey for HmacKey {}

impl VerificationKey for HmacKey {}

impl ImportableKey for HmacKey {
    /// Imports a key from raw byte representation.
    ///
    /// Keys of any length are accepted; for security the key should be at
    /// least as long as the hash output.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            key: bytes.to_vec(),
        })
    }
}

impl TryFrom<&GenericSecretKey> for HmacKey {
    type Error = CryptoError;

    fn try_from(key: &GenericSecretKey) -> Result<Self, Self::Error> {
        let mut key_bytes = key.to_vec()?;
        let hmac_key = HmacKey::from_bytes(&key_bytes);
        key_bytes.zeroize();
        hmac_key
    }
}

/// HMAC operation provider over a configurable hash algorithm.
pub struct HmacAlgo {
    hash: HashAlgo,
}

impl HmacAlgo {
    /// Creates an HMAC provider using the given hash algorithm.
    pub fn new(hash: HashAlgo) -> Self {
        Self { hash }
    }

    /// Returns the size of the MAC in bytes (the hash digest size).
    pub fn mac_size(&self) -> usize {
        self.hash.digest_size()
    }

    /// Initializes a streaming sign context keyed with `key`.
    ///
    /// The returned context can be [`reset`](HmacSignContext::reset) back
    /// to its keyed state between messages without re-deriving the key
    /// pads.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be scheduled.
    pub fn sign_init(&self, key: &HmacKey) -> Result<HmacSignContext, CryptoError> {
        // B-byte key block: a long key is hashed down to L bytes first,
        // a short one is used as-is; either way zero-padded to B (RFC 2104)
        let block_size = self.hash.block_size();
        let mut key_block = vec![0u8; block_size];
        if key.key.len() > block_size {
            let mut hash = self.hash;
            hash.hash(&key.key, Some(&mut key_block))?;
        } else {
            key_block[..key.key.len()].copy_from_slice(&key.key);
        }

        let mut ipad = vec![0x36u8; block_size];
        let mut opad = vec![0x5cu8; block_size];
        for i in 0..block_size {
            ipad[i] ^= key_block[i];
            opad[i] ^= key_block[i];
        }
        key_block.zeroize();

        let mut inner = self.hash.hash_init();
        inner.update(&ipad);
        let mut outer = self.hash.hash_init();
        outer.update(&opad);
        ipad.zeroize();
        opad.zeroize();

        Ok(HmacSignContext {
            inner_keyed: inner.clone(),
            inner,
            outer,
        })
    }
}

impl SignOp for HmacAlgo {
    type Key = HmacKey;

    /// Computes `HMAC(key, data)` in a single operation.
    fn sign(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        let mut context = self.sign_init(key)?;
        context.update(data);
        context.finish(signature)
    }
}

impl VerifyOp for HmacAlgo {
    type Key = HmacKey;

    /// Verifies `signature` against `HMAC(key, data)` in constant time.
    fn verify(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        let mut computed = vec![0u8; self.mac_size()];
        self.sign(key, data, Some(&mut computed))?;
        Ok(computed.ct_eq(signature).into())
    }
}

/// Streaming HMAC sign context.
///
/// Created by [`HmacAlgo::sign_init`]. Feed message bytes with
/// [`update`](Self::update), produce the tag with
/// [`finish`](Self::finish), and rewind to the keyed state with
/// [`reset`](Self::reset) to authenticate another message under the same
/// key.
pub struct HmacSignContext {
    /// Running inner hash, seeded with `key XOR ipad`.
    inner: HashAlgoContext,
    /// Snapshot of the freshly keyed inner hash, restored by `reset`.
    inner_keyed: HashAlgoContext,
    /// Outer hash seeded with `key XOR opad`.
    outer: HashAlgoContext,
}

impl HmacSignContext {
    /// Processes a chunk of message data.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalizes the MAC and writes it to `signature`.
    ///
    /// # Returns
    ///
    /// The number of bytes written, or the required buffer size if
    /// `signature` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::HmacSignatureBufferTooSmall` if the buffer
    /// cannot hold the MAC.
    pub fn finish(&self, signature: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let mac_size = self.inner.algo().digest_size();
        if let Some(signature) = signature {
            if signature.len() < mac_size {
                return Err(CryptoError::HmacSignatureBufferTooSmall);
            }
            let inner_digest = self.inner.finish_vec()?;
            let mut outer = self.outer.clone();
            outer.update(&inner_digest);
            outer
                .finish(Some(&mut signature[..mac_size]))
                .map_err(|_| CryptoError::HmacSignatureBufferTooSmall)?;
        }
        Ok(mac_size)
    }

    /// Finalizes the MAC and returns it as a vector.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`finish`](Self::finish).
    pub fn finish_vec(&self) -> Result<Vec<u8>, CryptoError> {
        let required_size = self.finish(None)?;
        let mut signature = vec![0u8; required_size];
        let written_size = self.finish(Some(&mut signature))?;
        signature.truncate(written_size);
        Ok(signature)
    }

    /// Rewinds the context to its freshly keyed state.
    ///
    /// The key pads are not re-derived; only the running message state is
    /// discarded.
    pub fn reset(&mut self) {
        self.inner = self.inner_keyed.clone();
    }
}

#[cfg(test)]
mod tests;
