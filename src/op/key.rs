// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Key marker traits and key import/export operations.
//!
//! These traits classify key types by capability so that operation traits
//! can constrain their associated key types. A symmetric secret key such as
//! an AES key implements [`Key`], [`SymmetricKey`], [`SecretKey`] and the
//! operation-specific markers it supports.

use super::*;

/// Marks a type as a cryptographic key.
pub trait Key {
    /// Returns the length of the key in bytes.
    fn size(&self) -> usize;

    /// Returns the length of the key in bits.
    fn bits(&self) -> usize {
        self.size() * 8
    }
}

/// Marks a key as symmetric (the same key is used for both directions).
pub trait SymmetricKey: Key {}

/// Marks a key as secret.
pub trait SecretKey: Key {}

/// Marks a key as usable for encryption operations.
pub trait EncryptionKey: Key {}

/// Marks a key as usable for decryption operations.
pub trait DecryptionKey: Key {}

/// Marks a key as usable for signing (MAC creation).
pub trait SigningKey: Key {}

/// Marks a key as usable for signature (MAC) verification.
pub trait VerificationKey: Key {}

/// Marks a key as usable as input to key derivation.
pub trait DerivationKey: Key {}

/// Marks a key as importable from raw bytes.
pub trait ImportableKey: Sized {
    /// Imports a key from its raw byte representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte length is invalid for the key type.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>;
}

/// Marks a key as exportable to raw bytes.
pub trait ExportableKey: Key {
    /// Exports the key to byte representation.
    ///
    /// Pass `None` to query the required buffer size, `Some(buffer)` to
    /// copy the key material out.
    ///
    /// # Errors
    ///
    /// Returns an error if the provided buffer is too small.
    fn to_bytes(&self, bytes: Option<&mut [u8]>) -> Result<usize, CryptoError>;

    /// Exports the key into a freshly allocated vector.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`to_bytes`](Self::to_bytes).
    fn to_vec(&self) -> Result<Vec<u8>, CryptoError> {
        let required_size = self.to_bytes(None)?;
        let mut bytes = vec![0u8; required_size];
        let written_size = self.to_bytes(Some(&mut bytes))?;
        bytes.truncate(written_size);
        Ok(bytes)
    }
}
