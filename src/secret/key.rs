// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Generic secret key implementation.

use zeroize::Zeroize;

use super::*;

/// A generic secret key for symmetric cryptographic operations.
///
/// This structure holds raw key material in memory and implements the key
/// management traits. It can be used for any operation that consumes raw
/// key bytes; in this crate it carries PBKDF2 passphrases and derived key
/// material.
///
/// The backing storage is zeroized when the key is dropped.
pub struct GenericSecretKey {
    key_data: Vec<u8>,
}

impl Drop for GenericSecretKey {
    fn drop(&mut self) {
        self.key_data.zeroize();
    }
}

impl Key for GenericSecretKey {
    fn size(&self) -> usize {
        self.key_data.len()
    }
}

impl SymmetricKey for GenericSecretKey {}

impl SecretKey for GenericSecretKey {}

impl DerivationKey for GenericSecretKey {}

impl ImportableKey for GenericSecretKey {
    /// Imports a key from raw byte representation.
    ///
    /// No validation is performed; keys of any size (including empty) can
    /// be imported. Operations consuming the key enforce their own length
    /// requirements.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            key_data: bytes.to_vec(),
        })
    }
}

impl ExportableKey for GenericSecretKey {
    /// Exports the key to byte representation.
    ///
    /// Callers should clear the destination buffer once the material is no
    /// longer needed.
    fn to_bytes(&self, bytes: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let key_len = self.key_data.len();
        if let Some(bytes) = bytes {
            if bytes.len() < key_len {
                return Err(CryptoError::AesBufferTooSmall);
            }
            bytes[..key_len].copy_from_slice(&self.key_data);
        }
        Ok(key_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_export_roundtrip() {
        let key = GenericSecretKey::from_bytes(b"some key material").unwrap();
        assert_eq!(key.size(), 17);
        assert_eq!(key.bits(), 136);
        assert_eq!(key.to_vec().unwrap(), b"some key material");
    }

    #[test]
    fn test_export_buffer_too_small() {
        let key = GenericSecretKey::from_bytes(&[7u8; 32]).unwrap();
        let mut small = [0u8; 16];
        let result = key.to_bytes(Some(&mut small));
        assert_eq!(result, Err(CryptoError::AesBufferTooSmall));
    }
}
