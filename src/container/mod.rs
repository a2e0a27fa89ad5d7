// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Encrypted container façade.
//!
//! Stores data encrypted with AES-256 in CFB mode. To detect tampering,
//! the HMAC-SHA1 of the *plaintext* is computed and stored alongside the
//! ciphertext; it is verified on every decode. The MAC-over-plaintext
//! composition is an inherited wire-format property kept for
//! compatibility with existing stored containers.
//!
//! The container is the DER structure
//!
//! ```text
//! Container ::= SEQUENCE {
//!     version      INTEGER,      -- must be 0
//!     cipherText   OCTET STRING,
//!     hmac         OCTET STRING  -- 20 bytes
//! }
//! ```

use zeroize::Zeroize;

use super::*;

mod record;

pub use record::*;

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = AES_KEY_SIZE;

/// Cipher block size in bytes; also the initialization vector size.
pub const CIPHER_BLOCK_SIZE: usize = AES_BLOCK_SIZE;

/// Recommended HMAC secret size.
///
/// In practice any salt with positive size is accepted.
pub const RECOMMENDED_SALT_SIZE: usize = 24;

/// Container format version produced and accepted by this library.
pub(crate) const CONTAINER_VERSION: i32 = 0;

/// Encrypt-and-authenticate container over AES-256-CFB and HMAC-SHA1.
///
/// The constructors copy all key material defensively, so callers can
/// wipe their buffers as soon as construction returns. [`destroy`]
/// (Self::destroy) zeroes the internal key and IV copies; dropping the
/// container does the same.
pub struct AesContainer {
    key: AesKey,
    iv: [u8; CIPHER_BLOCK_SIZE],
    salt: HmacKey,
}

impl AesContainer {
    /// Creates a container from separate key, IV and HMAC salt buffers.
    ///
    /// Oversized `key`/`iv` buffers are truncated to [`KEY_SIZE`] and
    /// [`CIPHER_BLOCK_SIZE`] bytes respectively.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::ContainerInvalidKeyMaterial` if the key is
    /// shorter than [`KEY_SIZE`], the IV shorter than
    /// [`CIPHER_BLOCK_SIZE`], or the salt empty.
    pub fn new(key: &[u8], iv: &[u8], hmac_salt: &[u8]) -> Result<Self, CryptoError> {
        if key.len() < KEY_SIZE || iv.len() < CIPHER_BLOCK_SIZE || hmac_salt.is_empty() {
            tracing::error!(
                key_len = key.len(),
                iv_len = iv.len(),
                salt_len = hmac_salt.len(),
                "invalid container key material"
            );
            return Err(CryptoError::ContainerInvalidKeyMaterial);
        }

        let mut iv_copy = [0u8; CIPHER_BLOCK_SIZE];
        iv_copy.copy_from_slice(&iv[..CIPHER_BLOCK_SIZE]);

        Ok(Self {
            key: AesKey::from_bytes(&key[..KEY_SIZE])?,
            iv: iv_copy,
            salt: HmacKey::from_bytes(hmac_salt)?,
        })
    }

    /// Creates a container from a single key-material buffer.
    ///
    /// The buffer is carved as `[0..KEY_SIZE)` symmetric key,
    /// `[KEY_SIZE..KEY_SIZE+CIPHER_BLOCK_SIZE)` IV, and the remainder
    /// (at least one byte) HMAC salt, so the minimum length is
    /// `KEY_SIZE + CIPHER_BLOCK_SIZE + 1`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::ContainerInvalidKeyMaterial` if the buffer is
    /// too short.
    pub fn from_key_material(key_material: &[u8]) -> Result<Self, CryptoError> {
        const CARVE: usize = KEY_SIZE + CIPHER_BLOCK_SIZE;

        if key_material.len() <= CARVE {
            tracing::error!(
                len = key_material.len(),
                minimum = CARVE + 1,
                "container key material too short"
            );
            return Err(CryptoError::ContainerInvalidKeyMaterial);
        }

        Self::new(
            &key_material[..KEY_SIZE],
            &key_material[KEY_SIZE..CARVE],
            &key_material[CARVE..],
        )
    }

    /// Encrypts plaintext and encodes it into a container blob.
    ///
    /// # Errors
    ///
    /// * `CryptoError::ContainerEmptyInput` - `text` is empty
    /// * `CryptoError::CfbEncryptError` - encryption failed
    pub fn encode(&self, text: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if text.is_empty() {
            return Err(CryptoError::ContainerEmptyInput);
        }

        let mut cfb = AesCfbAlgo::with_iv(&self.iv)?;
        let secret_text = Encrypter::encrypt_vec(&mut cfb, &self.key, text)?;

        let mut hmac = HmacAlgo::new(HashAlgo::sha1());
        let digest = Signer::sign_vec(&mut hmac, &self.salt, text)?;

        let mut encoder = DerEncoder::new();
        encoder.append_int(CONTAINER_VERSION);
        encoder.append_octet_string(Some(&secret_text));
        encoder.append_octet_string(Some(&digest));
        Ok(encoder.encode())
    }

    /// Parses a container blob, decrypts it and verifies the plaintext.
    ///
    /// # Errors
    ///
    /// * `CryptoError::ContainerEmptyInput` - `secret` is empty
    /// * `CryptoError::ContainerMalformed` - the blob does not parse or
    ///   its version is not 0
    /// * `CryptoError::CfbDecryptError` - decryption failed
    /// * `CryptoError::ContainerHmacMismatch` - the stored HMAC does not
    ///   match the recovered plaintext
    pub fn decode(&self, secret: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if secret.is_empty() {
            return Err(CryptoError::ContainerEmptyInput);
        }

        let record = ContainerRecord::parse(secret)?;

        let mut cfb = AesCfbAlgo::with_iv(&self.iv)?;
        let text = Decrypter::decrypt_vec(&mut cfb, &self.key, record.cipher_text())?;

        let mut hmac = HmacAlgo::new(HashAlgo::sha1());
        if !Verifier::verify(&mut hmac, &self.salt, &text, record.hmac())? {
            tracing::error!("container HMAC verification failed");
            return Err(CryptoError::ContainerHmacMismatch);
        }

        Ok(text)
    }

    /// Overwrites the internal key and IV copies with zeros.
    ///
    /// Recommended as soon as the container is no longer needed; dropping
    /// the container does the same.
    pub fn destroy(&mut self) {
        self.key.zeroize();
        self.iv.zeroize();
    }
}

impl Drop for AesContainer {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests;
