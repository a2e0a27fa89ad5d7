// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Authenticated encrypted container library.
//!
//! This crate stores arbitrary plaintext as an authenticated, encrypted
//! binary blob (the "container") and recovers the plaintext from such a
//! blob on a host holding the correct key material. It includes:
//!
//! - **AES-256**: the FIPS 197 block transform with a 256-bit key
//! - **CFB**: cipher-feedback mode turning the block cipher into a
//!   padding-free stream cipher
//! - **HMAC**: message authentication over SHA-1 and SHA-256
//! - **PBKDF2**: password-based key derivation (RFC 2898)
//! - **DER**: encoding/decoding of the container's ASN.1 wire format
//!
//! The container façade ([`AesContainer`]) composes these: plaintext is
//! encrypted with AES-256-CFB, authenticated with HMAC-SHA1, and packed
//! into a DER `SEQUENCE { version, ciphertext, hmac }`.
//!
//! All primitives are implemented in pure Rust; callers supply key
//! material as bytes and receive bytes back. Secret-bearing types zero
//! their storage on drop.

mod aes;
mod container;
mod der;
mod hash;
mod hmac;
mod kdf;
mod secret;

mod op;
mod traits;

pub use aes::*;
pub use container::*;
pub use der::*;
pub use hash::*;
pub use hmac::*;
pub use kdf::*;
pub use op::*;
pub use secret::*;
use thiserror::Error;
pub use traits::*;

/// Comprehensive error type for all cryptographic operations.
///
/// This enum covers errors from AES encryption/decryption, CFB mode,
/// hashing, HMAC, PBKDF2, DER encoding/decoding, and the container
/// façade.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CryptoError {
    // AES-related errors
    /// AES key size is invalid for the specified algorithm.
    #[error("AES invalid key size")]
    AesInvalidKeySize,
    /// AES engine used before its key schedule was initialized.
    #[error("AES engine not initialized")]
    AesNotInitialized,
    /// AES input size is invalid (not a full block).
    #[error("AES invalid input size")]
    AesInvalidInputSize,
    /// Output buffer is too small for AES operation.
    #[error("AES buffer too small")]
    AesBufferTooSmall,

    // CFB mode errors
    /// CFB initialization vector does not match the cipher block size.
    #[error("CFB invalid IV size")]
    CfbInvalidIvSize,
    /// CFB operation was given no input.
    #[error("CFB empty input")]
    CfbEmptyInput,
    /// Output buffer is too small for CFB operation.
    #[error("CFB buffer too small")]
    CfbBufferTooSmall,
    /// CFB encryption failed.
    #[error("CFB encryption failed")]
    CfbEncryptError,
    /// CFB decryption failed.
    #[error("CFB decryption failed")]
    CfbDecryptError,

    // Hash-related errors
    /// Output buffer is too small to hold the hash result.
    #[error("Hash buffer too small")]
    HashBufferTooSmall,

    // HMAC-related errors
    /// Output buffer is too small to hold HMAC signature.
    #[error("HMAC signature buffer too small")]
    HmacSignatureBufferTooSmall,
    /// HMAC key import failed.
    #[error("HMAC key import failed")]
    HmacKeyImportError,

    // PBKDF2 errors
    /// PBKDF2 passphrase is empty.
    #[error("PBKDF2 empty passphrase")]
    Pbkdf2EmptyPassphrase,
    /// PBKDF2 salt is empty.
    #[error("PBKDF2 empty salt")]
    Pbkdf2EmptySalt,
    /// PBKDF2 requested derived key length is zero.
    #[error("PBKDF2 invalid derived key length")]
    Pbkdf2InvalidDerivedKeyLength,

    // DER encoding/decoding errors
    /// DER element carries an unexpected ASN.1 tag.
    #[error("DER unexpected tag")]
    DerUnexpectedTag,
    /// DER structure is truncated (tag, length, or payload overruns input).
    #[error("DER truncated input")]
    DerTruncated,
    /// DER length field is malformed.
    #[error("DER invalid length")]
    DerInvalidLength,
    /// DER INTEGER payload exceeds the supported 4-byte profile.
    #[error("DER integer too large")]
    DerIntegerTooLarge,

    // Container errors
    /// Container key material is missing or undersized.
    #[error("Container invalid key material")]
    ContainerInvalidKeyMaterial,
    /// Container operation was given no input.
    #[error("Container empty input")]
    ContainerEmptyInput,
    /// Container blob does not parse as a valid structure, or its version
    /// is not 0 (the only defined version).
    #[error("Container malformed")]
    ContainerMalformed,
    /// Stored HMAC does not match the HMAC of the recovered plaintext.
    #[error("Container HMAC verification failed")]
    ContainerHmacMismatch,
}
