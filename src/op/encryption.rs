// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Traits for encryption, decryption and raw block processing.
//!
//! [`EncryptOp`] and [`DecryptOp`] cover complete messages in a single
//! call. [`BlockCipherOp`] is the lower seam a cipher mode drives: a bare
//! block transform with an explicit key schedule lifecycle. Modes are
//! generic over it so the mode/engine pair monomorphizes with no indirect
//! call in the block loop.

use super::*;

/// Direction a cipher engine is initialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// Encrypt
    Encrypt,

    /// Decrypt
    Decrypt,
}

/// Trait for single-operation encryption.
pub trait EncryptOp {
    /// The secret key type used for this encryption operation.
    type Key: EncryptionKey;

    /// Encrypts data in a single operation.
    ///
    /// # Arguments
    ///
    /// * `key` - The secret key to use
    /// * `input` - Plaintext to encrypt
    /// * `output` - Optional output buffer. If `None`, only calculates required size.
    ///
    /// # Returns
    ///
    /// The number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small, the input is
    /// invalid, or the underlying cryptographic operation fails.
    fn encrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError>;
}

/// Trait for single-operation decryption.
pub trait DecryptOp {
    /// The secret key type used for this decryption operation.
    type Key: DecryptionKey;

    /// Decrypts data in a single operation.
    ///
    /// # Arguments
    ///
    /// * `key` - The secret key to use
    /// * `input` - Ciphertext to decrypt
    /// * `output` - Optional output buffer. If `None`, only calculates required size.
    ///
    /// # Returns
    ///
    /// The number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small, the input is
    /// invalid, or the underlying cryptographic operation fails.
    fn decrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError>;
}

/// Trait for a raw block-cipher engine.
///
/// An engine holds a key schedule computed by [`init`](Self::init) and
/// transforms exactly one block per [`process_block`](Self::process_block)
/// call. Cipher modes own the feedback/chaining logic and drive the engine
/// block by block.
pub trait BlockCipherOp {
    /// The secret key type the engine schedules.
    type Key: SymmetricKey;

    /// Computes the key schedule for the given direction.
    ///
    /// May be called again at any time to re-key or change direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid for this engine.
    fn init(&mut self, mode: CipherMode, key: &Self::Key) -> Result<(), CryptoError>;

    /// Returns the engine's block size in bytes.
    fn block_size(&self) -> usize;

    /// Transforms one block: reads `block_size()` bytes from `input` and
    /// writes `block_size()` transformed bytes to `output`.
    ///
    /// # Returns
    ///
    /// The number of bytes processed (the block size).
    ///
    /// # Errors
    ///
    /// Returns an error if the engine has not been initialized or either
    /// buffer is shorter than one block.
    fn process_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CryptoError>;

    /// Resets any per-message engine state.
    ///
    /// The key schedule survives a reset. For stateless engines this is a
    /// no-op retained so modes can express intent.
    fn reset(&mut self);
}
