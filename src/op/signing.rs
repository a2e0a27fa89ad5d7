// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Traits for MAC creation and verification.

use super::*;

/// Trait for single-operation signature (MAC) creation.
pub trait SignOp {
    /// The key type used for this signing operation.
    type Key: SigningKey;

    /// Creates a signature over the provided data.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to sign with
    /// * `data` - The data to sign
    /// * `signature` - Optional output buffer. If `None`, only calculates required size.
    ///
    /// # Returns
    ///
    /// The number of bytes written to the signature buffer, or the required
    /// buffer size if `signature` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature buffer is too small or the
    /// underlying operation fails.
    fn sign(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError>;
}

/// Trait for single-operation signature (MAC) verification.
pub trait VerifyOp {
    /// The key type used for this verification operation.
    type Key: VerificationKey;

    /// Verifies a signature over the provided data.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the signature is valid, `Ok(false)` if invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying operation fails. An invalid
    /// signature is not an error.
    fn verify(
        &mut self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError>;
}
