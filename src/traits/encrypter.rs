// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Encryption operation wrapper.

use super::*;

/// Encryption operation wrapper.
///
/// Provides a unified entry point for [`EncryptOp`] implementations.
pub struct Encrypter;

impl Encrypter {
    /// Performs single-operation encryption.
    ///
    /// # Returns
    ///
    /// The number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small or the
    /// underlying cryptographic operation fails.
    pub fn encrypt<Algo: EncryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.encrypt(key, input, output)
    }

    /// Performs single-operation encryption and returns the result as a
    /// new vector.
    ///
    /// Queries the required size, allocates, then encrypts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying cryptographic operation fails.
    pub fn encrypt_vec<Algo: EncryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let required_size = algo.encrypt(key, input, None)?;
        let mut output = vec![0u8; required_size];
        let written_size = algo.encrypt(key, input, Some(&mut output))?;
        output.truncate(written_size);
        Ok(output)
    }
}
