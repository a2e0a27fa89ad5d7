// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Decryption operation wrapper.

use super::*;

/// Decryption operation wrapper.
///
/// Provides a unified entry point for [`DecryptOp`] implementations.
pub struct Decrypter;

impl Decrypter {
    /// Performs single-operation decryption.
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
    pub fn decrypt<Algo: DecryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.decrypt(key, input, output)
    }

    /// Performs single-operation decryption and returns the result as a
    /// new vector.
    ///
    /// Queries the required size, allocates, then decrypts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying cryptographic operation fails.
    pub fn decrypt_vec<Algo: DecryptOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        input: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let required_size = algo.decrypt(key, input, None)?;
        let mut output = vec![0u8; required_size];
        let written_size = algo.decrypt(key, input, Some(&mut output))?;
        output.truncate(written_size);
        Ok(output)
    }
}
