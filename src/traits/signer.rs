// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Signature (MAC) creation wrapper.

use super::*;

/// Signature creation wrapper.
///
/// Provides a unified entry point for [`SignOp`] implementations.
pub struct Signer;

impl Signer {
    /// Creates a signature over the provided data.
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
    pub fn sign<Algo: SignOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        data: &[u8],
        signature: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.sign(key, data, signature)
    }

    /// Creates a signature and returns it as a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying operation fails.
    pub fn sign_vec<Algo: SignOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let required_size = algo.sign(key, data, None)?;
        let mut signature = vec![0u8; required_size];
        let written_size = algo.sign(key, data, Some(&mut signature))?;
        signature.truncate(written_size);
        Ok(signature)
    }
}
