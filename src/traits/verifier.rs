// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Signature (MAC) verification wrapper.

use super::*;

/// Signature verification wrapper.
///
/// Provides a unified entry point for [`VerifyOp`] implementations.
pub struct Verifier;

impl Verifier {
    /// Verifies a signature over the provided data.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the signature is valid, `Ok(false)` if invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying operation fails. An invalid
    /// signature is reported as `Ok(false)`, not as an error.
    pub fn verify<Algo: VerifyOp>(
        algo: &mut Algo,
        key: &Algo::Key,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        algo.verify(key, data, signature)
    }
}
