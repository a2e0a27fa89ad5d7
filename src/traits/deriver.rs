// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Key derivation wrapper.

use super::*;

/// Key derivation wrapper.
///
/// Provides a unified entry point for [`DeriveOp`] implementations.
pub struct Deriver;

impl Deriver {
    /// Derives key material from an input key.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the underlying
    /// PRF fails.
    pub fn derive<Algo: DeriveOp>(
        algo: &Algo,
        key: &Algo::Key,
        derive_len: usize,
    ) -> Result<Algo::DerivedKey, CryptoError> {
        algo.derive(key, derive_len)
    }
}
