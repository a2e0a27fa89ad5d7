// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Trait for key derivation operations.

use super::*;

/// Trait for key derivation.
pub trait DeriveOp {
    /// The input key type to derive from.
    type Key: DerivationKey;

    /// The derived key type produced.
    type DerivedKey;

    /// Derives `derive_len` bytes of key material from the input key.
    ///
    /// # Errors
    ///
    /// Returns an error if the input key or requested length is invalid, or
    /// if the underlying PRF fails.
    fn derive(&self, key: &Self::Key, derive_len: usize) -> Result<Self::DerivedKey, CryptoError>;
}
