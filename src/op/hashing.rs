// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Trait for hash operations.

use super::*;

/// Trait for single-operation hashing.
pub trait HashOp {
    /// Hashes data in a single operation.
    ///
    /// # Arguments
    ///
    /// * `data` - The data to hash
    /// * `output` - Optional output buffer. If `None`, only calculates required size.
    ///
    /// # Returns
    ///
    /// The number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small.
    fn hash(&mut self, data: &[u8], output: Option<&mut [u8]>) -> Result<usize, CryptoError>;
}
