// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Hash computation wrapper.

use super::*;

/// Hash computation wrapper.
///
/// Provides a unified entry point for [`HashOp`] implementations.
pub struct Hasher;

impl Hasher {
    /// Computes a hash over the provided data.
    ///
    /// # Returns
    ///
    /// The number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output buffer is too small.
    pub fn hash<Algo: HashOp>(
        algo: &mut Algo,
        data: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        algo.hash(data, output)
    }

    /// Computes a hash and returns it as a new vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying operation fails.
    pub fn hash_vec<Algo: HashOp>(algo: &mut Algo, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let required_size = algo.hash(data, None)?;
        let mut output = vec![0u8; required_size];
        let written_size = algo.hash(data, Some(&mut output))?;
        output.truncate(written_size);
        Ok(output)
    }
}
