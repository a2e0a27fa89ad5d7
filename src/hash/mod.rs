// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Cryptographic hash function implementations.
//!
//! This module provides SHA-1 and SHA-256 as pure-Rust implementations
//! behind a unified [`HashAlgo`] interface with one-shot and streaming
//! operation modes.
//!
//! # Security Considerations
//!
//! - **SHA-1**: cryptographically broken as a collision-resistant hash;
//!   provided because the container's HMAC profile requires it (HMAC-SHA1
//!   remains a sound PRF)
//! - **SHA-256**: currently secure for cryptographic applications

use super::*;

mod sha1;
mod sha256;

use sha1::Sha1State;
use sha256::Sha256State;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HashKind {
    Sha1,
    Sha256,
}

/// A hash algorithm selector providing one-shot and streaming hashing.
///
/// Construct with [`HashAlgo::sha1`] or [`HashAlgo::sha256`], then either
/// call [`HashOp::hash`] for complete data or [`hash_init`](Self::hash_init)
/// for a streaming context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashAlgo {
    kind: HashKind,
}

impl HashAlgo {
    /// SHA-1 (160-bit digest).
    pub fn sha1() -> Self {
        Self {
            kind: HashKind::Sha1,
        }
    }

    /// SHA-256 (256-bit digest).
    pub fn sha256() -> Self {
        Self {
            kind: HashKind::Sha256,
        }
    }

    /// Returns the size of the digest in bytes.
    pub fn digest_size(&self) -> usize {
        match self.kind {
            HashKind::Sha1 => 20,
            HashKind::Sha256 => 32,
        }
    }

    /// Returns the input block size of the hash algorithm in bytes.
    pub fn block_size(&self) -> usize {
        match self.kind {
            HashKind::Sha1 => 64,
            HashKind::Sha256 => 64,
        }
    }

    /// Initializes a streaming hash context.
    pub fn hash_init(&self) -> HashAlgoContext {
        let state = match self.kind {
            HashKind::Sha1 => ContextState::Sha1(Sha1State::new()),
            HashKind::Sha256 => ContextState::Sha256(Sha256State::new()),
        };
        HashAlgoContext {
            algo: *self,
            state,
        }
    }
}

impl HashOp for HashAlgo {
    fn hash(&mut self, data: &[u8], output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let mut context = self.hash_init();
        context.update(data);
        context.finish(output)
    }
}

#[derive(Clone)]
enum ContextState {
    Sha1(Sha1State),
    Sha256(Sha256State),
}

/// Streaming hash context.
///
/// Created by [`HashAlgo::hash_init`]. Feed data with
/// [`update`](Self::update), then extract the digest with
/// [`finish`](Self::finish). A context can be cloned to snapshot the
/// running state.
#[derive(Clone)]
pub struct HashAlgoContext {
    algo: HashAlgo,
    state: ContextState,
}

impl HashAlgoContext {
    /// Processes a chunk of data.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            ContextState::Sha1(state) => state.update(data),
            ContextState::Sha256(state) => state.update(data),
        }
    }

    /// Finalizes the hash and writes the digest.
    ///
    /// The context itself is left untouched, so the digest of a prefix can
    /// be taken while continuing to feed data.
    ///
    /// # Returns
    ///
    /// The number of bytes written to the output buffer, or the required
    /// buffer size if `output` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::HashBufferTooSmall` if the provided buffer
    /// cannot hold the digest.
    pub fn finish(&self, output: Option<&mut [u8]>) -> Result<usize, CryptoError> {
        let digest_size = self.algo.digest_size();
        if let Some(output) = output {
            if output.len() < digest_size {
                return Err(CryptoError::HashBufferTooSmall);
            }
            match &self.state {
                ContextState::Sha1(state) => {
                    output[..digest_size].copy_from_slice(&state.clone().finalize());
                }
                ContextState::Sha256(state) => {
                    output[..digest_size].copy_from_slice(&state.clone().finalize());
                }
            }
        }
        Ok(digest_size)
    }

    /// Finalizes the hash and returns the digest as a vector.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`finish`](Self::finish).
    pub fn finish_vec(&self) -> Result<Vec<u8>, CryptoError> {
        let required_size = self.finish(None)?;
        let mut output = vec![0u8; required_size];
        let written_size = self.finish(Some(&mut output))?;
        output.truncate(written_size);
        Ok(output)
    }

    /// Returns the algorithm this context hashes with.
    pub fn algo(&self) -> &HashAlgo {
        &self.algo
    }
}

#[cfg(test)]
mod tests;
