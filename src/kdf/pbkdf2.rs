// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! PBKDF2 implementation (PKCS #5 v2.0, RFC 2898).
//!
//! Stretches a passphrase through `c` HMAC iterations with a salt to
//! produce key material of arbitrary length. The PRF is HMAC over a
//! configurable hash algorithm; the passphrase keys the HMAC once per
//! derivation and the context is reset, not re-keyed, between iterations.
//!
//! Default parameters (HMAC-SHA1, 10000 iterations, a fixed 16-byte salt)
//! are part of the stored-container compatibility surface and must not
//! change.

use zeroize::Zeroize;

use super::*;

/// PBKDF2 operation provider.
///
/// Carries the derivation parameters (hash algorithm, salt, iteration
/// count); the passphrase is supplied per [`derive`](DeriveOp::derive)
/// call. Parameters may be changed between derivations; invalid values
/// fall back to the defaults.
pub struct Pbkdf2Algo {
    hash: HashAlgo,
    salt: Vec<u8>,
    iterations: u32,
}

impl Pbkdf2Algo {
    /// Default iteration count.
    pub const DEFAULT_ITERATIONS: u32 = 10000;

    /// Default salt.
    ///
    /// Fixed 16-byte value baked into previously produced derivations;
    /// preserved bit-for-bit for compatibility.
    pub const DEFAULT_SALT: [u8; 16] = [
        0x79, 0xc0, 0x5b, 0x84, 0xb7, 0xa8, 0x9e, 0x10, 0x78, 0xdc, 0x35, 0x05, 0xbd, 0x34, 0x6b,
        0x23,
    ];

    /// Default PRF hash algorithm (SHA-1).
    pub fn default_hash() -> HashAlgo {
        HashAlgo::sha1()
    }

    /// Creates a PBKDF2 provider with the given parameters.
    ///
    /// An empty salt or a zero iteration count is replaced by the
    /// corresponding default.
    pub fn new(hash: HashAlgo, salt: &[u8], iterations: u32) -> Self {
        let mut algo = Self {
            hash,
            salt: Vec::new(),
            iterations: 0,
        };
        algo.set_salt(salt);
        algo.set_iterations(iterations);
        algo
    }

    /// The PRF hash algorithm in use.
    pub fn hash(&self) -> HashAlgo {
        self.hash
    }

    /// The salt in use.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// The iteration count in use.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Replaces the PRF hash algorithm.
    pub fn set_hash(&mut self, hash: HashAlgo) {
        self.hash = hash;
    }

    /// Replaces the salt; an empty one is replaced by the default.
    pub fn set_salt(&mut self, salt: &[u8]) {
        if salt.is_empty() {
            self.salt = Self::DEFAULT_SALT.to_vec();
        } else {
            self.salt = salt.to_vec();
        }
    }

    /// Replaces the iteration count; zero is replaced by the default.
    pub fn set_iterations(&mut self, iterations: u32) {
        if iterations == 0 {
            self.iterations = Self::DEFAULT_ITERATIONS;
        } else {
            self.iterations = iterations;
        }
    }
}

impl Default for Pbkdf2Algo {
    /// The compatibility defaults: HMAC-SHA1, 10000 iterations, the fixed
    /// salt.
    fn default() -> Self {
        Self::new(
            Self::default_hash(),
            &Self::DEFAULT_SALT,
            Self::DEFAULT_ITERATIONS,
        )
    }
}

impl DeriveOp for Pbkdf2Algo {
    type Key = GenericSecretKey;
    type DerivedKey = GenericSecretKey;

    /// Derives `derive_len` bytes from the passphrase (RFC 2898 §5.2).
    ///
    /// `T_i = U_1 XOR ... XOR U_c` with `U_1 = PRF(P, S || INT32BE(i))`
    /// and `U_j = PRF(P, U_{j-1})`; the output is the concatenation of the
    /// `T_i`, truncated to `derive_len`.
    ///
    /// # Errors
    ///
    /// * `CryptoError::Pbkdf2EmptyPassphrase` - the passphrase is empty
    /// * `CryptoError::Pbkdf2InvalidDerivedKeyLength` - `derive_len` is zero
    /// * `CryptoError::Pbkdf2EmptySalt` - the salt is empty
    fn derive(&self, key: &Self::Key, derive_len: usize) -> Result<Self::DerivedKey, CryptoError> {
        if key.size() == 0 {
            return Err(CryptoError::Pbkdf2EmptyPassphrase);
        }
        if derive_len == 0 {
            return Err(CryptoError::Pbkdf2InvalidDerivedKeyLength);
        }
        if self.salt.is_empty() {
            return Err(CryptoError::Pbkdf2EmptySalt);
        }

        // The passphrase keys the HMAC once; the context is reset between
        // PRF invocations.
        let hmac_key = HmacKey::try_from(key)?;
        let hmac = HmacAlgo::new(self.hash);
        let mut prf = hmac.sign_init(&hmac_key)?;

        let hash_size = self.hash.digest_size();
        let rounds = derive_len.div_ceil(hash_size);
        let mut derived = vec![0u8; derive_len];

        for round in 0..rounds {
            // U_1 = PRF(P, S || INT32BE(i)), i is 1-indexed
            prf.reset();
            prf.update(&self.salt);
            prf.update(&((round + 1) as u32).to_be_bytes());
            let mut u = prf.finish_vec()?;

            let mut t = u.clone();
            for _ in 1..self.iterations {
                prf.reset();
                prf.update(&u);
                prf.finish(Some(&mut u))?;
                for (acc, byte) in t.iter_mut().zip(&u) {
                    *acc ^= byte;
                }
            }

            let start = round * hash_size;
            let len = (derive_len - start).min(hash_size);
            derived[start..start + len].copy_from_slice(&t[..len]);

            u.zeroize();
            t.zeroize();
        }

        let derived_key = GenericSecretKey::from_bytes(&derived);
        derived.zeroize();
        derived_key
    }
}
