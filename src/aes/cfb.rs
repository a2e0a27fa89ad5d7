// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Cipher Feedback (CFB) mode with full-block feedback width.
//!
//! CFB turns a block cipher into a self-synchronizing stream cipher: each
//! keystream block is the forward transform of the previous ciphertext
//! block (the IV for the first), XORed into the data. Output length always
//! equals input length; the final block may be short and no padding is
//! used.
//!
//! The driver is generic over [`BlockCipherOp`] so the mode/engine pair
//! monomorphizes. Every top-level `encrypt`/`decrypt` call restarts from
//! the IV; no feedback state is carried between calls.

use zeroize::Zeroize;

use super::*;

/// CFB mode driver over a block-cipher engine.
///
/// Construction validates the IV against the engine's block size. The IV
/// is immutable afterwards; the key is supplied per operation.
pub struct CfbAlgo<E: BlockCipherOp> {
    engine: E,
    iv: Vec<u8>,
}

/// CFB-128 over the AES-256 engine.
pub type AesCfbAlgo = CfbAlgo<AesEngine>;

impl AesCfbAlgo {
    /// Creates an AES-256 CFB driver from a 16-byte IV.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::CfbInvalidIvSize` if the IV is not one AES
    /// block long.
    pub fn with_iv(iv: &[u8]) -> Result<Self, CryptoError> {
        CfbAlgo::new(AesEngine::default(), iv)
    }
}

impl<E: BlockCipherOp> CfbAlgo<E> {
    /// Creates a CFB driver from an engine and an IV.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::CfbInvalidIvSize` if the IV length does not
    /// equal the engine's block size.
    pub fn new(engine: E, iv: &[u8]) -> Result<Self, CryptoError> {
        if engine.block_size() == 0 || iv.len() != engine.block_size() {
            return Err(CryptoError::CfbInvalidIvSize);
        }
        Ok(Self {
            engine,
            iv: iv.to_vec(),
        })
    }

    /// Shared body of encrypt and decrypt.
    ///
    /// The two directions differ only in where the feedback register is
    /// reloaded from: the XOR output when encrypting, the raw input when
    /// decrypting. `feedback_from_input` selects the latter. The engine is
    /// initialized for *encryption* in both cases: CFB applies the forward
    /// transform to the feedback register in both directions.
    fn process(
        &mut self,
        key: &E::Key,
        input: &[u8],
        output: &mut [u8],
        feedback_from_input: bool,
    ) -> Result<(), CryptoError> {
        self.engine.init(CipherMode::Encrypt, key)?;
        self.engine.reset();

        let block_size = self.engine.block_size();
        let mut feedback = self.iv.clone();
        let mut keystream = vec![0u8; block_size];

        let mut offset = 0;
        for chunk in input.chunks(block_size) {
            self.engine.process_block(&feedback, &mut keystream)?;

            for (j, (&data, &pad)) in chunk.iter().zip(keystream.iter()).enumerate() {
                output[offset + j] = data ^ pad;
            }

            // the tail of the register stays untouched on a short final
            // block; processing ends after it anyway
            let source = if feedback_from_input {
                &input[offset..offset + chunk.len()]
            } else {
                &output[offset..offset + chunk.len()]
            };
            feedback[..chunk.len()].copy_from_slice(source);
            offset += chunk.len();
        }

        keystream.zeroize();
        Ok(())
    }
}

impl<E: BlockCipherOp> EncryptOp for CfbAlgo<E>
where
    E::Key: EncryptionKey,
{
    type Key = E::Key;

    /// Encrypts `input`, producing exactly `input.len()` ciphertext bytes.
    ///
    /// # Errors
    ///
    /// * `CryptoError::CfbEmptyInput` - `input` is empty
    /// * `CryptoError::CfbBufferTooSmall` - `output` is shorter than `input`
    /// * `CryptoError::CfbEncryptError` - the engine failed
    fn encrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        if input.is_empty() {
            return Err(CryptoError::CfbEmptyInput);
        }
        if let Some(output) = output {
            if output.len() < input.len() {
                return Err(CryptoError::CfbBufferTooSmall);
            }
            self.process(key, input, output, false).map_err(|e| {
                tracing::error!(error = ?e, "CFB encryption failed");
                CryptoError::CfbEncryptError
            })?;
        }
        Ok(input.len())
    }
}

impl<E: BlockCipherOp> DecryptOp for CfbAlgo<E>
where
    E::Key: DecryptionKey,
{
    type Key = E::Key;

    /// Decrypts `input`, producing exactly `input.len()` plaintext bytes.
    ///
    /// The underlying engine runs its *forward* transform here as well;
    /// see [`CfbAlgo::process`].
    ///
    /// # Errors
    ///
    /// * `CryptoError::CfbEmptyInput` - `input` is empty
    /// * `CryptoError::CfbBufferTooSmall` - `output` is shorter than `input`
    /// * `CryptoError::CfbDecryptError` - the engine failed
    fn decrypt(
        &mut self,
        key: &Self::Key,
        input: &[u8],
        output: Option<&mut [u8]>,
    ) -> Result<usize, CryptoError> {
        if input.is_empty() {
            return Err(CryptoError::CfbEmptyInput);
        }
        if let Some(output) = output {
            if output.len() < input.len() {
                return Err(CryptoError::CfbBufferTooSmall);
            }
            self.process(key, input, output, true).map_err(|e| {
                tracing::error!(error = ?e, "CFB decryption failed");
                CryptoError::CfbDecryptError
            })?;
        }
        Ok(input.len())
    }
}
