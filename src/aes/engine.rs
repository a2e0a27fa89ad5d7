// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! AES-256 block engine (FIPS 197).
//!
//! A straightforward byte-oriented rendering of the cipher: the state is
//! the 16-byte block laid out column-major (`state[4*col + row]`), the
//! S-boxes are derived at compile time from the GF(2^8) inversion and
//! affine map that define them, and the round loop follows the standard
//! directly. Correctness, not constant-time execution, is the contract
//! here.

use super::*;

/// Number of rounds for a 256-bit key.
const ROUNDS: usize = 14;

/// Key schedule length in 32-bit words: 4 * (rounds + 1).
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

/// Key length in 32-bit words.
const KEY_WORDS: usize = AES_KEY_SIZE / 4;

/// Multiplication in GF(2^8) modulo the AES polynomial x^8+x^4+x^3+x+1.
const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut bit = 0;
    while bit < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
        bit += 1;
    }
    product
}

/// Multiplicative inverse in GF(2^8), with 0 mapped to 0.
///
/// Computed as x^254 = x^2 * x^4 * ... * x^128 by repeated squaring.
const fn gf_inv(x: u8) -> u8 {
    let mut result = 1u8;
    let mut power = x;
    let mut k = 0;
    while k < 8 {
        if k > 0 {
            result = gf_mul(result, power);
        }
        power = gf_mul(power, power);
        k += 1;
    }
    result
}

const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        let b = gf_inv(x as u8);
        // affine transform: b ^ (b <<< 1) ^ (b <<< 2) ^ (b <<< 3) ^ (b <<< 4) ^ 0x63
        sbox[x] = b
            ^ b.rotate_left(1)
            ^ b.rotate_left(2)
            ^ b.rotate_left(3)
            ^ b.rotate_left(4)
            ^ 0x63;
        x += 1;
    }
    sbox
}

const fn build_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        inv[sbox[x] as usize] = x as u8;
        x += 1;
    }
    inv
}

const fn build_rcon() -> [u8; ROUNDS / 2] {
    let mut rcon = [0u8; ROUNDS / 2];
    let mut value = 1u8;
    let mut i = 0;
    while i < rcon.len() {
        rcon[i] = value;
        value = gf_mul(value, 2);
        i += 1;
    }
    rcon
}

const SBOX: [u8; 256] = build_sbox();
const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);
const RCON: [u8; ROUNDS / 2] = build_rcon();

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(|b| SBOX[b as usize]))
}

/// AES-256 block engine.
///
/// Holds the expanded round-key schedule computed by
/// [`init`](BlockCipherOp::init) and transforms one 16-byte block per
/// [`process_block`](BlockCipherOp::process_block) call. The direction is
/// fixed at `init` time. The schedule is zeroized on drop.
pub struct AesEngine {
    round_keys: [u32; SCHEDULE_WORDS],
    mode: Option<CipherMode>,
}

impl Default for AesEngine {
    fn default() -> Self {
        Self {
            round_keys: [0u32; SCHEDULE_WORDS],
            mode: None,
        }
    }
}

impl Drop for AesEngine {
    fn drop(&mut self) {
        self.round_keys.zeroize();
        self.mode = None;
    }
}

impl AesEngine {
    /// FIPS 197 §5.2 key expansion for Nk = 8.
    fn expand_key(&mut self, key: &[u8]) {
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            self.round_keys[i] = u32::from_be_bytes(chunk.try_into().expect("4-byte chunk"));
        }
        for i in KEY_WORDS..SCHEDULE_WORDS {
            let mut temp = self.round_keys[i - 1];
            if i % KEY_WORDS == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ ((RCON[i / KEY_WORDS - 1] as u32) << 24);
            } else if i % KEY_WORDS == 4 {
                temp = sub_word(temp);
            }
            self.round_keys[i] = self.round_keys[i - KEY_WORDS] ^ temp;
        }
    }

    fn add_round_key(&self, state: &mut [u8; AES_BLOCK_SIZE], round: usize) {
        for col in 0..4 {
            let word = self.round_keys[4 * round + col].to_be_bytes();
            for row in 0..4 {
                state[4 * col + row] ^= word[row];
            }
        }
    }

    fn encrypt_block(&self, state: &mut [u8; AES_BLOCK_SIZE]) {
        self.add_round_key(state, 0);
        for round in 1..ROUNDS {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            self.add_round_key(state, round);
        }
        sub_bytes(state);
        shift_rows(state);
        self.add_round_key(state, ROUNDS);
    }

    fn decrypt_block(&self, state: &mut [u8; AES_BLOCK_SIZE]) {
        self.add_round_key(state, ROUNDS);
        for round in (1..ROUNDS).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            self.add_round_key(state, round);
            inv_mix_columns(state);
        }
        inv_shift_rows(state);
        inv_sub_bytes(state);
        self.add_round_key(state, 0);
    }
}

impl BlockCipherOp for AesEngine {
    type Key = AesKey;

    /// Computes the 15-round-key schedule for the given direction.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::AesInvalidKeySize` if the key is not 32
    /// bytes. The engine stays uninitialized on failure.
    fn init(&mut self, mode: CipherMode, key: &Self::Key) -> Result<(), CryptoError> {
        if key.size() != AES_KEY_SIZE {
            self.mode = None;
            return Err(CryptoError::AesInvalidKeySize);
        }
        self.expand_key(key.key_bytes());
        self.mode = Some(mode);
        Ok(())
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    /// Transforms one block in the direction selected at `init`.
    ///
    /// # Errors
    ///
    /// * `CryptoError::AesNotInitialized` - `init` has not succeeded yet
    /// * `CryptoError::AesInvalidInputSize` - `input` is shorter than one block
    /// * `CryptoError::AesBufferTooSmall` - `output` is shorter than one block
    fn process_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CryptoError> {
        let mode = self.mode.ok_or(CryptoError::AesNotInitialized)?;
        if input.len() < AES_BLOCK_SIZE {
            return Err(CryptoError::AesInvalidInputSize);
        }
        if output.len() < AES_BLOCK_SIZE {
            return Err(CryptoError::AesBufferTooSmall);
        }

        let mut state = [0u8; AES_BLOCK_SIZE];
        state.copy_from_slice(&input[..AES_BLOCK_SIZE]);
        match mode {
            CipherMode::Encrypt => self.encrypt_block(&mut state),
            CipherMode::Decrypt => self.decrypt_block(&mut state),
        }
        output[..AES_BLOCK_SIZE].copy_from_slice(&state);
        Ok(AES_BLOCK_SIZE)
    }

    /// The key schedule carries no per-message state, so this is a no-op.
    fn reset(&mut self) {}
}

fn sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

fn inv_sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// Row `r` rotates left by `r` positions across the four columns.
fn shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    let old = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[4 * col + row] = old[4 * ((col + row) % 4) + row];
        }
    }
}

/// Row `r` rotates right by `r` positions across the four columns.
fn inv_shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    let old = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[4 * ((col + row) % 4) + row] = old[4 * col + row];
        }
    }
}

fn mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gf_mul(a0, 2) ^ gf_mul(a1, 3) ^ a2 ^ a3;
        col[1] = a0 ^ gf_mul(a1, 2) ^ gf_mul(a2, 3) ^ a3;
        col[2] = a0 ^ a1 ^ gf_mul(a2, 2) ^ gf_mul(a3, 3);
        col[3] = gf_mul(a0, 3) ^ a1 ^ a2 ^ gf_mul(a3, 2);
    }
}

fn inv_mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gf_mul(a0, 14) ^ gf_mul(a1, 11) ^ gf_mul(a2, 13) ^ gf_mul(a3, 9);
        col[1] = gf_mul(a0, 9) ^ gf_mul(a1, 14) ^ gf_mul(a2, 11) ^ gf_mul(a3, 13);
        col[2] = gf_mul(a0, 13) ^ gf_mul(a1, 9) ^ gf_mul(a2, 14) ^ gf_mul(a3, 11);
        col[3] = gf_mul(a0, 11) ^ gf_mul(a1, 13) ^ gf_mul(a2, 9) ^ gf_mul(a3, 14);
    }
}
