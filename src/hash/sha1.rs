// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! SHA-1 compression core (FIPS 180-4).

const BLOCK_SIZE: usize = 64;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Running SHA-1 state: chaining values, total message length and a
/// partial-block buffer.
#[derive(Clone)]
pub(super) struct Sha1State {
    h: [u32; 5],
    /// Total bytes processed so far, including buffered ones.
    len: u64,
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
}

impl Sha1State {
    pub(super) fn new() -> Self {
        Self {
            h: H0,
            len: 0,
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
        }
    }

    pub(super) fn update(&mut self, mut data: &[u8]) {
        self.len += data.len() as u64;

        if self.buffered > 0 {
            let take = data.len().min(BLOCK_SIZE - self.buffered);
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.compress(&block);
            self.buffered = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut chunks {
            let block: &[u8; BLOCK_SIZE] = block.try_into().expect("exact chunk");
            self.compress(block);
        }

        let tail = chunks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    pub(super) fn finalize(mut self) -> [u8; 20] {
        let bit_len = self.len * 8;

        // padding: 0x80, zeros, 64-bit big-endian length
        self.update(&[0x80]);
        while self.buffered != BLOCK_SIZE - 8 {
            self.update(&[0x00]);
        }
        self.buffer[BLOCK_SIZE - 8..].copy_from_slice(&bit_len.to_be_bytes());
        let block = self.buffer;
        self.compress(&block);

        let mut digest = [0u8; 20];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.h) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        digest
    }

    fn compress(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut w = [0u32; 80];
        for (i, chunk) in block.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes(chunk.try_into().expect("4-byte chunk"));
        }
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.h;

        for (t, word) in w.into_iter().enumerate() {
            let (f, k) = match t {
                0..=19 => ((b & c) | (!b & d), 0x5a827999u32),
                20..=39 => (b ^ c ^ d, 0x6ed9eba1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.h[0] = self.h[0].wrapping_add(a);
        self.h[1] = self.h[1].wrapping_add(b);
        self.h[2] = self.h[2].wrapping_add(c);
        self.h[3] = self.h[3].wrapping_add(d);
        self.h[4] = self.h[4].wrapping_add(e);
    }
}
