/// Incremental hash function.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

pub const SHA256_LEN: usize = 32;

const BLOCK_LEN: usize = 64;

/// Space the big-endian bit length occupies at the end of the last block.
const LENGTH_LEN: usize = 8;

const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 (FIPS 180-4).
///
/// Input is buffered into 64-byte blocks; each full block runs through the
/// compression function immediately, so memory use is constant no matter how
/// much is fed in.
#[derive(Clone, Debug)]
pub struct Sha256Hasher {
    state:    [u32; 8],
    block:    [u8; BLOCK_LEN],
    buffered: usize,
    /// Total bytes consumed, mod 2^64.
    length:   u64,
}

impl Default for Sha256Hasher {
    fn default() -> Self { Self::new() }
}

impl Sha256Hasher {
    pub fn new() -> Self {
        Self {
            state:    H0,
            block:    [0; BLOCK_LEN],
            buffered: 0,
            length:   0,
        }
    }

    /// One-shot digest of `data`.
    pub fn digest(data: &[u8]) -> [u8; SHA256_LEN] {
        let mut hasher = Self::new();
        hasher.absorb(data);
        hasher.finish()
    }

    fn absorb(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.block[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &self.block);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in blocks.by_ref() {
            compress(&mut self.state, block);
        }

        let tail = blocks.remainder();
        self.block[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    /// Pads the pending input and returns the digest.
    pub fn finish(mut self) -> [u8; SHA256_LEN] {
        let (first, spill) = self.final_blocks();
        compress(&mut self.state, &first);
        if let Some(spill) = spill {
            compress(&mut self.state, &spill);
        }

        let mut out = [0u8; SHA256_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// The pending block with the 0x80 marker, plus an extra block when the
    /// marker leaves no room for the 64-bit big-endian bit length.
    fn final_blocks(&self) -> ([u8; BLOCK_LEN], Option<[u8; BLOCK_LEN]>) {
        let trailer = self.length.wrapping_mul(8).to_be_bytes();

        let mut first = [0u8; BLOCK_LEN];
        first[..self.buffered].copy_from_slice(&self.block[..self.buffered]);
        first[self.buffered] = 0x80;

        if self.buffered + 1 > BLOCK_LEN - LENGTH_LEN {
            let mut spill = [0u8; BLOCK_LEN];
            spill[BLOCK_LEN - LENGTH_LEN..].copy_from_slice(&trailer);
            return (first, Some(spill));
        }

        first[BLOCK_LEN - LENGTH_LEN..].copy_from_slice(&trailer);
        (first, None)
    }
}

impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) { self.absorb(data); }
    fn finalize(self) -> Vec<u8> { self.finish().to_vec() }
}

/// SHA-256 of `data` as 64 lower-case hex characters.
pub fn sha256_hex(data: &[u8]) -> String { hex::encode(Sha256Hasher::digest(data)) }

fn compress(state: &mut [u32; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut w = [0u32; 64];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for i in 16..64 {
        let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ (!e & g);
        let t1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (slot, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.wrapping_add(value);
    }
}
