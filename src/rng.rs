use crate::error::{Error, Result};
use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20;
use zeroize::Zeroizing;

const BUFFER_LEN: usize = 1024;

/// Source of uniformly distributed 32-bit values consumed by every generator.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `[0, n)` by modulo reduction of one 32-bit draw.
    ///
    /// The bias is at most `n / 2^32`, negligible for alphabets and word lists of
    /// a few hundred entries. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "cannot sample from an empty range");
        (self.next_u32() as usize) % n
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

/// ChaCha20 keystream read in buffered chunks; each word is handed out once.
pub struct ChaChaSource {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl ChaChaSource {
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let mut cipher = ChaCha20::new(seed.into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    pub fn from_os() -> Result<Self> {
        let mut seed = Zeroizing::new([0u8; 32]);
        getrandom::getrandom(&mut seed[..]).map_err(|e| Error::Entropy(e.to_string()))?;
        Ok(Self::from_seed(&seed))
    }

    fn refill(&mut self) {
        self.buffer.iter_mut().for_each(|b| *b = 0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }
}

impl RandomSource for ChaChaSource {
    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.refill();
        }

        let bytes = [
            self.buffer[self.pos],
            self.buffer[self.pos + 1],
            self.buffer[self.pos + 2],
            self.buffer[self.pos + 3],
        ];
        self.pos += 4;

        u32::from_le_bytes(bytes)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::SequenceSource;
    use super::*;

    #[test]
    fn test_seeded_stream_deterministic() {
        let mut a = ChaChaSource::from_seed(&[42u8; 32]);
        let mut b = ChaChaSource::from_seed(&[42u8; 32]);

        for _ in 0..600 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = ChaChaSource::from_seed(&[1u8; 32]);
        let mut b = ChaChaSource::from_seed(&[2u8; 32]);

        let left: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn test_refill_does_not_repeat_draws() {
        let mut rng = ChaChaSource::from_seed(&[7u8; 32]);
        let first: Vec<u32> = (0..BUFFER_LEN / 4).map(|_| rng.next_u32()).collect();
        let second: Vec<u32> = (0..BUFFER_LEN / 4).map(|_| rng.next_u32()).collect();

        assert_ne!(first, second);
    }

    #[test]
    fn test_os_seeded_sources_differ() {
        let mut a = ChaChaSource::from_os().unwrap();
        let mut b = ChaChaSource::from_os().unwrap();

        let left: Vec<u32> = (0..4).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..4).map(|_| b.next_u32()).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = ChaChaSource::from_seed(&[42u8; 32]);
        for n in 1..200 {
            assert!(rng.below(n) < n);
        }
    }

    #[test]
    fn test_below_uses_modulo() {
        let mut rng = SequenceSource::new(vec![0, 9, 10, 23, u32::MAX]);
        assert_eq!(rng.below(10), 0);
        assert_eq!(rng.below(10), 9);
        assert_eq!(rng.below(10), 0);
        assert_eq!(rng.below(10), 3);
        assert_eq!(rng.below(10), 5);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn test_uniform_distribution() {
        const DRAWS: usize = 100_000;
        const K: usize = 10;

        let mut rng = ChaChaSource::from_seed(&[42u8; 32]);
        let mut counts = [0usize; K];
        for _ in 0..DRAWS {
            counts[rng.below(K)] += 1;
        }

        let expected = DRAWS / K;
        let tolerance = expected / 20;
        for (i, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < tolerance,
                "Index {} drawn {} times, expected {} +/- {}",
                i,
                count,
                expected,
                tolerance
            );
        }
    }
}
