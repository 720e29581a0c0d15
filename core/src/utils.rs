//! utils.rs
//! Checksums used by the container trailers.

use crc32fast::Hasher;

/// CRC-32 (IEEE) as stored in the gzip trailer.
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

const ADLER_MOD: u32 = 65521;
/// Largest n such that 255 * n * (n + 1) / 2 + (n + 1) * (ADLER_MOD - 1) fits in u32.
const ADLER_NMAX: usize = 5552;

/// Adler-32 as stored (big-endian) in the zlib trailer.
pub fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;

    for chunk in data.chunks(ADLER_NMAX) {
        for &byte in chunk {
            a += u32::from(byte);
            b += a;
        }
        a %= ADLER_MOD;
        b %= ADLER_MOD;
    }

    (b << 16) | a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_vectors() {
        assert_eq!(crc32(b""), 0);
        assert_eq!(crc32(b"123456789"), 0xcbf4_3926);
        assert_eq!(crc32(b"abcdefghijklmnopqrstuvwxyz"), 0x4c27_50bd);
    }

    #[test]
    fn adler32_vectors() {
        assert_eq!(adler32(b""), 1);
        assert_eq!(adler32(b"a"), 0x0062_0062);
        assert_eq!(adler32(b"abc"), 0x024d_0127);
        assert_eq!(adler32(b"abcdefghijklmnopqrstuvwxyz"), 0x9086_0b20);
    }

    #[test]
    fn adler32_long_input_matches_naive() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 256) as u8).collect();
        let (mut a, mut b) = (1u32, 0u32);
        for &byte in &data {
            a = (a + byte as u32) % ADLER_MOD;
            b = (b + a) % ADLER_MOD;
        }
        assert_eq!(adler32(&data), (b << 16) | a);
    }
}
