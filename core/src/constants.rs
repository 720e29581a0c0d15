//! constants.rs
//! Stable wire constants and defaults shared by the encoder and decoder.
//!
//! Notes:
//! - Header/trailer lengths are the fixed parts of each container; gzip may
//!   carry optional header fields on decode, which the gzip framing skips.
//! - Multi-byte integers: zlib trailer is big-endian, gzip fields little-endian.

/// Compression levels understood by the raw codec. Requested levels are
/// clamped into `FAST..=BEST`; stored (level 0) output is never produced.
pub mod levels {
    pub const FAST: i32 = 1;
    pub const DEFAULT: i32 = 6;
    pub const BEST: i32 = 9;
}

/// Zlib (RFC 1950) framing constants.
pub mod zlib {
    pub const HEADER_LEN: usize = 2;
    pub const TRAILER_LEN: usize = 4;

    /// Compression method 8 = deflate.
    pub const CM_DEFLATE: u8 = 8;
    /// log2(window size) - 8; 7 means a 32 KiB window.
    pub const CINFO_32K: u8 = 7;
    /// FLG bit announcing a preset dictionary.
    pub const FDICT: u8 = 0x20;
}

/// Gzip (RFC 1952) framing constants.
pub mod gzip {
    pub const HEADER_LEN: usize = 10;
    pub const TRAILER_LEN: usize = 8;

    pub const MAGIC: [u8; 2] = [0x1f, 0x8b];
    pub const CM_DEFLATE: u8 = 8;

    /// Header flag bits. FTEXT (0x01) is advisory and ignored.
    pub const FHCRC: u8 = 0x02;
    pub const FEXTRA: u8 = 0x04;
    pub const FNAME: u8 = 0x08;
    pub const FCOMMENT: u8 = 0x10;
    pub const FRESERVED: u8 = 0xe0;

    /// Fixed mtime for deterministic output.
    pub const MTIME: u32 = 0;
    /// Extra flags: none.
    pub const XFL: u8 = 0;
    /// OS byte: 255 = unknown.
    pub const OS_UNKNOWN: u8 = 0xff;
}

/// Smallest capacity the growth plan hands out.
pub const MIN_GROWTH: usize = 64;

/// Initial decode capacity as a multiple of the compressed input length.
pub const DECODE_EXPANSION_HINT: usize = 4;
