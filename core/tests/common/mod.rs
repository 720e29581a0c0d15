//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use deflate_core::{CallOptions, Format};

pub const ATOZ: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// `""` as raw DEFLATE.
pub const EMPTY_DEFLATE: &[u8] = &[0x03, 0x00];

/// `"a"` as raw DEFLATE.
pub const A_DEFLATE: &[u8] = &[0x4b, 0x04, 0x00];

/// `ATOZ` as raw DEFLATE.
pub const ATOZ_DEFLATE: &[u8] = &[
    0x4b, 0x4c, 0x4a, 0x4e, 0x49, 0x4d, 0x4b, 0xcf, 0xc8, 0xcc, 0xca, 0xce, 0xc9, 0xcd, 0xcb, 0x2f,
    0x28, 0x2c, 0x2a, 0x2e, 0x29, 0x2d, 0x2b, 0xaf, 0xa8, 0xac, 0x02, 0x00,
];

pub const ATOZ_ZLIB: &[u8] = &[
    0x78, 0x9c, 0x4b, 0x4c, 0x4a, 0x4e, 0x49, 0x4d, 0x4b, 0xcf, 0xc8, 0xcc, 0xca, 0xce, 0xc9, 0xcd,
    0xcb, 0x2f, 0x28, 0x2c, 0x2a, 0x2e, 0x29, 0x2d, 0x2b, 0xaf, 0xa8, 0xac, 0x02, 0x00, 0x90, 0x86,
    0x0b, 0x20,
];

/// Written by a different gzip implementation (OS byte 3).
pub const ATOZ_GZIP: &[u8] = &[
    0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x4b, 0x4c, 0x4a, 0x4e, 0x49, 0x4d,
    0x4b, 0xcf, 0xc8, 0xcc, 0xca, 0xce, 0xc9, 0xcd, 0xcb, 0x2f, 0x28, 0x2c, 0x2a, 0x2e, 0x29, 0x2d,
    0x2b, 0xaf, 0xa8, 0xac, 0x02, 0x00, 0xbd, 0x50, 0x27, 0x4c, 0x1a, 0x00, 0x00, 0x00,
];

/// 33_706_430 bytes of `a`, deflated twice at level 6
/// (33_706_430 -> 32_766 -> 179 bytes).
pub const A33706430_DEFLATE_DEFLATE: &[u8] = &[
    0xed, 0xdd, 0xad, 0x0e, 0x81, 0x01, 0x14, 0x06, 0x60, 0x46, 0x12, 0xfc, 0x04, 0x8a, 0xa2, 0xb8,
    0x07, 0xc5, 0x46, 0x91, 0x05, 0x9a, 0xcd, 0x5c, 0x80, 0xb9, 0x04, 0xcc, 0x5c, 0x8a, 0xe0, 0x02,
    0x74, 0x9a, 0x2b, 0xf0, 0xd3, 0x04, 0x51, 0x12, 0x24, 0xe6, 0xe7, 0x1b, 0x97, 0xf0, 0xf9, 0x36,
    0x9e, 0x27, 0x9d, 0xf8, 0xe6, 0xb3, 0xb3, 0xf7, 0x9c, 0x56, 0xe3, 0xd8, 0xd3, 0xa8, 0xb4, 0xb9,
    0x95, 0x0b, 0xf3, 0x54, 0x0c, 0x00, 0x00, 0x00, 0xf8, 0x71, 0xa3, 0xfd, 0x24, 0x11, 0x7f, 0x0d,
    0xa5, 0xfb, 0xb6, 0xd1, 0x6c, 0x03, 0x00, 0x00, 0x00, 0xbf, 0xae, 0x97, 0x49, 0x27, 0x83, 0xa5,
    0xc0, 0xb5, 0x5b, 0xac, 0x47, 0x1d, 0x06, 0x00, 0x00, 0x00, 0x08, 0xdd, 0xb4, 0x5a, 0xc9, 0x06,
    0x17, 0x02, 0xe7, 0x61, 0x3f, 0x19, 0x75, 0x18, 0x00, 0x00, 0x00, 0x20, 0x74, 0xf9, 0xcb, 0xa1,
    0x16, 0xec, 0x02, 0xd6, 0xf7, 0x45, 0xae, 0x15, 0x75, 0x1a, 0x00, 0x00, 0x00, 0x20, 0x74, 0x3b,
    0x85, 0x01, 0x00, 0x00, 0x00, 0xf0, 0x57, 0x14, 0x06, 0x00, 0x00, 0x00, 0xc0, 0x7f, 0x99, 0xbd,
    0x0b, 0x03, 0xb2, 0xc7, 0x41, 0x75, 0x99, 0xca, 0x7f, 0xfd, 0x93, 0x01, 0x00, 0x00, 0x00, 0xf0,
    0xd1, 0x79, 0x00,
];

pub fn opts(format: Format) -> CallOptions {
    CallOptions::new().with_format(format)
}

pub fn atoz_times(n: usize) -> Vec<u8> {
    ATOZ.repeat(n)
}
