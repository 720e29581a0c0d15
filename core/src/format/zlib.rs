//! format/zlib.rs
//! Zlib envelope (RFC 1950): 2-byte header, big-endian Adler-32 trailer.

use crate::constants::{levels, zlib};
use crate::error::{DeflateError, Result};
use crate::format::Frame;
use crate::types::{Format, Level};
use crate::utils::adler32;

/// FLEVEL field (bits 6-7 of FLG) for a compression level.
fn flevel(level: Level) -> u8 {
    match level.effective() {
        l if l < 2 => 0,
        l if l < levels::DEFAULT => 1,
        levels::DEFAULT => 2,
        _ => 3,
    }
}

pub fn write_header(level: Level, out: &mut Vec<u8>) {
    let cmf = (zlib::CINFO_32K << 4) | zlib::CM_DEFLATE;
    let flg_base = flevel(level) << 6;
    // FCHECK: (CMF * 256 + FLG) must be a multiple of 31.
    let rem = (u16::from(cmf) * 256 + u16::from(flg_base)) % 31;
    let fcheck = ((31 - rem) % 31) as u8;
    out.push(cmf);
    out.push(flg_base | fcheck);
}

pub fn write_trailer(source: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(&adler32(source).to_be_bytes());
}

pub fn split(input: &[u8]) -> Result<Frame<'_>> {
    let corrupt = |reason: &str| DeflateError::corrupt(Format::Zlib, reason);

    if input.len() < zlib::HEADER_LEN + zlib::TRAILER_LEN {
        return Err(corrupt("zlib data too short"));
    }

    let (cmf, flg) = (input[0], input[1]);
    if cmf & 0x0f != zlib::CM_DEFLATE {
        return Err(corrupt("unsupported compression method"));
    }
    if cmf >> 4 > zlib::CINFO_32K {
        return Err(corrupt("invalid window size"));
    }
    if (u16::from(cmf) * 256 + u16::from(flg)) % 31 != 0 {
        return Err(corrupt("header check bits mismatch"));
    }
    if flg & zlib::FDICT != 0 {
        return Err(corrupt("preset dictionary not supported"));
    }

    Ok(Frame {
        body: &input[zlib::HEADER_LEN..],
    })
}

pub fn check_trailer(trailer: &[u8], decoded: &[u8]) -> Result<()> {
    let stored = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    if stored != adler32(decoded) {
        return Err(DeflateError::corrupt(Format::Zlib, "adler32 checksum mismatch"));
    }
    Ok(())
}
