//! format/gzip.rs
//! Gzip envelope (RFC 1952): 10-byte header, little-endian CRC32 + ISIZE trailer.
//!
//! Encoding always writes the fixed header with mtime 0 so output is
//! deterministic. Decoding also accepts headers carrying the optional
//! FEXTRA/FNAME/FCOMMENT/FHCRC fields; a present header CRC16 (low half
//! of the CRC32 over the preceding header bytes) must match. A single
//! member is decoded; its trailer follows the end of the deflate stream.

use crate::constants::gzip;
use crate::error::{DeflateError, Result};
use crate::format::Frame;
use crate::types::Format;
use crate::utils::crc32;

pub fn write_header(out: &mut Vec<u8>) {
    out.extend_from_slice(&gzip::MAGIC);
    out.push(gzip::CM_DEFLATE);
    out.push(0); // FLG
    out.extend_from_slice(&gzip::MTIME.to_le_bytes());
    out.push(gzip::XFL);
    out.push(gzip::OS_UNKNOWN);
}

pub fn write_trailer(source: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(&crc32(source).to_le_bytes());
    // ISIZE is the input length modulo 2^32.
    out.extend_from_slice(&(source.len() as u32).to_le_bytes());
}

/// Skips a zero-terminated header field starting at `pos`.
fn skip_cstr(input: &[u8], pos: usize) -> Option<usize> {
    input[pos..].iter().position(|&b| b == 0).map(|nul| pos + nul + 1)
}

pub fn split(input: &[u8]) -> Result<Frame<'_>> {
    let corrupt = |reason: &str| DeflateError::corrupt(Format::Gzip, reason);

    if input.len() < gzip::HEADER_LEN + gzip::TRAILER_LEN {
        return Err(corrupt("gzip data too short"));
    }
    if input[..2] != gzip::MAGIC {
        return Err(corrupt("invalid gzip magic"));
    }
    if input[2] != gzip::CM_DEFLATE {
        return Err(corrupt("unsupported compression method"));
    }

    let flags = input[3];
    if flags & gzip::FRESERVED != 0 {
        return Err(corrupt("reserved header flags set"));
    }

    let trailer_at = input.len() - gzip::TRAILER_LEN;
    let truncated = || corrupt("gzip header truncated");
    let mut pos = gzip::HEADER_LEN;

    if flags & gzip::FEXTRA != 0 {
        if pos + 2 > trailer_at {
            return Err(truncated());
        }
        let xlen = usize::from(u16::from_le_bytes([input[pos], input[pos + 1]]));
        pos += 2 + xlen;
    }
    if flags & gzip::FNAME != 0 {
        pos = skip_cstr(&input[..trailer_at], pos.min(trailer_at)).ok_or_else(truncated)?;
    }
    if flags & gzip::FCOMMENT != 0 {
        pos = skip_cstr(&input[..trailer_at], pos.min(trailer_at)).ok_or_else(truncated)?;
    }
    if flags & gzip::FHCRC != 0 {
        if pos + 2 > trailer_at {
            return Err(truncated());
        }
        let stored = u16::from_le_bytes([input[pos], input[pos + 1]]);
        if stored != crc32(&input[..pos]) as u16 {
            return Err(corrupt("header crc16 mismatch"));
        }
        pos += 2;
    }
    if pos > trailer_at {
        return Err(truncated());
    }

    Ok(Frame { body: &input[pos..] })
}

pub fn check_trailer(trailer: &[u8], decoded: &[u8]) -> Result<()> {
    let stored_crc = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let stored_size = u32::from_le_bytes([trailer[4], trailer[5], trailer[6], trailer[7]]);

    if stored_crc != crc32(decoded) {
        return Err(DeflateError::corrupt(Format::Gzip, "crc32 mismatch"));
    }
    if stored_size != decoded.len() as u32 {
        return Err(DeflateError::corrupt(Format::Gzip, "length mismatch"));
    }
    Ok(())
}
