//! format/mod.rs
//! Format resolver: maps a requested format to the framing applied around
//! the raw DEFLATE codec.
//!
//! Notes:
//! - Raw streams pass through untouched.
//! - Zlib and gzip add a header before and a checksum trailer after the
//!   payload; decoders validate both.
//! - Nothing here compresses; it only frames bytes and computes checksums.

pub mod gzip;
pub mod zlib;

use crate::constants;
use crate::error::{DeflateError, Result};
use crate::types::{CallOptions, Direction, Format, Level};

/// Framed input with its header stripped: the DEFLATE stream, then the
/// trailer, then possibly unrelated bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub body: &'a [u8],
}

/// Framing rules for one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framer {
    format: Format,
}

impl Framer {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Effective framing for a call, honouring the direction's default.
    pub fn resolve(options: &CallOptions, direction: Direction) -> Self {
        Self::new(options.format_for(direction))
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Header length written on encode.
    pub fn header_len(&self) -> usize {
        match self.format {
            Format::Raw => 0,
            Format::Zlib => constants::zlib::HEADER_LEN,
            Format::Gzip => constants::gzip::HEADER_LEN,
        }
    }

    pub fn trailer_len(&self) -> usize {
        match self.format {
            Format::Raw => 0,
            Format::Zlib => constants::zlib::TRAILER_LEN,
            Format::Gzip => constants::gzip::TRAILER_LEN,
        }
    }

    pub fn overhead(&self) -> usize {
        self.header_len() + self.trailer_len()
    }

    pub fn write_header(&self, level: Level, out: &mut Vec<u8>) {
        match self.format {
            Format::Raw => {}
            Format::Zlib => zlib::write_header(level, out),
            Format::Gzip => gzip::write_header(out),
        }
    }

    pub fn write_trailer(&self, source: &[u8], out: &mut Vec<u8>) {
        match self.format {
            Format::Raw => {}
            Format::Zlib => zlib::write_trailer(source, out),
            Format::Gzip => gzip::write_trailer(source, out),
        }
    }

    /// Validates and strips the header.
    pub fn split<'a>(&self, input: &'a [u8]) -> Result<Frame<'a>> {
        match self.format {
            Format::Raw => Ok(Frame { body: input }),
            Format::Zlib => zlib::split(input),
            Format::Gzip => gzip::split(input),
        }
    }

    /// Validates the trailer that follows the `consumed` stream bytes of
    /// `frame` against the decoded output.
    ///
    /// Returns the number of bytes left over after the trailer; the caller
    /// ignores them.
    pub fn check_trailer(&self, frame: &Frame<'_>, consumed: usize, decoded: &[u8]) -> Result<usize> {
        let rest = &frame.body[consumed.min(frame.body.len())..];
        if rest.len() < self.trailer_len() {
            return Err(DeflateError::corrupt(self.format, "truncated trailer"));
        }
        let (trailer, extra) = rest.split_at(self.trailer_len());
        match self.format {
            Format::Raw => {}
            Format::Zlib => zlib::check_trailer(trailer, decoded)?,
            Format::Gzip => gzip::check_trailer(trailer, decoded)?,
        }
        Ok(extra.len())
    }
}
