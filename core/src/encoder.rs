//! encoder.rs
//! One-shot encode: source bytes -> framed DEFLATE output.
//!
//! Design notes:
//! - The cap (`max_size`) covers the whole framed output, header and trailer
//!   included. Output that would not fit is a `TargetFull` error, never a
//!   truncated result.
//! - Without a cap the output grows as needed, starting from a compress bound.
//! - A supplied destination is overwritten and handed back as the result;
//!   on a runtime failure it is left empty.

use log::debug;

use crate::buffer::{BufferPolicy, Destination, GrowthPlan, Output};
use crate::codec::{CodecFailure, Flate2Codec, RawCodec};
use crate::error::{DeflateError, Result};
use crate::format::Framer;
use crate::types::{CallOptions, Direction};

/// Worst-case raw DEFLATE size for `len` input bytes (zlib's compressBound,
/// minus its own framing).
pub fn compress_bound(len: usize) -> usize {
    len.saturating_add(len >> 12)
        .saturating_add(len >> 14)
        .saturating_add(len >> 25)
        .saturating_add(13)
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Encoder<C = Flate2Codec> {
    codec: C,
}

/// Alternate name kept for callers used to compressor/decompressor pairs.
pub type Compressor<C = Flate2Codec> = Encoder<C>;

impl Encoder<Flate2Codec> {
    pub fn new() -> Self {
        Self { codec: Flate2Codec::new() }
    }
}

impl<C: RawCodec> Encoder<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Compresses `source` into `destination` using the format and level in
    /// `options` (gzip and level 6 when unset).
    ///
    /// # Errors
    /// - `ImmutableTarget` if the destination is frozen; it is left untouched.
    /// - `TargetFull` if the framed output would exceed `max_size`.
    /// - `Codec` if the compressor itself fails.
    pub fn encode<'a>(
        &self,
        source: &[u8],
        max_size: Option<usize>,
        destination: impl Into<Destination<'a>>,
        options: &CallOptions,
    ) -> Result<Output<'a>> {
        let framer = Framer::resolve(options, Direction::Encode);
        let format = framer.format();
        let level = options.level();

        let mut lease = BufferPolicy::resolve(destination.into())?;
        debug!(
            "encode start: format={} level={} src={} cap={:?} reuse={}",
            format,
            level.get(),
            source.len(),
            max_size,
            lease.is_reused()
        );

        let estimate = compress_bound(source.len()).saturating_add(framer.overhead());
        let plan = match max_size {
            Some(limit) => GrowthPlan::bounded(limit, estimate),
            None => GrowthPlan::unbounded(estimate),
        };
        let full = || DeflateError::TargetFull {
            format,
            limit: max_size.unwrap_or(usize::MAX),
        };

        // The trailer is written after the codec runs, so the codec gets
        // whatever the cap leaves once the trailer is set aside.
        let body_plan = match plan.reserving(framer.trailer_len()) {
            Some(p) if max_size.map_or(true, |limit| limit >= framer.overhead()) => p,
            _ => {
                lease.discard();
                return Err(full());
            }
        };

        let out = lease.storage();
        framer.write_header(level, out);

        let compressed = self.codec.compress(source, level, out, &body_plan);
        if let Err(failure) = compressed {
            lease.discard();
            return Err(match failure {
                CodecFailure::OutputLimit => full(),
                CodecFailure::Corrupt(reason) | CodecFailure::Internal(reason) => {
                    DeflateError::Codec { format, reason }
                }
            });
        }

        let out = lease.storage();
        framer.write_trailer(source, out);
        debug!("encode done: format={} out={}", format, out.len());

        Ok(lease.commit())
    }
}

// ============================================================
// Free-function entry points
// ============================================================

/// Encodes with the default `flate2` codec. See [`Encoder::encode`].
pub fn encode<'a>(
    source: &[u8],
    max_size: Option<usize>,
    destination: impl Into<Destination<'a>>,
    options: &CallOptions,
) -> Result<Output<'a>> {
    Encoder::new().encode(source, max_size, destination, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ByteBuffer;
    use crate::types::{Format, Level};

    fn opts(format: Format) -> CallOptions {
        CallOptions::new().with_format(format)
    }

    #[test]
    fn default_format_is_gzip() {
        let out = encode(b"hello", None, Destination::Allocate, &CallOptions::new()).unwrap();
        assert_eq!(&out[..3], &[0x1f, 0x8b, 0x08]);
        assert!(!out.is_reused());
    }

    #[test]
    fn zlib_header_follows_level() {
        let out = encode(b"hello", None, Destination::Allocate, &opts(Format::Zlib)).unwrap();
        assert_eq!(&out[..2], &[0x78, 0x9c]);

        let best = opts(Format::Zlib).with_level(Level::BEST);
        let out = encode(b"hello", None, Destination::Allocate, &best).unwrap();
        assert_eq!(&out[..2], &[0x78, 0xda]);
    }

    #[test]
    fn cap_below_framing_overhead_fails_fast() {
        let err = encode(b"", Some(17), Destination::Allocate, &opts(Format::Gzip)).unwrap_err();
        assert_eq!(err, DeflateError::TargetFull { format: Format::Gzip, limit: 17 });
    }

    #[test]
    fn exact_cap_is_accepted() {
        let data = b"abcabcabcabcabcabc";
        let full = encode(data, None, Destination::Allocate, &opts(Format::Zlib)).unwrap();
        let len = full.len();

        let capped = encode(data, Some(len), Destination::Allocate, &opts(Format::Zlib)).unwrap();
        assert_eq!(&capped[..], &full[..]);

        let err = encode(data, Some(len - 1), Destination::Allocate, &opts(Format::Zlib)).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::TargetFull);
    }

    #[test]
    fn reused_destination_is_overwritten() {
        let mut buf = ByteBuffer::from(vec![0xee; 300]);
        let ptr: *const ByteBuffer = &buf;
        let out = encode(b"a", None, &mut buf, &opts(Format::Raw)).unwrap();
        assert!(out.is_same_buffer(ptr));
        assert!(out.len() < 300);

        let mut plain = Vec::new();
        Flate2Codec
            .decompress(&out, &mut plain, &GrowthPlan::bounded(1, 0))
            .unwrap();
        assert_eq!(plain, b"a");
    }

    #[test]
    fn target_full_empties_the_destination() {
        let mut buf = ByteBuffer::from(b"previous".to_vec());
        let data: Vec<u8> = (0..4096u32).map(|i| (i * 131 % 251) as u8).collect();
        let err = encode(&data, Some(64), &mut buf, &opts(Format::Raw)).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::TargetFull);
        assert!(buf.is_empty());
    }

    #[test]
    fn compress_bound_covers_overhead() {
        assert_eq!(compress_bound(0), 13);
        assert!(compress_bound(1 << 20) > 1 << 20);
    }
}
