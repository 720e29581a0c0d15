//! decoder.rs
//! One-shot decode: framed DEFLATE input -> original bytes, bounded by a
//! mandatory output size.

use log::{debug, warn};

use crate::buffer::{BufferPolicy, Destination, GrowthPlan, Output};
use crate::codec::{CodecFailure, Flate2Codec, RawCodec};
use crate::constants::DECODE_EXPANSION_HINT;
use crate::error::{DeflateError, Result};
use crate::format::Framer;
use crate::types::{CallOptions, Direction};

#[derive(Copy, Clone, Debug, Default)]
pub struct Decoder<C = Flate2Codec> {
    codec: C,
}

pub type Decompressor<C = Flate2Codec> = Decoder<C>;

impl Decoder<Flate2Codec> {
    pub fn new() -> Self {
        Self { codec: Flate2Codec::new() }
    }
}

impl<C: RawCodec> Decoder<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Decompresses `source` (raw DEFLATE unless `options` names a format)
    /// into `destination`, producing at most `max_size` bytes.
    ///
    /// The header is validated before inflating and the trailer checksum
    /// after; bytes following the trailer are ignored.
    ///
    /// # Errors
    /// - `ImmutableTarget` if the destination is frozen; it is left untouched.
    /// - `TargetFull` if the decoded data is longer than `max_size`.
    /// - `CorruptData` for bad framing, a broken or truncated stream, or a
    ///   checksum mismatch.
    pub fn decode<'a>(
        &self,
        source: &[u8],
        max_size: usize,
        destination: impl Into<Destination<'a>>,
        options: &CallOptions,
    ) -> Result<Output<'a>> {
        let framer = Framer::resolve(options, Direction::Decode);
        let format = framer.format();

        let mut lease = BufferPolicy::resolve(destination.into())?;
        debug!(
            "decode start: format={} src={} max={} reuse={}",
            format,
            source.len(),
            max_size,
            lease.is_reused()
        );

        let frame = match framer.split(source) {
            Ok(frame) => frame,
            Err(e) => {
                lease.discard();
                return Err(e);
            }
        };

        let plan = GrowthPlan::bounded(
            max_size,
            source.len().saturating_mul(DECODE_EXPANSION_HINT),
        );
        let consumed = match self.codec.decompress(frame.body, lease.storage(), &plan) {
            Ok(consumed) => consumed,
            Err(failure) => {
                lease.discard();
                return Err(match failure {
                    CodecFailure::OutputLimit => DeflateError::TargetFull { format, limit: max_size },
                    CodecFailure::Corrupt(reason) => DeflateError::CorruptData { format, reason },
                    CodecFailure::Internal(reason) => DeflateError::Codec { format, reason },
                });
            }
        };

        match framer.check_trailer(&frame, consumed, lease.storage()) {
            Ok(0) => {}
            Ok(extra) => warn!("{} trailing bytes after the {} stream ignored", extra, format),
            Err(e) => {
                lease.discard();
                return Err(e);
            }
        }

        debug!("decode done: format={} out={}", format, lease.storage().len());
        Ok(lease.commit())
    }
}

/// Decodes with the default `flate2` codec. See [`Decoder::decode`].
pub fn decode<'a>(
    source: &[u8],
    max_size: usize,
    destination: impl Into<Destination<'a>>,
    options: &CallOptions,
) -> Result<Output<'a>> {
    Decoder::new().decode(source, max_size, destination, options)
}
