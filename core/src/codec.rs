//! codec.rs
//! Raw DEFLATE collaborator.
//!
//! Design notes:
//! - The codec only ever sees raw RFC 1951 streams; zlib/gzip framing is
//!   applied around it by `format`.
//! - Output goes into the caller-provided `Vec` after whatever is already in
//!   it (the encoder writes its header first). Growth follows `GrowthPlan`.
//! - `Flate2Codec` drives `flate2::Compress`/`Decompress` (miniz_oxide
//!   backend) over explicit output windows, so bounds are enforced exactly.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::buffer::GrowthPlan;
use crate::types::Level;

/// Codec-level failure, before a format is attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecFailure {
    /// Output would exceed the plan's limit.
    OutputLimit,
    /// Input is not a valid (or complete) raw DEFLATE stream.
    Corrupt(String),
    /// Anything else; not expected with in-memory buffers.
    Internal(String),
}

pub trait RawCodec {
    /// Appends the raw DEFLATE encoding of `input` to `out`.
    fn compress(
        &self,
        input: &[u8],
        level: Level,
        out: &mut Vec<u8>,
        plan: &GrowthPlan,
    ) -> Result<(), CodecFailure>;

    /// Appends the decoded bytes of the stream at the start of `input` to
    /// `out` and returns how many input bytes the stream occupied.
    fn decompress(
        &self,
        input: &[u8],
        out: &mut Vec<u8>,
        plan: &GrowthPlan,
    ) -> Result<usize, CodecFailure>;
}

/// `flate2` (miniz_oxide) backed codec.
#[derive(Copy, Clone, Debug, Default)]
pub struct Flate2Codec;

impl Flate2Codec {
    pub fn new() -> Self {
        Flate2Codec
    }

    fn compression(level: Level) -> Compression {
        Compression::new(level.effective() as u32)
    }
}

impl RawCodec for Flate2Codec {
    fn compress(
        &self,
        input: &[u8],
        level: Level,
        out: &mut Vec<u8>,
        plan: &GrowthPlan,
    ) -> Result<(), CodecFailure> {
        let mut enc = Compress::new(Self::compression(level), false);
        let mut written = out.len();

        loop {
            if !plan.grow(out, written) {
                out.truncate(written);
                return Err(CodecFailure::OutputLimit);
            }

            let (in_before, out_before) = (enc.total_in(), enc.total_out());
            let status = enc
                .compress(&input[in_before as usize..], &mut out[written..], FlushCompress::Finish)
                .map_err(|e| CodecFailure::Internal(e.to_string()))?;
            written += (enc.total_out() - out_before) as usize;

            if status == Status::StreamEnd {
                out.truncate(written);
                if plan.exceeded(written) {
                    return Err(CodecFailure::OutputLimit);
                }
                return Ok(());
            }

            let stalled = enc.total_in() == in_before && enc.total_out() == out_before;
            if stalled && written < out.len() {
                out.truncate(written);
                return Err(CodecFailure::Internal("compressor made no progress".into()));
            }
        }
    }

    fn decompress(
        &self,
        input: &[u8],
        out: &mut Vec<u8>,
        plan: &GrowthPlan,
    ) -> Result<usize, CodecFailure> {
        let mut dec = Decompress::new(false);
        let mut written = out.len();

        loop {
            if !plan.grow(out, written) {
                out.truncate(written);
                return Err(CodecFailure::OutputLimit);
            }

            let (in_before, out_before) = (dec.total_in(), dec.total_out());
            let result = dec.decompress(
                &input[in_before as usize..],
                &mut out[written..],
                FlushDecompress::None,
            );
            written += (dec.total_out() - out_before) as usize;

            let status = match result {
                Ok(status) => status,
                Err(e) => {
                    out.truncate(written);
                    return Err(CodecFailure::Corrupt(e.to_string()));
                }
            };

            if status == Status::StreamEnd {
                out.truncate(written);
                if plan.exceeded(written) {
                    return Err(CodecFailure::OutputLimit);
                }
                return Ok(dec.total_in() as usize);
            }

            let stalled = dec.total_in() == in_before && dec.total_out() == out_before;
            if stalled && written < out.len() {
                out.truncate(written);
                return Err(CodecFailure::Corrupt("unexpected end of deflate stream".into()));
            }
        }
    }
}
