//! deflate-core
//!
//! One-shot DEFLATE encode/decode over raw, zlib and gzip framing.
//! Pure Rust; the bit-level codec is `flate2` on its `miniz_oxide` backend.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod error;
pub mod types;
pub mod utils;

// Building blocks
pub mod buffer;
pub mod codec;
pub mod format;

// Entry points
pub mod args;
pub mod decoder;
pub mod encoder;

pub use buffer::{ByteBuffer, Destination, Output};
pub use decoder::{decode, Decoder, Decompressor};
pub use encoder::{encode, Compressor, Encoder};
pub use error::{DeflateError, ErrorKind, Result};
pub use types::{CallOptions, Format, Level};

// Alternate entry point names.
pub use decoder::decode as decompress;
pub use decoder::decode as inflate;
pub use decoder::decode as uncompress;
pub use encoder::encode as compress;
pub use encoder::encode as deflate;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::args::{decode_values, encode_values, Value};
    pub use crate::buffer::{ByteBuffer, Destination, Output};
    pub use crate::codec::{Flate2Codec, RawCodec};
    pub use crate::decoder::{decode, Decoder};
    pub use crate::encoder::{encode, Encoder};
    pub use crate::error::{DeflateError, ErrorKind};
    pub use crate::types::{CallOptions, Format, Level};
}
