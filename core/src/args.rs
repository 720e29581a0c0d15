//! args.rs
//! Argument normalizer for dynamically shaped calls.
//!
//! Bindings that forward loosely typed arguments (positionals plus keyword
//! pairs) map them to [`Value`]s; this module checks their count, shape and
//! types, and reduces them to a typed [`EncodeRequest`] / [`DecodeRequest`].
//! All checks happen before any buffer or codec work.
//!
//! Accepted shapes:
//! - encode: `(src)`, `(src, size|nil)`, `(src, buffer)`,
//!   `(src, size|nil, buffer|nil)`; keywords `level`, `format`
//! - decode: `(src, size)`, `(src, size, buffer|nil)`; keyword `format`

use log::debug;

use crate::buffer::{ByteBuffer, Destination, Output};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{DeflateError, Result};
use crate::types::{CallOptions, Format, Level};

/// A dynamically typed argument.
#[derive(Debug)]
pub enum Value<'a> {
    Nil,
    Int(i64),
    Str(&'a str),
    Bytes(&'a [u8]),
    Buffer(&'a mut ByteBuffer),
    /// Any other object; carries its type name for error messages.
    Object(&'static str),
}

impl Value<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Buffer(_) => "buffer",
            Value::Object(name) => *name,
        }
    }
}

/// Normalized encode call.
#[derive(Debug)]
pub struct EncodeRequest<'a> {
    pub source: &'a [u8],
    pub max_size: Option<usize>,
    pub destination: Destination<'a>,
    pub options: CallOptions,
}

/// Normalized decode call.
#[derive(Debug)]
pub struct DecodeRequest<'a> {
    pub source: &'a [u8],
    pub max_size: usize,
    pub destination: Destination<'a>,
    pub options: CallOptions,
}

// ============================================================
// Conversions
// ============================================================

fn wrong_type(argument: &'static str, expected: &'static str, value: &Value<'_>) -> DeflateError {
    DeflateError::WrongType {
        argument,
        expected,
        got: value.type_name(),
    }
}

fn source<'a>(value: Value<'a>) -> Result<&'a [u8]> {
    match value {
        Value::Bytes(bytes) => Ok(bytes),
        Value::Str(s) => Ok(s.as_bytes()),
        other => Err(wrong_type("source", "bytes", &other)),
    }
}

fn size(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| DeflateError::InvalidSize {
        argument: "max_size",
        value,
    })
}

fn optional_size(value: Value<'_>) -> Result<Option<usize>> {
    match value {
        Value::Nil => Ok(None),
        Value::Int(n) => size(n).map(Some),
        other => Err(wrong_type("max_size", "integer or nil", &other)),
    }
}

fn destination(value: Value<'_>) -> Result<Destination<'_>> {
    match value {
        Value::Nil => Ok(Destination::Allocate),
        Value::Buffer(buf) => Ok(Destination::Reuse(buf)),
        other => Err(wrong_type("destination", "buffer or nil", &other)),
    }
}

fn level(value: Value<'_>) -> Result<Option<Level>> {
    match value {
        Value::Nil => Ok(None),
        Value::Int(n) => Ok(Some(Level::from_i64(n))),
        Value::Str(token) => Level::from_token(token).map(Some),
        other => Err(wrong_type("level", "integer or level name", &other)),
    }
}

fn format(value: Value<'_>) -> Result<Option<Format>> {
    match value {
        Value::Nil => Ok(None),
        Value::Str(token) => Format::from_token(token).map(Some),
        other => Err(wrong_type("format", "format name", &other)),
    }
}

/// Reads keyword pairs into options; `level` is only honoured when
/// `accepts_level` is set.
fn options<'k, 'a>(
    keywords: impl IntoIterator<Item = (&'k str, Value<'a>)>,
    accepts_level: bool,
) -> Result<CallOptions> {
    let mut options = CallOptions::new();
    for (key, value) in keywords {
        match key {
            "level" if accepts_level => options.level = level(value)?,
            "format" => options.format = format(value)?,
            _ => return Err(DeflateError::UnknownKeyword(key.to_owned())),
        }
    }
    Ok(options)
}

// ============================================================
// Encode
// ============================================================

impl<'a> EncodeRequest<'a> {
    pub fn from_values<'k>(
        args: Vec<Value<'a>>,
        keywords: impl IntoIterator<Item = (&'k str, Value<'a>)>,
    ) -> Result<Self> {
        let given = args.len();
        if !(1..=3).contains(&given) {
            return Err(DeflateError::WrongArgumentCount { given, expected: "1..3" });
        }

        let mut args = args.into_iter();
        let source = source(args.next().unwrap_or(Value::Nil))?;
        let options = options(keywords, true)?;

        let (max_size, destination) = match (args.next(), args.next()) {
            (None, _) => (None, Destination::Allocate),
            (Some(Value::Buffer(buf)), None) => (None, Destination::Reuse(buf)),
            (Some(size), None) => (optional_size(size)?, Destination::Allocate),
            (Some(size), Some(dest)) => (optional_size(size)?, destination(dest)?),
        };

        Ok(Self {
            source,
            max_size,
            destination,
            options,
        })
    }

    pub fn run(self) -> Result<Output<'a>> {
        Encoder::new().encode(self.source, self.max_size, self.destination, &self.options)
    }
}

// ============================================================
// Decode
// ============================================================

impl<'a> DecodeRequest<'a> {
    pub fn from_values<'k>(
        args: Vec<Value<'a>>,
        keywords: impl IntoIterator<Item = (&'k str, Value<'a>)>,
    ) -> Result<Self> {
        let given = args.len();
        if !(2..=3).contains(&given) {
            return Err(DeflateError::WrongArgumentCount { given, expected: "2..3" });
        }

        let mut args = args.into_iter();
        let source = source(args.next().unwrap_or(Value::Nil))?;
        let max_size = match args.next().unwrap_or(Value::Nil) {
            Value::Int(n) => size(n)?,
            other => return Err(wrong_type("max_size", "integer", &other)),
        };
        let options = options(keywords, false)?;
        let destination = destination(args.next().unwrap_or(Value::Nil))?;

        Ok(Self {
            source,
            max_size,
            destination,
            options,
        })
    }

    pub fn run(self) -> Result<Output<'a>> {
        Decoder::new().decode(self.source, self.max_size, self.destination, &self.options)
    }
}

/// Normalizes and runs an encode call.
pub fn encode_values<'a, 'k>(
    args: Vec<Value<'a>>,
    keywords: impl IntoIterator<Item = (&'k str, Value<'a>)>,
) -> Result<Output<'a>> {
    let request = EncodeRequest::from_values(args, keywords)?;
    debug!("normalized encode call: {:?}", request.options);
    request.run()
}

/// Normalizes and runs a decode call.
pub fn decode_values<'a, 'k>(
    args: Vec<Value<'a>>,
    keywords: impl IntoIterator<Item = (&'k str, Value<'a>)>,
) -> Result<Output<'a>> {
    let request = DecodeRequest::from_values(args, keywords)?;
    debug!("normalized decode call: {:?}", request.options);
    request.run()
}
