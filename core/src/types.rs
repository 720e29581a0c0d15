//! types.rs
//! Call-level configuration: container format, compression level, options.
//!
//! Notes:
//! - `CallOptions` leaves both fields unspecified by default; the direction
//!   of the call decides the effective format (gzip for encode, raw for decode).
//! - Tokens are matched ASCII case-insensitively, as the option values usually
//!   come from config files or bindings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::constants::levels;
use crate::error::DeflateError;

/// Container format wrapped around the raw DEFLATE stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Format {
    /// Raw DEFLATE (RFC 1951), no framing.
    Raw,
    /// 2-byte header + Adler-32 trailer (RFC 1950).
    Zlib,
    /// 10-byte header + CRC32/length trailer (RFC 1952).
    Gzip,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Raw, Format::Zlib, Format::Gzip];

    pub fn name(self) -> &'static str {
        match self {
            Format::Raw => "deflate",
            Format::Zlib => "zlib",
            Format::Gzip => "gzip",
        }
    }

    /// Parses `deflate`, `zlib` or `gzip`, ignoring ASCII case.
    ///
    /// `raw` is accepted as an extra spelling of `deflate`.
    pub fn from_token(token: &str) -> Result<Self, DeflateError> {
        if token.eq_ignore_ascii_case("deflate") || token.eq_ignore_ascii_case("raw") {
            Ok(Format::Raw)
        } else if token.eq_ignore_ascii_case("zlib") {
            Ok(Format::Zlib)
        } else if token.eq_ignore_ascii_case("gzip") {
            Ok(Format::Gzip)
        } else {
            Err(DeflateError::UnknownFormat(token.to_owned()))
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = DeflateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_token(s)
    }
}

impl TryFrom<String> for Format {
    type Error = DeflateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Format::from_token(&value)
    }
}

impl Serialize for Format {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Compression effort handed to the raw codec.
///
/// Any integer is accepted; [`Level::effective`] clamps it into
/// `FAST..=BEST` before it reaches the codec or the zlib header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "i32")]
pub struct Level(i32);

impl Level {
    pub const FAST: Level = Level(levels::FAST);
    pub const DEFAULT: Level = Level(levels::DEFAULT);
    pub const BEST: Level = Level(levels::BEST);

    pub const fn new(level: i32) -> Self {
        Level(level)
    }

    /// Saturates values outside the `i32` range.
    pub fn from_i64(level: i64) -> Self {
        Level(level.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// Level actually used for compression.
    pub fn effective(self) -> i32 {
        self.0.clamp(levels::FAST, levels::BEST)
    }

    pub fn from_token(token: &str) -> Result<Self, DeflateError> {
        let named = |names: &[&str]| names.iter().any(|n| token.eq_ignore_ascii_case(n));
        if named(&["default"]) {
            Ok(Level::DEFAULT)
        } else if named(&["best", "max"]) {
            Ok(Level::BEST)
        } else if named(&["fast", "min"]) {
            Ok(Level::FAST)
        } else {
            Err(DeflateError::UnknownLevel(token.to_owned()))
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::DEFAULT
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl FromStr for Level {
    type Err = DeflateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(n) => Ok(Level::from_i64(n)),
            Err(_) => Level::from_token(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(i64),
    Name(String),
}

impl TryFrom<LevelRepr> for Level {
    type Error = DeflateError;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Number(n) => Ok(Level::from_i64(n)),
            LevelRepr::Name(name) => Level::from_token(&name),
        }
    }
}

/// Which side of the codec a call runs on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// Format used when the caller leaves it unspecified.
    pub fn default_format(self) -> Format {
        match self {
            Direction::Encode => Format::Gzip,
            Direction::Decode => Format::Raw,
        }
    }
}

/// Per-call options. `None` means "unspecified".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallOptions {
    pub level: Option<Level>,
    pub format: Option<Format>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn level(&self) -> Level {
        self.level.unwrap_or_default()
    }

    pub fn format_for(&self, direction: Direction) -> Format {
        self.format.unwrap_or_else(|| direction.default_format())
    }
}
