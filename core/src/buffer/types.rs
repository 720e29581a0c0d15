//! buffer/types.rs
//! Destination storage and the two-sided call outcome.
//!
//! Notes:
//! - `ByteBuffer` carries a `frozen` flag so callers can hand out buffers that
//!   must never be written; a frozen destination is rejected before any work.
//! - `Destination` is what the caller passes in, `Output` is what comes back.
//!   Reuse is explicit on both sides so identity can be checked.

use std::fmt;
use std::ops::Deref;

/// Owned, growable byte storage with a mutability flag.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
    frozen: bool,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            frozen: false,
        }
    }

    /// Marks the buffer immutable. There is no way back.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn frozen(mut self) -> Self {
        self.freeze();
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Write access for the buffer policy. Callers go through
    /// `BufferPolicy::resolve`, which checks the frozen flag first.
    pub(crate) fn storage_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data, frozen: false }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .field("frozen", &self.frozen)
            .finish()
    }
}

/// Where a call writes its output.
#[derive(Debug, Default)]
pub enum Destination<'a> {
    /// Allocate a fresh buffer and return it.
    #[default]
    Allocate,
    /// Overwrite the caller's buffer in place and return it.
    Reuse(&'a mut ByteBuffer),
}

impl<'a> From<&'a mut ByteBuffer> for Destination<'a> {
    fn from(buffer: &'a mut ByteBuffer) -> Self {
        Destination::Reuse(buffer)
    }
}

impl<'a> From<Option<&'a mut ByteBuffer>> for Destination<'a> {
    fn from(buffer: Option<&'a mut ByteBuffer>) -> Self {
        match buffer {
            Some(b) => Destination::Reuse(b),
            None => Destination::Allocate,
        }
    }
}

/// Result buffer of a successful call: either the caller's own buffer,
/// mutated, or a newly allocated one.
#[derive(Debug)]
pub enum Output<'a> {
    Reused(&'a mut ByteBuffer),
    Allocated(ByteBuffer),
}

impl<'a> Output<'a> {
    pub fn is_reused(&self) -> bool {
        matches!(self, Output::Reused(_))
    }

    pub fn buffer(&self) -> &ByteBuffer {
        match self {
            Output::Reused(b) => &**b,
            Output::Allocated(b) => b,
        }
    }

    /// True if this output is exactly the buffer at `other`.
    pub fn is_same_buffer(&self, other: *const ByteBuffer) -> bool {
        match self {
            Output::Reused(b) => std::ptr::eq(&**b, other),
            Output::Allocated(_) => false,
        }
    }

    /// Copies out of a reused buffer; moves out of an allocated one.
    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Output::Reused(b) => b.as_bytes().to_vec(),
            Output::Allocated(b) => b.into_vec(),
        }
    }
}

impl Deref for Output<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.buffer().as_bytes()
    }
}

impl AsRef<[u8]> for Output<'_> {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
