//! buffer/policy.rs
//! Destination selection and growth rules for a single call.
//!
//! Design notes:
//! - `resolve` is the only path to writable storage; it rejects frozen
//!   destinations before the codec is touched.
//! - Reused destinations keep their allocation; previous content is dropped,
//!   never appended to.
//! - Growth is capped at `limit + 1` bytes so an overflow is observable
//!   without writing unbounded output.
//! - On failure the destination is left empty (length 0, capacity kept).

use log::trace;

use crate::buffer::types::{ByteBuffer, Destination, Output};
use crate::constants::MIN_GROWTH;
use crate::error::{DeflateError, Result};

/// Writable storage leased to the codec for the duration of one call.
#[derive(Debug)]
pub struct Lease<'a> {
    slot: Slot<'a>,
}

#[derive(Debug)]
enum Slot<'a> {
    Reused(&'a mut ByteBuffer),
    Fresh(ByteBuffer),
}

impl<'a> Lease<'a> {
    pub fn is_reused(&self) -> bool {
        matches!(self.slot, Slot::Reused(_))
    }

    pub fn storage(&mut self) -> &mut Vec<u8> {
        match &mut self.slot {
            Slot::Reused(b) => b.storage_mut(),
            Slot::Fresh(b) => b.storage_mut(),
        }
    }

    /// Hands the written bytes back to the caller.
    pub fn commit(self) -> Output<'a> {
        match self.slot {
            Slot::Reused(b) => Output::Reused(b),
            Slot::Fresh(b) => Output::Allocated(b),
        }
    }

    /// Drops partial output so nothing from a failed call is observable.
    pub fn discard(mut self) {
        self.storage().clear();
    }
}

pub struct BufferPolicy;

impl BufferPolicy {
    /// Picks the storage for one call.
    ///
    /// # Errors
    /// - `DeflateError::ImmutableTarget` if the destination is frozen.
    pub fn resolve(destination: Destination<'_>) -> Result<Lease<'_>> {
        let slot = match destination {
            Destination::Allocate => Slot::Fresh(ByteBuffer::new()),
            Destination::Reuse(buf) => {
                if buf.is_frozen() {
                    return Err(DeflateError::ImmutableTarget);
                }
                buf.storage_mut().clear();
                Slot::Reused(buf)
            }
        };
        Ok(Lease { slot })
    }
}

/// Capacity schedule for the codec's output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GrowthPlan {
    limit: Option<usize>,
    estimate: usize,
}

impl GrowthPlan {
    pub fn bounded(limit: usize, estimate: usize) -> Self {
        Self { limit: Some(limit), estimate }
    }

    pub fn unbounded(estimate: usize) -> Self {
        Self { limit: None, estimate }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Same plan with the limit lowered by `reserved` bytes. Returns `None`
    /// if the reserve alone does not fit.
    pub fn reserving(&self, reserved: usize) -> Option<Self> {
        match self.limit {
            Some(limit) => limit.checked_sub(reserved).map(|l| Self::bounded(l, self.estimate)),
            None => Some(*self),
        }
    }

    pub fn exceeded(&self, written: usize) -> bool {
        self.limit.is_some_and(|limit| written > limit)
    }

    /// Length to resize the output to once `current` bytes are filled.
    /// `None` once the ceiling (`limit + 1`) is reached.
    pub fn next_len(&self, current: usize) -> Option<usize> {
        let ceiling = self.limit.map_or(usize::MAX, |l| l.saturating_add(1));
        if current >= ceiling {
            return None;
        }
        let wanted = if current == 0 {
            self.estimate.max(MIN_GROWTH)
        } else {
            current
                .saturating_mul(2)
                .max(current.saturating_add(MIN_GROWTH))
                .max(self.estimate)
        };
        let next = wanted.min(ceiling);
        trace!("growing output {} -> {} (limit {:?})", current, next, self.limit);
        Some(next)
    }

    /// Ensures `out` has unfilled room past `written`.
    ///
    /// Returns `false` when the ceiling has been reached.
    pub fn grow(&self, out: &mut Vec<u8>, written: usize) -> bool {
        if written < out.len() {
            return true;
        }
        match self.next_len(written) {
            Some(len) => {
                out.resize(len, 0);
                true
            }
            None => false,
        }
    }
}
