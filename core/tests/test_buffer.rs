// Destination handling: identity, overwrite, frozen buffers and the
// state a buffer is left in after a failed call.

mod common;

#[cfg(test)]
mod tests {
    use super::common::*;
    use deflate_core::{decode, encode, ByteBuffer, CallOptions, Destination, DeflateError, ErrorKind, Format};

// # ✅ 1. Identity is preserved

    #[test]
    fn decode_returns_the_supplied_buffer() {
        let mut dest = ByteBuffer::new();
        for vector in [EMPTY_DEFLATE, A_DEFLATE, ATOZ_DEFLATE] {
            let ptr: *const ByteBuffer = &dest;
            let out = decode(vector, 50, &mut dest, &CallOptions::new()).unwrap();
            assert!(out.is_reused());
            assert!(out.is_same_buffer(ptr));
        }
        assert_eq!(&dest[..], ATOZ);
    }

    #[test]
    fn encode_returns_the_supplied_buffer() {
        let mut dest = ByteBuffer::new();
        let ptr: *const ByteBuffer = &dest;
        let out = encode(&atoz_times(1000), None, &mut dest, &CallOptions::new()).unwrap();
        assert!(out.is_same_buffer(ptr));
    }

    #[test]
    fn optional_destination_converts() {
        let mut dest = ByteBuffer::new();
        let some: Option<&mut ByteBuffer> = Some(&mut dest);
        assert!(decode(A_DEFLATE, 50, some, &CallOptions::new()).unwrap().is_reused());

        let none: Option<&mut ByteBuffer> = None;
        assert!(!decode(A_DEFLATE, 50, none, &CallOptions::new()).unwrap().is_reused());
    }

// # ✅ 2. Previous content is overwritten, never appended to

    #[test]
    fn stale_content_is_replaced() {
        let mut dest = ByteBuffer::from(vec![b'z'; 4096]);
        decode(A_DEFLATE, 50, &mut dest, &CallOptions::new()).unwrap();
        assert_eq!(&dest[..], b"a");

        let mut dest = ByteBuffer::from(b"0123456789".to_vec());
        decode(EMPTY_DEFLATE, 50, &mut dest, &CallOptions::new()).unwrap();
        assert!(dest.is_empty());
    }

    #[test]
    fn large_capacity_is_kept_for_reuse() {
        let mut dest = ByteBuffer::with_capacity(1 << 16);
        decode(ATOZ_ZLIB, 50, &mut dest, &opts(Format::Zlib)).unwrap();
        assert_eq!(&dest[..], ATOZ);
        assert!(dest.capacity() >= 1 << 16);
    }

    #[test]
    fn source_is_not_mutated() {
        let source = atoz_times(50);
        let before = source.clone();
        let packed = encode(&source, None, Destination::Allocate, &CallOptions::new()).unwrap();
        let packed_before = packed.to_vec();
        decode(&packed, source.len(), Destination::Allocate, &opts(Format::Gzip)).unwrap();
        assert_eq!(source, before);
        assert_eq!(&packed[..], &packed_before[..]);
    }

// # ❌ 3. Frozen destinations

    #[test]
    fn frozen_destination_is_rejected_before_work() {
        let mut frozen = ByteBuffer::new().frozen();
        let err = decode(EMPTY_DEFLATE, 50, &mut frozen, &CallOptions::new()).unwrap_err();
        assert_eq!(err, DeflateError::ImmutableTarget);
        assert!(!err.is_runtime());

        let mut frozen = ByteBuffer::from(b"keep".to_vec());
        frozen.freeze();
        let err = encode(ATOZ, Some(50), &mut frozen, &CallOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ImmutableTarget);
        assert_eq!(&frozen[..], b"keep");
    }

    #[test]
    fn frozen_wins_over_corrupt_input() {
        let mut frozen = ByteBuffer::new().frozen();
        let err = decode(b"\xff\xff", 50, &mut frozen, &opts(Format::Gzip)).unwrap_err();
        assert_eq!(err, DeflateError::ImmutableTarget);
    }

// # ❌ 4. Failure leaves the destination empty

    #[test]
    fn target_full_leaves_destination_empty() {
        let mut dest = ByteBuffer::from(b"old".to_vec());
        let err = decode(ATOZ_DEFLATE, 10, &mut dest, &CallOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TargetFull);
        assert!(dest.is_empty());
    }

    #[test]
    fn corrupt_input_leaves_destination_empty() {
        let mut dest = ByteBuffer::from(b"old".to_vec());
        let err = decode(b"", 10, &mut dest, &CallOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptData);
        assert!(dest.is_empty());
    }

    #[test]
    fn destination_is_usable_after_a_failure() {
        let mut dest = ByteBuffer::new();
        assert!(decode(ATOZ_DEFLATE, 10, &mut dest, &CallOptions::new()).is_err());
        let out = decode(ATOZ_DEFLATE, 50, &mut dest, &CallOptions::new()).unwrap();
        assert_eq!(&out[..], ATOZ);
    }
}
