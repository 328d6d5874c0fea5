//! Plain-record persistence: raw memory images over `std::io` seams.
//!
//! A record is any [`bytemuck::Pod`] type: fixed size, no padding, every
//! bit pattern valid. Writing emits the value's literal native memory image;
//! reading copies bytes straight back into a value. This is a same-host
//! format: byte order and field layout are whatever the host ABI says, and
//! no translation happens on either side. Types with padding do not
//! implement `Pod`, so they cannot be persisted by accident.
//!
//! Sequences add an 8-byte native-endian element count before the payload.
//! The count is authoritative: a reader materializes exactly that many
//! elements or fails, never silently truncating.
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use bytemuck::{Pod, Zeroable};
//! use vellum::record;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
//! #[repr(C)]
//! struct Sample {
//!     position: [f32; 2],
//!     weight: u32,
//! }
//!
//! let samples = [Sample { position: [1.0, 2.0], weight: 7 }];
//! let mut sink = Vec::new();
//! record::write_records(&mut sink, &samples)?;
//!
//! let back: Vec<Sample> = record::read_records(&mut Cursor::new(&sink))?;
//! assert_eq!(back, samples);
//! # Ok::<(), vellum::VellumError>(())
//! ```

use std::io::{ErrorKind, Read, Write};

use alloc::vec;
use alloc::vec::Vec;

use bytemuck::Pod;

use crate::error::VellumError;

// Payloads are consumed in slices of at most this many bytes.
const CHUNK_BYTES: usize = 64 * 1024;

/// Append `record`'s memory image to `sink`.
pub fn write_record<T: Pod, W: Write>(sink: &mut W, record: &T) -> Result<(), VellumError> {
    sink.write_all(bytemuck::bytes_of(record))?;
    Ok(())
}

/// Read one record's worth of bytes back into a value.
///
/// Fails with [`VellumError::TruncatedInput`] if the source ends first.
pub fn read_record<T: Pod, R: Read>(source: &mut R) -> Result<T, VellumError> {
    let mut record = T::zeroed();
    fill_exact(source, bytemuck::bytes_of_mut(&mut record))?;
    Ok(record)
}

/// Write `records.len()` as a native-endian `u64`, then every record's
/// bytes back to back, no padding between elements.
pub fn write_records<T: Pod, W: Write>(sink: &mut W, records: &[T]) -> Result<(), VellumError> {
    let count = records.len() as u64;
    sink.write_all(&count.to_ne_bytes())?;
    if size_of::<T>() > 0 {
        sink.write_all(bytemuck::cast_slice(records))?;
    }
    Ok(())
}

/// Read a count-prefixed sequence, materializing exactly `count` records.
///
/// The declared count is vetted before the payload is touched:
/// [`VellumError::CountTooLarge`] when it cannot be addressed or the
/// allocator refuses the reservation, [`VellumError::TruncatedInput`] when
/// the payload ends early. The payload is consumed in bounded chunks, so a
/// hostile count costs at most one chunk of reads before it fails.
pub fn read_records<T: Pod, R: Read>(source: &mut R) -> Result<Vec<T>, VellumError> {
    let mut prefix = [0u8; 8];
    fill_exact(source, &mut prefix)?;
    let count = u64::from_ne_bytes(prefix);

    let element_size = size_of::<T>();
    let count_too_large = || VellumError::CountTooLarge {
        count,
        element_size,
    };

    let count = usize::try_from(count).map_err(|_| count_too_large())?;
    if element_size == 0 {
        return Ok(vec![T::zeroed(); count]);
    }
    let payload_len = count
        .checked_mul(element_size)
        .ok_or_else(count_too_large)?;

    let mut records: Vec<T> = Vec::new();
    records
        .try_reserve_exact(count)
        .map_err(|_| count_too_large())?;

    // Chunks hold whole elements; a record larger than a chunk still moves
    // one element at a time.
    let elems_per_chunk = (CHUNK_BYTES / element_size).max(1);
    let mut chunk = vec![0u8; elems_per_chunk.min(count) * element_size];

    let mut done = 0;
    while done < count {
        let take = elems_per_chunk.min(count - done);
        let bytes = &mut chunk[..take * element_size];
        if let Err(err) = fill_exact(source, bytes) {
            return Err(match err {
                VellumError::TruncatedInput { got, .. } => VellumError::TruncatedInput {
                    needed: payload_len,
                    got: done * element_size + got,
                },
                other => other,
            });
        }
        records.extend(
            bytes
                .chunks_exact(element_size)
                .map(bytemuck::pod_read_unaligned::<T>),
        );
        done += take;
    }
    Ok(records)
}

// read_exact, but reporting how many bytes arrived before end of input.
fn fill_exact<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<(), VellumError> {
    let needed = buf.len();
    let mut got = 0;
    while got < needed {
        match source.read(&mut buf[got..]) {
            Ok(0) => return Err(VellumError::TruncatedInput { needed, got }),
            Ok(n) => got += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(VellumError::Io(err)),
        }
    }
    Ok(())
}
